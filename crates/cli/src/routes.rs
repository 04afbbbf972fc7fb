use signpost_core::discover;
use std::path::PathBuf;
use tracing::info;

pub fn run(source: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let discovery = discover::discover(&source)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&discovery.declarations)?
        );
        return Ok(());
    }

    if discovery.declarations.is_empty() {
        info!("no route declarations found");
        return Ok(());
    }

    for decl in &discovery.declarations {
        println!("{}  {}", decl.path, decl.qualified_name());
    }

    Ok(())
}
