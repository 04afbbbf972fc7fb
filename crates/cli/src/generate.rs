use signpost_core::Generator;
use std::path::PathBuf;
use tracing::info;

pub fn run(
    source: PathBuf,
    out: PathBuf,
    content: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Generating route resolvers for {}...", source.display());

    let mut generator = Generator::new(source, out);
    if let Some(note) = content {
        generator = generator.with_note(note);
    }

    let report = generator.run()?;

    if report.discovered > 0 {
        info!(
            "Generated {} resolver unit(s) from {} declaration(s) ({} excluded).",
            report.generated, report.discovered, report.excluded
        );
    }

    Ok(())
}
