mod generate;
mod routes;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "signpost",
    version,
    about = "A build-time route-registry generator",
    long_about = "Signpost scans a Rust source tree for types tagged #[route(path = \"…\")] and \
                  emits, per tagged type, one generated source unit whose find_target_class \
                  function resolves that path string back to the declaring type."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate route resolver units for a source tree
    #[command(
        long_about = "Discovers every route declaration below SOURCE_ROOT and writes one \
                      resolver unit per declaration into the output directory, mirroring the \
                      source module layout. Malformed declarations are reported and skipped; \
                      an output write failure fails the run."
    )]
    Generate {
        /// Path to the source root to scan (usually a crate's src/ directory)
        #[arg(value_name = "SOURCE_ROOT")]
        source: PathBuf,
        /// Directory to write generated units into
        #[arg(long, value_name = "DIR")]
        out: PathBuf,
        /// Free-form note logged at the start of the run; purely informational
        #[arg(long, value_name = "NOTE")]
        content: Option<String>,
    },
    /// List the route declarations of a source tree without generating code
    Routes {
        /// Path to the source root to scan
        #[arg(value_name = "SOURCE_ROOT")]
        source: PathBuf,
        /// Print the route table as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    signpost_core::logging::init_logging();

    match cli.command {
        Commands::Generate {
            source,
            out,
            content,
        } => generate::run(source, out, content),
        Commands::Routes { source, json } => routes::run(source, json),
    }
}
