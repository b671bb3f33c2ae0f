//! mdlinspect CLI - Command-line interface for the MDL dump tool

pub mod commands;

use clap::Parser;
use commands::SectionArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mdlinspect", version)]
#[command(about = "mdlinspect: decode and dump Quake-style .mdl model files", long_about = None)]
struct Cli {
    /// Model file to decode
    path: PathBuf,

    #[command(flatten)]
    sections: SectionArgs,

    /// Print a summary (counts and sizes) instead of the dump
    #[arg(long)]
    summary: bool,

    /// Print the decoded model (or summary) as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn execute(&self) -> anyhow::Result<()> {
        if self.summary {
            commands::summary::execute(&self.path, self.json)
        } else {
            commands::dump::execute(&self.path, self.sections.to_options(), self.json)
        }
    }
}

/// Run the mdlinspect CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging; stdout is reserved for the dump
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.execute()?;

    Ok(())
}
