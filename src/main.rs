use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use firstline::Config;

mod commands;

/// Environment variable holding the log filter (e.g. `FIRSTLINE_LOG=debug`)
const LOG_ENV: &str = "FIRSTLINE_LOG";

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Collect the first line of every .txt file in a folder", long_about = None)]
struct Cli {
    /// Folder to scan (prompted for when omitted)
    folder: Option<String>,

    /// Write the combined file here instead of ~/Desktop/combined_txt_output.txt
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (default: $FIRSTLINE_CONFIG, then the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    commands::collate::execute(cli.folder, cli.output, &config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
