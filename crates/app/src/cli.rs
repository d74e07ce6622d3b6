use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "repodeck")]
#[command(about = "A terminal dashboard for your repositories, articles and quality metrics")]
pub struct CliArgs {
    /// Base URL of the backend API (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the access token file (overrides config)
    #[arg(long)]
    pub token_file: Option<PathBuf>,
}
