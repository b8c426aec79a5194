use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[command(name = "uw")]
#[command(about = "Underwriting workbench CLI for applicants and underwriters")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "UW_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Session file (defaults to session.toml in the config directory)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
