use clap::{Args, Subcommand};
use serde::Serialize;

#[derive(Subcommand)]
pub enum UnderwriterCommands {
    /// List all underwriters
    List,
    /// Register an underwriter account
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[command(flatten)]
        underwriter: UnderwriterFields,
    },
}

/// Underwriter-only registration fields
#[derive(Args, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderwriterFields {
    /// Comma-separated, e.g. "Life, Health"
    #[arg(long)]
    pub insurance_types: Option<String>,
    #[arg(long)]
    pub years_experience: Option<u32>,
    #[arg(long)]
    pub region: Option<String>,
    /// Repeat for several certificates
    #[arg(long = "certificate")]
    pub certificates: Vec<String>,
    #[arg(long)]
    pub phone: Option<String>,
}
