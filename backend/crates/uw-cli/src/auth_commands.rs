use crate::underwriter_commands::UnderwriterFields;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// "applicant" or "underwriter"
        #[arg(long)]
        role: String,
        #[command(flatten)]
        underwriter: UnderwriterFields,
    },
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
}
