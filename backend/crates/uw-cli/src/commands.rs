use crate::{
    analytics_commands::AnalyticsCommands, application_commands::ApplicationCommands,
    auth_commands::AuthCommands, underwriter_commands::UnderwriterCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Register, log in and out
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Underwriter directory
    Underwriter {
        #[command(subcommand)]
        action: UnderwriterCommands,
    },

    /// Submit and track applications
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },

    /// Review one application from your queue: risk, compliance, premium
    Review {
        /// Application ID (UUID)
        id: String,

        /// Risk-based premium adjustment in percent (-30 to 50)
        #[arg(long, allow_hyphen_values = true)]
        adjust: Option<i32>,

        /// Decide the application after review (e.g. "Approved", "Rejected")
        #[arg(long)]
        decide: Option<String>,
    },

    /// External analytics service
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
}
