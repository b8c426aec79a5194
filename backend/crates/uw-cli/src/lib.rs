//! uw-cli library
//!
//! The HTTP client, session handling and the underwriter review workflow,
//! exported for the `uw` binary and for tests.

pub mod analytics_commands;
pub mod application_commands;
pub mod auth_commands;
pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod dispatch;
pub(crate) mod review;
pub mod session;
pub mod underwriter_commands;

#[cfg(test)]
mod tests;

pub use analytics_commands::AnalyticsCommands;
pub use application_commands::ApplicationCommands;
pub use auth_commands::AuthCommands;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use dispatch::dispatch;
pub use review::{
    compliance_checker::{
        ComplianceChecker, ComplianceOutcome, ComplianceReport, ConsentComplianceChecker,
        RegulationCheck, RegulationStatus,
    },
    queue_tab::QueueTab,
    review_application::ReviewApplication,
    review_session::{ReviewReport, ReviewSession},
    risk_assessor::{PredictMlRiskAssessor, RiskAssessment, RiskAssessor, RiskLevel},
};
pub use session::Session;
pub use underwriter_commands::{UnderwriterCommands, UnderwriterFields};
