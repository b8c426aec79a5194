use crate::ReviewApplication;

use uw_core::ApplicationStatus;

use clap::ValueEnum;

/// Views over an underwriter's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QueueTab {
    #[default]
    All,
    Pending,
    InReview,
    RequiresInfo,
    /// Decided: approved, rejected or completed
    Completed,
}

impl QueueTab {
    pub fn includes(&self, status: ApplicationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == ApplicationStatus::Pending,
            Self::InReview => status == ApplicationStatus::InReview,
            Self::RequiresInfo => status == ApplicationStatus::RequiresInfo,
            Self::Completed => status.is_decided(),
        }
    }

    /// Keeps the server's newest-first order
    pub fn filter<'a>(&self, applications: &'a [ReviewApplication]) -> Vec<&'a ReviewApplication> {
        applications
            .iter()
            .filter(|application| self.includes(application.status))
            .collect()
    }
}
