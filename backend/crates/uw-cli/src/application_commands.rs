use crate::QueueTab;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ApplicationCommands {
    /// Submit an application from a JSON payload file
    Submit {
        /// Payload with insuranceType, personalInfo, insuranceSpecificData, ...
        #[arg(long)]
        file: PathBuf,
        /// Underwriter ID, overriding the payload's
        #[arg(long)]
        underwriter_id: Option<String>,
    },
    /// List your applications (underwriters: your review queue)
    List {
        /// Queue view, underwriters only
        #[arg(long, value_enum, default_value_t = QueueTab::All)]
        tab: QueueTab,
    },
    /// Change an application's status
    Status {
        /// Application ID (UUID)
        id: String,
        /// New status, e.g. "In Review"
        status: String,
    },
}
