use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Location risk probe for a city
    TestCity { city: String },
    /// Financial indicators
    Finance,
    /// Risk alerts, optionally filtered
    RiskAlerts {
        /// Query parameter as key=value, e.g. location=Sydney
        #[arg(long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
    /// Score an applicant feature set with the ML model
    Predict {
        /// JSON file with the model features
        #[arg(long)]
        file: PathBuf,
    },
}

pub(crate) fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    if key.trim().is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.trim().to_string(), value.to_string()))
}
