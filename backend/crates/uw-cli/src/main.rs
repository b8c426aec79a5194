//! uw - Underwriting Workbench CLI
//!
//! # Examples
//!
//! ```bash
//! # Log in (the session is kept in .uw/session.toml)
//! uw auth login --email ann@example.com --password secret
//!
//! # Submit an application
//! uw application submit --file life.json --underwriter-id <uuid>
//!
//! # Underwriter: pending queue, then review and approve
//! uw application list --tab pending --pretty
//! uw review <id> --adjust 10 --decide Approved
//! ```

use uw_cli::{Cli, Client, Session, dispatch};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let session_path = match cli.session_file.clone() {
        Some(path) => path,
        None => match Session::default_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let session = match Session::load(&session_path) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Remove {} and log in again.", session_path.display());
            return ExitCode::FAILURE;
        }
    };

    let client = Client::new(&cli.server, session);
    let result = dispatch(&client, cli.command, &session_path).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
