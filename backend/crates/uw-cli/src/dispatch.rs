//! Runs one parsed command against the server.

use crate::{
    AnalyticsCommands, ApplicationCommands, AuthCommands, CliClientResult, Client, ClientError,
    Commands, ConsentComplianceChecker, PredictMlRiskAssessor, ReviewApplication, ReviewSession,
    Session, UnderwriterCommands, UnderwriterFields,
};

use uw_core::{ApplicationStatus, RoleKind};

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: &'a str,
    #[serde(flatten)]
    underwriter: &'a UnderwriterFields,
}

#[track_caller]
fn require_session(client: &Client) -> CliClientResult<&Session> {
    client
        .session
        .as_ref()
        .ok_or_else(|| ClientError::session("Not logged in; run `uw auth login` first"))
}

fn read_json(path: &Path) -> CliClientResult<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| ClientError::io(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Execute `command` and return the JSON to print
pub async fn dispatch(
    client: &Client,
    command: Commands,
    session_path: &Path,
) -> CliClientResult<Value> {
    match command {
        Commands::Auth { action } => auth(client, action, session_path).await,
        Commands::Underwriter { action } => match action {
            UnderwriterCommands::List => client.list_underwriters().await,
            UnderwriterCommands::Create {
                name,
                email,
                password,
                underwriter,
            } => {
                let mut body = serde_json::to_value(&underwriter)?;
                body["name"] = json!(name);
                body["email"] = json!(email);
                body["password"] = json!(password);
                client.create_underwriter(&body).await
            }
        },
        Commands::Application { action } => application(client, action).await,
        Commands::Review { id, adjust, decide } => review(client, &id, adjust, decide).await,
        Commands::Analytics { action } => match action {
            AnalyticsCommands::TestCity { city } => client.test_city(&city).await,
            AnalyticsCommands::Finance => client.finance().await,
            AnalyticsCommands::RiskAlerts { params } => client.risk_alerts(&params).await,
            AnalyticsCommands::Predict { file } => client.predict_ml(&read_json(&file)?).await,
        },
    }
}

async fn auth(
    client: &Client,
    action: AuthCommands,
    session_path: &Path,
) -> CliClientResult<Value> {
    match action {
        AuthCommands::Register {
            name,
            email,
            password,
            role,
            underwriter,
        } => {
            let body = serde_json::to_value(RegisterBody {
                name: &name,
                email: &email,
                password: &password,
                role: &role,
                underwriter: &underwriter,
            })?;
            client.register(&body).await
        }
        AuthCommands::Login { email, password } => {
            let response = client.login(&email, &password).await?;
            let session = Session::from_login(&response)?;
            session.save(session_path)?;

            Ok(json!({
                "success": true,
                "message": format!("Logged in as {} ({})", session.name, session.role),
                "userId": session.user_id,
                "role": session.role,
            }))
        }
        AuthCommands::Logout => {
            let removed = Session::clear(session_path)?;
            Ok(json!({
                "success": true,
                "message": if removed { "Logged out" } else { "No session to clear" },
            }))
        }
        AuthCommands::Whoami => {
            let session = require_session(client)?;
            Ok(json!({
                "userId": session.user_id,
                "role": session.role,
                "name": session.name,
            }))
        }
    }
}

async fn application(client: &Client, action: ApplicationCommands) -> CliClientResult<Value> {
    match action {
        ApplicationCommands::Submit {
            file,
            underwriter_id,
        } => {
            let session = require_session(client)?;
            session.require_role(RoleKind::Applicant)?;

            let mut payload = read_json(&file)?;
            let object = payload.as_object_mut().ok_or_else(|| {
                ClientError::unexpected(format!("{} must hold a JSON object", file.display()))
            })?;
            object
                .entry("applicantId")
                .or_insert_with(|| json!(session.user_id));
            if let Some(underwriter_id) = underwriter_id {
                object.insert("underwriterId".to_string(), json!(underwriter_id));
            }

            client.submit_application(&payload).await
        }
        ApplicationCommands::List { tab } => {
            let session = require_session(client)?;
            let user_id = session.user_id.to_string();

            match session.role {
                RoleKind::Applicant => client.list_applicant_applications(&user_id).await,
                RoleKind::Underwriter => {
                    let response = client.list_underwriter_applications(&user_id).await?;
                    let queue = ReviewApplication::from_list_response(&response)?;

                    Ok(json!({
                        "success": true,
                        "tab": tab.to_possible_value().map(|v| v.get_name().to_string()),
                        "applications": tab.filter(&queue),
                    }))
                }
            }
        }
        ApplicationCommands::Status { id, status } => client.update_status(&id, &status).await,
    }
}

async fn review(
    client: &Client,
    application_id: &str,
    adjust: Option<i32>,
    decide: Option<String>,
) -> CliClientResult<Value> {
    let session = require_session(client)?;
    session.require_role(RoleKind::Underwriter)?;

    let id = Uuid::parse_str(application_id.trim())
        .map_err(|_| ClientError::review(format!("Invalid application id: {}", application_id)))?;

    let response = client
        .list_underwriter_applications(&session.user_id.to_string())
        .await?;
    let application = ReviewApplication::from_list_response(&response)?
        .into_iter()
        .find(|application| application.id == id)
        .ok_or_else(|| {
            ClientError::review(format!("Application {} is not in your queue", application_id))
        })?;

    let decision = decide
        .map(|status| {
            ApplicationStatus::from_str(&status).map_err(|e| ClientError::review(e.to_string()))
        })
        .transpose()?;

    let mut review = ReviewSession::new();
    review.select(application);

    // A decision can go ahead unscored; ensure_decidable gates approval
    let risk_error = match review
        .run_risk_assessment(&PredictMlRiskAssessor::new(client))
        .await
    {
        Ok(_) => None,
        Err(e) if decision.is_some() => Some(e.to_string()),
        Err(e) => return Err(e),
    };
    review.run_compliance_check(&ConsentComplianceChecker)?;
    if let Some(percent) = adjust {
        review.adjust_premium(percent);
    }

    let report = review.report();

    let decision = match decision {
        Some(next) => {
            review.ensure_decidable(next)?;
            Some(client.update_status(&id.to_string(), next.as_str()).await?)
        }
        None => None,
    };

    Ok(json!({
        "success": true,
        "report": report,
        "riskError": risk_error,
        "decision": decision,
    }))
}
