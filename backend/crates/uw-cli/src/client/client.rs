use crate::{CliClientResult, ClientError, Session};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, IntoUrl, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the uw-server REST API
pub struct Client {
    pub base_url: String,
    pub session: Option<Session>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    /// * `session` - Logged-in session whose token is sent as a bearer token
    pub fn new(base_url: &str, session: Option<Session>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.request_url(method, format!("{}{}", self.base_url, path))
    }

    /// Build a request with the session's bearer token, if any
    fn request_url(&self, method: Method, url: impl IntoUrl) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(ref session) = self.session {
            req = req.bearer_auth(&session.token);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let error = body.get("error");
            // Structured errors carry {code, message}; proxy errors may be a bare string
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message").and_then(|v| v.as_str()).or(e.as_str()))
                .map(String::from)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            return Err(ClientError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Register an account. `body` is the full registration payload.
    pub async fn register(&self, body: &Value) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/auth/register").json(body);
        self.execute(req).await
    }

    /// Log in and return the login response (token, role, name, userId)
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/auth/login")
            .json(&LoginRequest { email, password });
        self.execute(req).await
    }

    // =========================================================================
    // Underwriter Directory
    // =========================================================================

    pub async fn list_underwriters(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/underwriters");
        self.execute(req).await
    }

    pub async fn create_underwriter(&self, body: &Value) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/underwriters").json(body);
        self.execute(req).await
    }

    // =========================================================================
    // Application Operations
    // =========================================================================

    /// Submit an application payload
    pub async fn submit_application(&self, body: &Value) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/applications").json(body);
        self.execute(req).await
    }

    pub async fn list_applicant_applications(&self, applicant_id: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::GET,
            &format!("/api/applications/applicant/{}", applicant_id),
        );
        self.execute(req).await
    }

    pub async fn list_underwriter_applications(
        &self,
        underwriter_id: &str,
    ) -> CliClientResult<Value> {
        let req = self.request(
            Method::GET,
            &format!("/api/applications/underwriter/{}", underwriter_id),
        );
        self.execute(req).await
    }

    /// Move an application to `status`
    pub async fn update_status(&self, application_id: &str, status: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateStatusRequest<'a> {
            status: &'a str,
        }

        let req = self
            .request(
                Method::PUT,
                &format!("/api/applications/{}/status", application_id),
            )
            .json(&UpdateStatusRequest { status });
        self.execute(req).await
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    pub async fn test_city(&self, city: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/debug/test_city/{}", city));
        self.execute(req).await
    }

    pub async fn finance(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/debug/finance");
        self.execute(req).await
    }

    /// Risk alerts, filtered by arbitrary query parameters (e.g. `location`)
    pub async fn risk_alerts(&self, params: &[(String, String)]) -> CliClientResult<Value> {
        let raw = format!("{}/api/risk_alerts", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let req = self.request_url(Method::GET, url);
        self.execute(req).await
    }

    pub async fn predict_ml(&self, features: &Value) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/predict_ml").json(features);
        self.execute(req).await
    }
}
