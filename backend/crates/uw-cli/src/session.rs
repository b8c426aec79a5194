//! Logged-in session, persisted between invocations of `uw`.

use crate::{CliClientResult, ClientError};

use uw_core::RoleKind;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const SESSION_FILENAME: &str = "session.toml";

/// Everything the client needs after login. Passed explicitly to [`crate::Client`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub role: RoleKind,
    pub name: String,
}

impl Session {
    /// Build from a `/api/auth/login` response body
    #[track_caller]
    pub fn from_login(body: &Value) -> CliClientResult<Self> {
        let field = |name: &str| {
            body.get(name)
                .and_then(Value::as_str)
                .ok_or_else(|| ClientError::unexpected(format!("login response has no '{}'", name)))
        };

        let token = field("token")?.to_string();
        let user_id = Uuid::parse_str(field("userId")?)
            .map_err(|e| ClientError::unexpected(format!("login userId is not a UUID: {}", e)))?;
        let role = RoleKind::from_str(field("role")?)
            .map_err(|e| ClientError::unexpected(format!("login role: {}", e)))?;
        let name = field("name")?.to_string();

        Ok(Self {
            token,
            user_id,
            role,
            name,
        })
    }

    /// `<config dir>/session.toml`
    pub fn default_path() -> CliClientResult<PathBuf> {
        Ok(uw_config::Config::config_dir()?.join(SESSION_FILENAME))
    }

    /// `None` when nobody is logged in
    pub fn load(path: &Path) -> CliClientResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ClientError::io(path, e))?;
        let session = toml::from_str(&contents).map_err(|e| {
            ClientError::session(format!("{} is not a valid session file: {}", path.display(), e))
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, path: &Path) -> CliClientResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::io(parent, e))?;
        }

        let contents = toml::to_string(self)
            .map_err(|e| ClientError::session(format!("Failed to encode session: {}", e)))?;
        std::fs::write(path, contents).map_err(|e| ClientError::io(path, e))
    }

    /// Remove the session file. Returns whether one existed.
    pub fn clear(path: &Path) -> CliClientResult<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ClientError::io(path, e)),
        }
    }

    #[track_caller]
    pub fn require_role(&self, role: RoleKind) -> CliClientResult<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(ClientError::session(format!(
                "This command needs an {} login; logged in as {} ({})",
                role, self.name, self.role
            )))
        }
    }
}
