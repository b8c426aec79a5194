//! bcrypt hashing on the blocking thread pool.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        let result = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::HashTask {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        result.map_err(|source| AuthError::PasswordHash {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// `Ok(false)` for a wrong password; errors only for a malformed hash
    pub async fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::HashTask {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        result.map_err(|source| AuthError::PasswordHash {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
