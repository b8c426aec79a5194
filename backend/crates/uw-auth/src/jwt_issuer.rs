use crate::{AuthError, Claims, Result as AuthErrorResult};

use uw_core::RoleKind;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Signs session tokens handed out at login
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Issue a token for `user_id` expiring `ttl_secs` from now
    #[track_caller]
    pub fn issue(&self, user_id: Uuid, role: RoleKind) -> AuthErrorResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: iat.saturating_add(self.ttl_secs),
            iat,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
