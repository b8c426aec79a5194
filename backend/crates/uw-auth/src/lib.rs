pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod password_hasher;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use password_hasher::PasswordHasher;

/// Shortest HS256 secret accepted for signing session tokens
pub const MIN_SECRET_LEN: usize = 32;
