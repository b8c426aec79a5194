pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::application_repository::ApplicationRepository;
pub use repositories::user_repository::UserRepository;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all pending migrations to `pool`
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
