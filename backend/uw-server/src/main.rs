use uw_server::{AppState, build_router, logger};

use std::error::Error;
use std::str::FromStr;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is the normal case outside development
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Load and validate configuration
    let config = uw_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting uw-server v{}", env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        info!("Environment overrides loaded from .env");
    }
    config.log_summary();

    // Initialize database pool
    let database_url = config.database_url()?;
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::from_str(&database_url)?
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    info!("Running database migrations...");
    uw_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    if !config.auth.enabled {
        warn!("Bearer tokens are optional - applications and analytics are open");
    }

    let app_state = AppState::from_config(pool, &config)?;
    info!("Analytics service: {}", app_state.analytics.base_url());
    info!(
        "Tokens valid for {}s, bcrypt cost {}",
        app_state.jwt_issuer.ttl_secs(),
        app_state.password_hasher.cost()
    );

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
