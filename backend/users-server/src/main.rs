use users_server::{AppState, ServerErrorResult, build_router, logger};

use users_config::Config;
use users_db::SqliteUsersRepository;

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting users-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    let pool = users_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    let users = Arc::new(SqliteUsersRepository::new(pool.clone()));
    let app_state = AppState::new(users, config.api.clone());
    let shutdown = app_state.shutdown.clone();

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address matters when port is 0 (auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);
    info!("Update endpoint: PUT {}", config.api.user_route());

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.cancel();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
