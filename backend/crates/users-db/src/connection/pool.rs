use crate::{BUSY_TIMEOUT_SECS, DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open (creating if needed) the SQLite database at `path` and apply migrations.
pub async fn connect(path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    if max_connections == 0 {
        return Err(DbError::Initialization {
            message: "max_connections must be at least 1".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    info!("Connecting to database: {}", path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS)),
        )
        .await?;

    info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    Ok(pool)
}
