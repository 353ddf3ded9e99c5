//! SQLite-backed user storage.
//!
//! The inherent methods return [`DbError`] and are used for provisioning and
//! tests. The [`UsersRepository`] impl is what the update workflow sees: it
//! races each query against the cancellation token and turns save failures
//! into `Ok(false)`.

use crate::{DbError, Result as DbErrorResult};

use users_core::{CoreError, Result as CoreErrorResult, UserRecord, UsersRepository};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{debug, error, warn};
use sqlx::{FromRow, SqlitePool};
use tokio_util::sync::CancellationToken;

const USERS_TABLE: &str = "users";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    address: String,
    password_hash: String,
    status: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(UserRecord {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone_number: r.phone_number,
            address: r.address,
            password_hash: r.password_hash,
            status: r.status,
            created_at: from_millis(r.created_at, "created_at")?,
            updated_at: from_millis(r.updated_at, "updated_at")?,
        })
    }
}

#[track_caller]
fn from_millis(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value).ok_or_else(|| DbError::InvalidRow {
        table: USERS_TABLE,
        message: format!("Invalid timestamp in {}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct SqliteUsersRepository {
    pool: SqlitePool,
}

impl SqliteUsersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user: &UserRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, first_name, last_name, email, phone_number, address,
                    password_hash, status, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.address)
        .bind(&user.password_hash)
        .bind(&user.status)
        .bind(user.created_at.timestamp_millis())
        .bind(user.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find(&self, id: i32) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, first_name, last_name, email, phone_number, address,
                    password_hash, status, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    /// Write the mutable personal information columns.
    /// Returns the number of rows affected (0 if the user no longer exists).
    pub async fn update(&self, user: &UserRecord) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, phone_number = ?, address = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone_number)
        .bind(&user.address)
        .bind(user.updated_at.timestamp_millis())
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UsersRepository for SqliteUsersRepository {
    async fn find_by_id(
        &self,
        user_id: i32,
        cancel: &CancellationToken,
    ) -> CoreErrorResult<Option<UserRecord>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CoreError::cancelled("find_by_id")),
            result = self.find(user_id) => result.map_err(|e| {
                error!("Failed to load user {}: {}", user_id, e);
                CoreError::repository(format!("Failed to load user {}", user_id))
            }),
        }
    }

    /// A cancelled save does not mean the row was left untouched: the
    /// in-flight UPDATE is abandoned, not rolled back, and SQLite may still
    /// commit it.
    async fn save(&self, user: &UserRecord, cancel: &CancellationToken) -> CoreErrorResult<bool> {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(CoreError::cancelled("save")),
            result = self.update(user) => result,
        };

        match result {
            Ok(0) => {
                warn!("User {} disappeared before it could be saved", user.id);
                Ok(false)
            }
            Ok(_) => {
                debug!("Saved user {}", user.id);
                Ok(true)
            }
            Err(e) => {
                error!("Failed to save user {}: {}", user.id, e);
                Ok(false)
            }
        }
    }
}
