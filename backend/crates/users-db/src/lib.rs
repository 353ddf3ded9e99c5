pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{MIGRATOR, connect};
pub use error::{DbError, Result};
pub use repositories::sqlite_users_repository::SqliteUsersRepository;

const BUSY_TIMEOUT_SECS: u64 = 5;
