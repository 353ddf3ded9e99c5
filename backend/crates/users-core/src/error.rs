use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures the update workflow does not classify into an outcome.
///
/// Validation, missing users and rejected saves are reported through
/// [`crate::UpdateUserOutcome`]; these variants are propagated as-is.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Operation cancelled: {operation} {location}")]
    Cancelled {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Repository error: {message} {location}")]
    Repository {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a cancellation error for the named repository operation
    #[track_caller]
    pub fn cancelled(operation: &'static str) -> Self {
        CoreError::Cancelled {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a repository error
    #[track_caller]
    pub fn repository<S: Into<String>>(message: S) -> Self {
        CoreError::Repository {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CoreError::Cancelled { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
