use crate::{
    MSG_INVALID_USER_DATA, MSG_NO_CHANGES, MSG_UPDATE_FAILED, MSG_UPDATED, MSG_USER_NOT_FOUND,
    UpdateUserResponse, UserRecord,
};

use std::fmt;

/// Result of processing one update request.
///
/// Exactly one category applies; only `Success` carries a user snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateUserOutcome {
    Success {
        response: UpdateUserResponse,
        message: String,
    },
    ValidationFailure {
        errors: Vec<String>,
        message: String,
    },
    NotFound {
        message: String,
    },
    PersistenceFailure {
        message: String,
    },
}

/// Fieldless discriminant of [`UpdateUserOutcome`], used for logging and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateUserOutcomeKind {
    Success,
    ValidationFailure,
    NotFound,
    PersistenceFailure,
}

impl UpdateUserOutcome {
    /// Changes were saved
    pub fn updated(user: &UserRecord) -> Self {
        Self::success(user, MSG_UPDATED)
    }

    /// Every provided value already matched the stored one
    pub fn unchanged(user: &UserRecord) -> Self {
        Self::success(user, MSG_NO_CHANGES)
    }

    pub fn validation_failure(errors: Vec<String>) -> Self {
        Self::ValidationFailure {
            errors,
            message: MSG_INVALID_USER_DATA.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound {
            message: MSG_USER_NOT_FOUND.to_string(),
        }
    }

    pub fn persistence_failure() -> Self {
        Self::PersistenceFailure {
            message: MSG_UPDATE_FAILED.to_string(),
        }
    }

    fn success(user: &UserRecord, message: &str) -> Self {
        Self::Success {
            response: UpdateUserResponse::from_user(user, message),
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> UpdateUserOutcomeKind {
        match self {
            Self::Success { .. } => UpdateUserOutcomeKind::Success,
            Self::ValidationFailure { .. } => UpdateUserOutcomeKind::ValidationFailure,
            Self::NotFound { .. } => UpdateUserOutcomeKind::NotFound,
            Self::PersistenceFailure { .. } => UpdateUserOutcomeKind::PersistenceFailure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::ValidationFailure { message, .. }
            | Self::NotFound { message }
            | Self::PersistenceFailure { message } => message,
        }
    }

    /// Validation errors; empty for every other category
    pub fn errors(&self) -> &[String] {
        match self {
            Self::ValidationFailure { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn response(&self) -> Option<&UpdateUserResponse> {
        match self {
            Self::Success { response, .. } => Some(response),
            _ => None,
        }
    }
}

impl UpdateUserOutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ValidationFailure => "validation_failure",
            Self::NotFound => "not_found",
            Self::PersistenceFailure => "persistence_failure",
        }
    }
}

impl fmt::Display for UpdateUserOutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
