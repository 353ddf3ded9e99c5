use crate::{Result as CoreErrorResult, UserRecord};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Storage capability consumed by the update workflow.
///
/// Implementations must honour the cancellation token and report it as
/// [`crate::CoreError::Cancelled`].
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Fetch a user by ID. Returns `Ok(None)` if no such user exists.
    async fn find_by_id(
        &self,
        user_id: i32,
        cancel: &CancellationToken,
    ) -> CoreErrorResult<Option<UserRecord>>;

    /// Persist the mutable fields of an existing user.
    ///
    /// Any storage failure is logged and reported as `Ok(false)`. `Err` is
    /// reserved for cancellation.
    async fn save(&self, user: &UserRecord, cancel: &CancellationToken) -> CoreErrorResult<bool>;
}
