//! Personal information update workflow.
//!
//! Order of operations matters to callers:
//! 1. Validation runs first and never touches storage
//! 2. The user is fetched at most once
//! 3. Save is attempted at most once, and only when a field really changed

use crate::{
    Result as CoreErrorResult, UpdateUserCommand, UpdateUserOutcome, UserRecord, UsersRepository,
    validate,
};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct UpdatePersonalInformationService {
    users: Arc<dyn UsersRepository>,
}

impl UpdatePersonalInformationService {
    pub fn new(users: Arc<dyn UsersRepository>) -> Self {
        Self { users }
    }

    /// Validate, diff and persist a partial update.
    ///
    /// Returns `Err` only for failures surfaced by the repository that are
    /// not a rejected save (cancellation, unreadable storage).
    pub async fn update(
        &self,
        command: UpdateUserCommand,
        cancel: &CancellationToken,
    ) -> CoreErrorResult<UpdateUserOutcome> {
        let validated = validate(&command);
        if !validated.is_valid() {
            debug!(
                "Rejected update for user {}: {:?}",
                command.user_id, validated.errors
            );
            return Ok(UpdateUserOutcome::validation_failure(validated.errors));
        }

        let Some(mut user) = self.users.find_by_id(command.user_id, cancel).await? else {
            debug!("User {} not found", command.user_id);
            return Ok(UpdateUserOutcome::not_found());
        };

        let fields = validated.fields;
        let mut changed = false;
        changed |= UserRecord::apply_change(&mut user.first_name, fields.first_name);
        changed |= UserRecord::apply_change(&mut user.last_name, fields.last_name);
        changed |= UserRecord::apply_change(&mut user.address, fields.address);
        changed |= UserRecord::apply_change(&mut user.phone_number, fields.phone_number);

        if !changed {
            debug!("No changes for user {}", user.id);
            return Ok(UpdateUserOutcome::unchanged(&user));
        }

        user.updated_at = Utc::now();

        if !self.users.save(&user, cancel).await? {
            warn!("Failed to persist personal information for user {}", user.id);
            return Ok(UpdateUserOutcome::persistence_failure());
        }

        info!("Updated personal information for user {}", user.id);
        Ok(UpdateUserOutcome::updated(&user))
    }
}
