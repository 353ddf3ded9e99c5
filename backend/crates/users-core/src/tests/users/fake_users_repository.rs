use crate::{CoreError, Result as CoreErrorResult, UserRecord, UsersRepository};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio_util::sync::CancellationToken;

/// In-memory repository that records every call made by the workflow
#[derive(Default)]
pub(crate) struct FakeUsersRepository {
    pub(crate) stored: Mutex<Option<UserRecord>>,
    pub(crate) saved: Mutex<Vec<UserRecord>>,
    pub(crate) save_result: Option<bool>,
    pub(crate) cancel_on_find: bool,
    pub(crate) find_calls: AtomicUsize,
    pub(crate) save_calls: AtomicUsize,
}

impl FakeUsersRepository {
    pub(crate) fn with_user(user: UserRecord) -> Self {
        Self {
            stored: Mutex::new(Some(user)),
            ..Default::default()
        }
    }

    pub(crate) fn failing_saves(mut self) -> Self {
        self.save_result = Some(false);
        self
    }

    /// Cancel the request token once the user has been loaded
    pub(crate) fn cancelling_after_find(mut self) -> Self {
        self.cancel_on_find = true;
        self
    }

    pub(crate) fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_saved(&self) -> Option<UserRecord> {
        self.saved.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl UsersRepository for FakeUsersRepository {
    async fn find_by_id(
        &self,
        user_id: i32,
        cancel: &CancellationToken,
    ) -> CoreErrorResult<Option<UserRecord>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if cancel.is_cancelled() {
            return Err(CoreError::cancelled("find_by_id"));
        }

        let found = self
            .stored
            .lock()
            .unwrap()
            .clone()
            .filter(|user| user.id == user_id);

        if self.cancel_on_find {
            cancel.cancel();
        }

        Ok(found)
    }

    async fn save(&self, user: &UserRecord, cancel: &CancellationToken) -> CoreErrorResult<bool> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if cancel.is_cancelled() {
            return Err(CoreError::cancelled("save"));
        }

        let succeeded = self.save_result.unwrap_or(true);
        if succeeded {
            *self.stored.lock().unwrap() = Some(user.clone());
            self.saved.lock().unwrap().push(user.clone());
        }

        Ok(succeeded)
    }
}

pub(crate) fn existing_user(id: i32) -> UserRecord {
    let a_day_ago = Utc::now() - Duration::days(1);
    UserRecord {
        id,
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        email: "ana@example.com".to_string(),
        phone_number: "5511122233".to_string(),
        address: "Direccion".to_string(),
        password_hash: "hash".to_string(),
        status: "ACTIVE".to_string(),
        created_at: a_day_ago - Duration::days(4),
        updated_at: a_day_ago,
    }
}
