use users_config::ApiConfig;
use users_core::{UpdatePersonalInformationService, UsersRepository};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersRepository>,
    /// Cancelled on Ctrl+C; request tokens are children of it
    pub shutdown: CancellationToken,
    pub api_config: ApiConfig,
}

impl AppState {
    pub fn new(users: Arc<dyn UsersRepository>, api_config: ApiConfig) -> Self {
        Self {
            users,
            shutdown: CancellationToken::new(),
            api_config,
        }
    }

    pub fn update_service(&self) -> UpdatePersonalInformationService {
        UpdatePersonalInformationService::new(self.users.clone())
    }
}
