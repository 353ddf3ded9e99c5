pub mod update_user_request;
pub mod update_user_success_response;
#[allow(clippy::module_inception)]
pub mod users;
