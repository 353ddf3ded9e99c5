pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::{ApiError, ErrorResponse, Result as ApiResult},
    users::{
        update_user_request::UpdateUserRequest,
        update_user_success_response::UpdateUserSuccessResponse, users::update_user,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;

pub const MSG_BODY_REQUIRED: &str = "Request body is required.";
pub const MSG_BODY_INVALID: &str = "Request body is not a valid update object.";
pub const MSG_USER_ID_INVALID: &str = "User id must be an integer.";
pub const MSG_REQUEST_CANCELLED: &str = "The request was cancelled.";
pub const MSG_UNEXPECTED_ERROR: &str = "An unexpected error occurred.";
