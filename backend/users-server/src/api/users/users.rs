//! Users REST API handlers

use crate::{
    ApiError, ApiResult, AppState, MSG_BODY_INVALID, MSG_BODY_REQUIRED, MSG_USER_ID_INVALID,
    UpdateUserRequest, UpdateUserSuccessResponse,
};

use users_core::UpdateUserOutcome;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
};
use log::{debug, info};

/// PUT /api/v1/users/{user_id}
///
/// Partially update a user's personal information
pub async fn update_user(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<UpdateUserSuccessResponse>> {
    let Path(user_id) = user_id.map_err(|e| {
        debug!("Rejected user id: {}", e);
        ApiError::invalid_data(MSG_USER_ID_INVALID)
    })?;

    let request = parse_body(user_id, &body)?;

    // Cancelled on shutdown, or when this future is dropped by a disconnect
    let cancel = state.shutdown.child_token();
    let _guard = cancel.clone().drop_guard();

    let outcome = state
        .update_service()
        .update(request.into_command(user_id), &cancel)
        .await?;

    info!("PUT user {} -> {}", user_id, outcome.kind());

    match outcome {
        UpdateUserOutcome::Success { response, .. } => Ok(Json(response.into())),
        UpdateUserOutcome::ValidationFailure { errors, message } => {
            Err(ApiError::validation(message, errors))
        }
        UpdateUserOutcome::NotFound { message } => Err(ApiError::user_not_found(message)),
        UpdateUserOutcome::PersistenceFailure { message } => Err(ApiError::server_error(message)),
    }
}

/// Missing or `null` bodies never reach the service
fn parse_body(user_id: i32, body: &[u8]) -> ApiResult<UpdateUserRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::invalid_data(MSG_BODY_REQUIRED));
    }

    let request: Option<UpdateUserRequest> = serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected update body for user {}: {}", user_id, e);
        ApiError::invalid_data(MSG_BODY_INVALID)
    })?;

    request.ok_or_else(|| ApiError::invalid_data(MSG_BODY_REQUIRED))
}
