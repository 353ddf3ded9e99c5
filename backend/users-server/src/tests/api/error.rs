use crate::{ApiError, MSG_REQUEST_CANCELLED, MSG_UNEXPECTED_ERROR};

use users_core::CoreError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_errors() {
    let error = ApiError::validation(
        "Invalid user data.",
        vec!["First name cannot be empty.".to_string()],
    );

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "InvalidData");
    assert_eq!(json["message"], "Invalid user data.");
    assert_eq!(json["errors"][0], "First name cannot be empty.");
}

#[tokio::test]
async fn test_invalid_data_without_errors_omits_errors_key() {
    let error = ApiError::invalid_data("Request body is required.");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "InvalidData");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_user_not_found_returns_400() {
    let error = ApiError::user_not_found("User not found.");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "UserNotFound");
    assert_eq!(json["message"], "User not found.");
}

#[tokio::test]
async fn test_server_error_returns_500() {
    let error = ApiError::server_error("Could not update user information.");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "ServerError");
    assert_eq!(json["message"], "Could not update user information.");
}

#[tokio::test]
async fn test_core_cancellation_maps_to_server_error() {
    let error: ApiError = CoreError::cancelled("find_by_id").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], MSG_REQUEST_CANCELLED);
}

#[tokio::test]
async fn test_core_repository_error_hides_details() {
    let error: ApiError = CoreError::repository("disk I/O error at /var/data").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], MSG_UNEXPECTED_ERROR);
    assert!(!json.to_string().contains("/var/data"));
}
