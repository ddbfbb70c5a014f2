use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    MissingFields(&'static str),
    InvalidUsername,
    WeakPassword,
    PasswordMismatch,
    UsernameTaken,
    InvalidCredentials,
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::MissingFields(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            AppError::InvalidUsername => (
                StatusCode::BAD_REQUEST,
                "Username must be between 6 and 20 characters".to_string(),
            ),
            AppError::WeakPassword => (
                StatusCode::BAD_REQUEST,
                "Password must be at least 6 characters long".to_string(),
            ),
            AppError::PasswordMismatch => {
                (StatusCode::BAD_REQUEST, "Passwords do not match".to_string())
            }
            AppError::UsernameTaken => {
                (StatusCode::BAD_REQUEST, "Username already exists".to_string())
            }
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = Json(ErrorResponse { error });

        (status, body).into_response()
    }
}
