use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let confirm_password = req.confirm_password.unwrap_or_default();

    if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(AppError::MissingFields("All fields are required"));
    }

    if username.len() < 6 || username.len() > 20 {
        return Err(AppError::InvalidUsername);
    }

    if password.len() < 6 {
        return Err(AppError::WeakPassword);
    }

    if password != confirm_password {
        return Err(AppError::PasswordMismatch);
    }

    match User::create(&state.pool, &username, &password).await {
        Ok(user) => {
            tracing::info!("Registered user {} with id {}", user.username, user.id);
            Ok((
                StatusCode::CREATED,
                Json(RegisterResponse {
                    message: "User registered successfully!".to_string(),
                }),
            ))
        }
        Err(e) if e.as_database_error().is_some_and(|db_err| db_err.is_unique_violation()) => {
            Err(AppError::UsernameTaken)
        }
        Err(e) => {
            tracing::error!("Failed to create user {}: {}", username, e);
            Err(AppError::Internal(e.to_string()))
        }
    }
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return Err(AppError::MissingFields("All fields are required"));
    }

    let user = match User::find_by_username(&state.pool, &username).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to look up user {}: {}", username, e);
            return Err(AppError::Internal(e.to_string()));
        }
    };

    // 用户不存在与密码错误返回完全相同的响应
    let verified = match &user {
        Some(user) => user
            .verify_login(&password)
            .map_err(|e| AppError::Internal(e.to_string()))?,
        None => false,
    };

    match user {
        Some(user) if verified => Ok((
            StatusCode::OK,
            Json(LoginResponse {
                message: "Login successful!".to_string(),
                user_id: user.id,
            }),
        )),
        _ => Err(AppError::InvalidCredentials),
    }
}
