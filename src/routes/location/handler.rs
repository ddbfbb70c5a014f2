use axum::extract::{Json, Query, State};
use chrono::Utc;

use crate::{AppState, error::AppError, utils::timestamp_from_millis};

use super::model::{
    HISTORY_LIMIT, LocationHistoryResponse, LocationPing, LocationQuery, UpdateLocationRequest,
    UpdateLocationResponse,
};

#[axum::debug_handler]
pub async fn update_location(
    State(state): State<AppState>,
    Json(req): Json<UpdateLocationRequest>,
) -> Result<Json<UpdateLocationResponse>, AppError> {
    // 纬度/经度取 0 是合法坐标，只检查字段是否存在
    let (user_id, latitude, longitude) = match (req.user_id, req.latitude, req.longitude) {
        (Some(user_id), Some(latitude), Some(longitude)) => (user_id, latitude, longitude),
        _ => return Err(AppError::MissingFields("Missing user_id, latitude, or longitude")),
    };

    let timestamp = match req.timestamp {
        Some(millis) => timestamp_from_millis(millis)
            .ok_or_else(|| AppError::Internal(format!("Timestamp out of range: {}", millis)))?,
        None => Utc::now(),
    };

    match LocationPing::create(&state.pool, user_id, latitude, longitude, timestamp).await {
        Ok(()) => Ok(Json(UpdateLocationResponse {
            message: "Location updated successfully!".to_string(),
        })),
        Err(e) => {
            tracing::error!("Failed to store location for user {}: {}", user_id, e);
            Err(AppError::Internal(e.to_string()))
        }
    }
}

#[axum::debug_handler]
pub async fn my_location(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<LocationHistoryResponse>, AppError> {
    let user_id = query
        .user_id
        .ok_or(AppError::MissingFields("Missing user_id"))?;

    match LocationPing::recent_for_user(&state.pool, user_id, HISTORY_LIMIT).await {
        Ok(pings) => {
            let data = pings.into_iter().map(LocationPing::into_history_row).collect();
            Ok(Json(LocationHistoryResponse { data }))
        }
        Err(e) => {
            tracing::error!("Failed to load locations for user {}: {}", user_id, e);
            Err(AppError::Internal(e.to_string()))
        }
    }
}
