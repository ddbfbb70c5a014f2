use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, middleware::log_errors, routes};

// 用户相关的路由
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(routes::user::register))
        .route("/login", post(routes::user::login))
}

// 位置相关的路由
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/update-location", post(routes::location::update_location))
        .route("/my-location", get(routes::location::my_location))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .merge(location_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
