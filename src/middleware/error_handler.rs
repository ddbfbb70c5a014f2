use axum::{
    body::{Body, to_bytes},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

// 5xx 响应体都很小，超过这个长度的只记录状态
const MAX_LOGGED_BODY: usize = 1024;

pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => {
            error!(
                "{} {} failed - Status: {}, Body: {}",
                method,
                path,
                parts.status,
                String::from_utf8_lossy(&bytes)
            );

            // body 已被消费，重建响应
            parts.headers.remove(axum::http::header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            error!(
                "{} {} failed - Status: {}, body unreadable: {}",
                method, path, parts.status, e
            );
            Response::from_parts(parts, Body::empty())
        }
    }
}
