use axum::http::StatusCode;

// Liveness probe for container orchestrators.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
