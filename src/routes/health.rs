use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Answers 503 while the recipe database cannot serve a query.
pub async fn ready(State(pool): State<SqlitePool>) -> (StatusCode, Json<Value>) {
    if let Err(err) = sqlx::query("SELECT 1").fetch_one(&pool).await {
        tracing::warn!(error = %err, "Recipe database unreachable");

        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "unavailable", "database": "down"})),
        );
    }

    (StatusCode::OK, Json(json!({"status": "ready", "database": "up"})))
}
