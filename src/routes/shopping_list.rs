use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::{error::AppResult, routes::AppState};

/// GET /api/shopping-list/{user_id}/{week_start}
pub async fn find(
    State(state): State<AppState>,
    Path((user_id, week_start)): Path<(String, String)>,
) -> AppResult<Json<serde_json::Value>> {
    let ingredients = state
        .meal_plan_command
        .shopping_list(&user_id, &week_start)
        .await?;

    Ok(Json(json!({"ingredients": ingredients})))
}
