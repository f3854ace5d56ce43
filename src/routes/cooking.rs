use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use smartrecipe_mealplan::{CookingSession, SessionAction};

use crate::{
    error::{AppJson, AppResult},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInput {
    pub user_id: String,
    pub recipe_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ActionInput {
    pub action: SessionAction,
}

pub async fn start(
    State(state): State<AppState>,
    AppJson(input): AppJson<StartInput>,
) -> AppResult<(StatusCode, Json<CookingSession>)> {
    let session = state
        .cooking_command
        .start(&input.user_id, input.recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn apply(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(input): AppJson<ActionInput>,
) -> AppResult<Json<CookingSession>> {
    Ok(Json(state.cooking_command.apply(id, input.action).await?))
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<CookingSession>>> {
    Ok(Json(state.cooking_command.list(&user_id).await?))
}
