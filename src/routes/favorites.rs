use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::json;
use smartrecipe_recipe::FavoriteLink;
use smartrecipe_shared::{Recipe, not_found};

use crate::{
    error::{AppJson, AppResult},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteInput {
    pub user_id: String,
    pub recipe_id: i64,
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<FavoriteLink>>> {
    Ok(Json(state.favorite_command.list(&user_id).await?))
}

pub async fn recipes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Recipe>>> {
    Ok(Json(state.favorite_command.recipes(&user_id).await?))
}

pub async fn add(
    State(state): State<AppState>,
    AppJson(input): AppJson<FavoriteInput>,
) -> AppResult<Json<FavoriteLink>> {
    let link = state
        .favorite_command
        .add(&input.user_id, input.recipe_id)
        .await?;

    Ok(Json(link))
}

pub async fn toggle(
    State(state): State<AppState>,
    AppJson(input): AppJson<FavoriteInput>,
) -> AppResult<Json<serde_json::Value>> {
    let favorited = state
        .favorite_command
        .toggle(&input.user_id, input.recipe_id)
        .await?;

    Ok(Json(json!({"favorited": favorited})))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
) -> AppResult<Json<serde_json::Value>> {
    if !state.favorite_command.remove(&user_id, recipe_id).await? {
        return Err(not_found!("favorite {user_id}/{recipe_id}").into());
    }

    Ok(Json(json!({"success": true})))
}
