use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use smartrecipe_pantry::{AddInput, group_by_category};
use smartrecipe_shared::not_found;

use crate::{
    error::{AppJson, AppResult},
    routes::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Group entries by category instead of a flat list.
    #[serde(default)]
    pub grouped: bool,
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let entries = state.pantry_command.list(&user_id).await?;

    if query.grouped {
        return Ok(Json(group_by_category(entries)).into_response());
    }

    Ok(Json(entries).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = %input.user_id))]
pub async fn add(
    State(state): State<AppState>,
    AppJson(input): AppJson<AddInput>,
) -> AppResult<Response> {
    match state.pantry_command.add(input).await? {
        Some(entry) => Ok((StatusCode::CREATED, Json(entry)).into_response()),
        None => Ok(Json(json!({"added": false})).into_response()),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, ingredient)): Path<(String, String)>,
) -> AppResult<Json<serde_json::Value>> {
    if !state.pantry_command.remove(&user_id, &ingredient).await? {
        return Err(not_found!("ingredient {ingredient}").into());
    }

    Ok(Json(json!({"success": true})))
}
