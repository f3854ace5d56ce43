use axum::{
    Json,
    extract::{Path, State},
};
use smartrecipe_shared::not_found;
use smartrecipe_user::{Profile, ProfileInput, ProfilePatch};

use crate::{
    error::{AppJson, AppResult},
    routes::AppState,
};

pub async fn find(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Profile>> {
    let profile = state
        .profile_command
        .find(&user_id)
        .await?
        .ok_or_else(|| not_found!("profile {user_id}"))?;

    Ok(Json(profile))
}

pub async fn save(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProfileInput>,
) -> AppResult<Json<Profile>> {
    Ok(Json(state.profile_command.save(input).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(patch): AppJson<ProfilePatch>,
) -> AppResult<Json<Profile>> {
    Ok(Json(state.profile_command.update(&user_id, patch).await?))
}
