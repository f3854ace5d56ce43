use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use smartrecipe_recipe::{CreateInput, MatchCriteria, RecipeReadiness, readiness};
use smartrecipe_shared::{CookingLevel, Recipe, not_found};

use crate::{
    error::{AppError, AppJson, AppResult},
    routes::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Comma separated ingredient names.
    pub ingredients: Option<String>,
    /// Comma separated diet tags.
    pub dietary_restrictions: Option<String>,
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Recipe>>> {
    let ingredients = split_list(query.ingredients.as_deref());
    let dietary_restrictions = split_list(query.dietary_restrictions.as_deref());

    let recipes = state
        .recipe_command
        .search(&ingredients, &dietary_restrictions)
        .await?;

    Ok(Json(recipes))
}

pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Recipe>> {
    let recipe = state
        .recipe_command
        .find(id)
        .await?
        .ok_or_else(|| not_found!("recipe {id}"))?;

    Ok(Json(recipe))
}

/// Matched and missing ingredient counts against the user's stored pantry.
pub async fn readiness_for(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i64, String)>,
) -> AppResult<Json<RecipeReadiness>> {
    let recipe = state
        .recipe_command
        .find(id)
        .await?
        .ok_or_else(|| not_found!("recipe {id}"))?;
    let pantry = state.pantry_command.names(&user_id).await?;

    Ok(Json(readiness(&recipe, &pantry)))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInput>,
) -> AppResult<(StatusCode, Json<Recipe>)> {
    let recipe = state.recipe_command.create(input).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    pub user_id: String,
    pub ingredients: Option<Vec<String>>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub cooking_level: Option<String>,
}

/// Suggestions for a user. Omitted inputs come from the stored pantry and
/// profile.
#[tracing::instrument(skip_all, fields(user_id = %input.user_id))]
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateInput>,
) -> AppResult<Json<Vec<Recipe>>> {
    if input.user_id.trim().is_empty() {
        return Err(AppError::BadRequest("User id is required".to_owned()));
    }

    let pantry = match input.ingredients {
        Some(ingredients) => ingredients,
        None => state.pantry_command.names(&input.user_id).await?,
    };

    let profile = match (&input.dietary_restrictions, &input.cooking_level) {
        (Some(_), Some(_)) => None,
        _ => state.profile_command.find(&input.user_id).await?,
    };

    let dietary_restrictions = input
        .dietary_restrictions
        .or_else(|| profile.as_ref().map(|p| p.dietary_restrictions.to_vec()))
        .unwrap_or_default();

    let cooking_level = match input.cooking_level {
        Some(label) => CookingLevel::from_label(&label),
        None => profile.map(|p| p.cooking_level).unwrap_or_default(),
    };

    let criteria = MatchCriteria {
        pantry,
        dietary_restrictions,
        cooking_level,
    };

    Ok(Json(state.recipe_command.suggest(&criteria).await?))
}
