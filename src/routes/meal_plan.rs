use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use smartrecipe_mealplan::{GenerateInput, MealPlan, SaveInput, WeekMeals};
use smartrecipe_shared::not_found;

use crate::{
    error::{AppJson, AppResult},
    routes::AppState,
};

pub async fn find(
    State(state): State<AppState>,
    Path((user_id, week_start)): Path<(String, String)>,
) -> AppResult<Json<MealPlan>> {
    let plan = state
        .meal_plan_command
        .find(&user_id, &week_start)
        .await?
        .ok_or_else(|| not_found!("meal plan {user_id}/{week_start}"))?;

    Ok(Json(plan))
}

pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateInput>,
) -> AppResult<Json<MealPlan>> {
    Ok(Json(state.meal_plan_command.generate(input).await?))
}

pub async fn save(
    State(state): State<AppState>,
    AppJson(input): AppJson<SaveInput>,
) -> AppResult<(StatusCode, Json<MealPlan>)> {
    let plan = state.meal_plan_command.save(input).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateInput {
    pub meals: WeekMeals,
}

pub async fn update(
    State(state): State<AppState>,
    Path((user_id, week_start)): Path<(String, String)>,
    AppJson(input): AppJson<UpdateInput>,
) -> AppResult<Json<MealPlan>> {
    let plan = state
        .meal_plan_command
        .update_meals(&user_id, &week_start, input.meals)
        .await?;

    Ok(Json(plan))
}
