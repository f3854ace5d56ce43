use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use smartrecipe_mealplan::{
    CookingCommand, SqliteCookingSessionRepository, SqliteMealPlanRepository,
};
use smartrecipe_pantry::SqlitePantryRepository;
use smartrecipe_recipe::{FavoriteCommand, SqliteFavoriteRepository, SqliteRecipeRepository};
use smartrecipe_user::SqliteProfileRepository;
use sqlx::SqlitePool;

mod cooking;
mod favorites;
mod health;
mod ingredients;
mod meal_plan;
mod profile;
mod recipes;
mod shopping_list;

#[derive(Clone)]
pub struct AppState {
    pub recipe_command: smartrecipe_recipe::Command,
    pub favorite_command: FavoriteCommand,
    pub pantry_command: smartrecipe_pantry::Command,
    pub profile_command: smartrecipe_user::Command,
    pub meal_plan_command: smartrecipe_mealplan::Command,
    pub cooking_command: CookingCommand,
    pub pool: SqlitePool,
}

impl AppState {
    /// Wires every command to its SQLite repository on a shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        let recipes = Arc::new(SqliteRecipeRepository(pool.clone()));
        let pantry = Arc::new(SqlitePantryRepository(pool.clone()));
        let profiles = Arc::new(SqliteProfileRepository(pool.clone()));

        Self {
            recipe_command: smartrecipe_recipe::Command(recipes.clone()),
            favorite_command: FavoriteCommand {
                favorites: Arc::new(SqliteFavoriteRepository(pool.clone())),
                recipes: recipes.clone(),
            },
            pantry_command: smartrecipe_pantry::Command(pantry.clone()),
            profile_command: smartrecipe_user::Command(profiles.clone()),
            meal_plan_command: smartrecipe_mealplan::Command {
                plans: Arc::new(SqliteMealPlanRepository(pool.clone())),
                recipes: recipes.clone(),
                pantry,
                profiles,
            },
            cooking_command: CookingCommand {
                sessions: Arc::new(SqliteCookingSessionRepository(pool.clone())),
                recipes,
            },
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/profile", post(profile::save))
        .route(
            "/api/profile/{user_id}",
            get(profile::find).put(profile::update),
        )
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route("/api/recipes/generate", post(recipes::generate))
        .route("/api/recipes/{id}", get(recipes::find))
        .route(
            "/api/recipes/{id}/readiness/{user_id}",
            get(recipes::readiness_for),
        )
        .route("/api/ingredients", post(ingredients::add))
        .route("/api/ingredients/{user_id}", get(ingredients::list))
        .route(
            "/api/ingredients/{user_id}/{ingredient}",
            delete(ingredients::remove),
        )
        .route("/api/favorites", post(favorites::add))
        .route("/api/favorites/toggle", post(favorites::toggle))
        .route("/api/favorites/{user_id}", get(favorites::list))
        .route("/api/favorites/{user_id}/recipes", get(favorites::recipes))
        .route(
            "/api/favorites/{user_id}/{recipe_id}",
            delete(favorites::remove),
        )
        .route("/api/meal-plan", post(meal_plan::save))
        .route("/api/meal-plan/generate", post(meal_plan::generate))
        .route(
            "/api/meal-plan/{user_id}/{week_start}",
            get(meal_plan::find).put(meal_plan::update),
        )
        .route(
            "/api/shopping-list/{user_id}/{week_start}",
            get(shopping_list::find),
        )
        .route("/api/cooking-session", post(cooking::start))
        .route("/api/cooking-session/{id}", put(cooking::apply))
        .route("/api/cooking-sessions/{user_id}", get(cooking::list))
        .with_state(app_state)
}
