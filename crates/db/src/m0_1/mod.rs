mod cooking_session;
mod meal_plan;
mod pantry_ingredient;
mod recipe;
mod user_favorite;
mod user_profile;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "smartrecipe",
    "m0_1",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        pantry_ingredient::CreateTable,
        pantry_ingredient::CreateIdx1,
        user_profile::CreateTable,
        user_favorite::CreateTable,
        user_favorite::CreateUk1,
        meal_plan::CreateTable,
        cooking_session::CreateTable,
        cooking_session::CreateIdx1
    ]
);
