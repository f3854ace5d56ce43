use smartrecipe_shared::{Recipe, Result};

use crate::{CreateInput, FavoriteLink};

#[async_trait::async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Every recipe in insertion order.
    async fn list(&self) -> Result<Vec<Recipe>>;
    async fn find(&self, id: i64) -> Result<Option<Recipe>>;
    async fn insert(&self, input: CreateInput) -> Result<Recipe>;
    async fn count(&self) -> Result<i64>;
}

#[async_trait::async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<FavoriteLink>>;
    async fn find(&self, user_id: &str, recipe_id: i64) -> Result<Option<FavoriteLink>>;
    /// Inserts the link unless it already exists, returning the stored one.
    async fn insert(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteLink>;
    async fn delete(&self, user_id: &str, recipe_id: i64) -> Result<bool>;
}
