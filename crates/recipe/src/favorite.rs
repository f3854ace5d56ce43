use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smartrecipe_shared::{Recipe, Result, not_found};

use crate::{FavoriteRepository, RecipeRepository};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteLink {
    pub id: i64,
    pub user_id: String,
    pub recipe_id: i64,
    pub created_at: i64,
}

#[derive(Clone)]
pub struct FavoriteCommand {
    pub favorites: Arc<dyn FavoriteRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
}

impl FavoriteCommand {
    pub async fn list(&self, user_id: &str) -> Result<Vec<FavoriteLink>> {
        self.favorites.list(user_id).await
    }

    /// Favorite recipes in the order they were added.
    pub async fn recipes(&self, user_id: &str) -> Result<Vec<Recipe>> {
        let mut recipes = vec![];
        for link in self.favorites.list(user_id).await? {
            if let Some(recipe) = self.recipes.find(link.recipe_id).await? {
                recipes.push(recipe);
            }
        }

        Ok(recipes)
    }

    pub async fn add(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteLink> {
        if self.recipes.find(recipe_id).await?.is_none() {
            return Err(not_found!("recipe {recipe_id}"));
        }

        if let Some(link) = self.favorites.find(user_id, recipe_id).await? {
            return Ok(link);
        }

        let link = self.favorites.insert(user_id, recipe_id).await?;
        tracing::info!(user_id, recipe_id, "Recipe favorited");

        Ok(link)
    }

    /// Returns false when the recipe was not a favorite.
    pub async fn remove(&self, user_id: &str, recipe_id: i64) -> Result<bool> {
        let removed = self.favorites.delete(user_id, recipe_id).await?;
        if removed {
            tracing::info!(user_id, recipe_id, "Recipe unfavorited");
        }

        Ok(removed)
    }

    /// Flips membership and returns whether the recipe is now a favorite.
    pub async fn toggle(&self, user_id: &str, recipe_id: i64) -> Result<bool> {
        if self.remove(user_id, recipe_id).await? {
            return Ok(false);
        }

        self.add(user_id, recipe_id).await?;

        Ok(true)
    }
}
