use std::sync::Arc;

use serde::Deserialize;
use smartrecipe_shared::Result;
use validator::Validate;

use crate::{IngredientCategory, PantryEntry, PantryRepository, categorize};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddInput {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[validate(length(min = 1, max = 100))]
    pub ingredient: String,
    pub category: Option<IngredientCategory>,
}

#[derive(Clone)]
pub struct Command(pub Arc<dyn PantryRepository>);

impl Command {
    pub async fn list(&self, user_id: &str) -> Result<Vec<PantryEntry>> {
        self.0.list(user_id).await
    }

    /// Ingredient names owned by the user.
    pub async fn names(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self
            .0
            .list(user_id)
            .await?
            .into_iter()
            .map(|entry| entry.ingredient)
            .collect())
    }

    /// Stores a trimmed ingredient, or returns `None` when the user already
    /// owns one with the same name ignoring case.
    #[tracing::instrument(skip_all, fields(user_id = %input.user_id))]
    pub async fn add(&self, mut input: AddInput) -> Result<Option<PantryEntry>> {
        input.ingredient = input.ingredient.trim().to_owned();
        input.validate()?;

        let needle = input.ingredient.to_lowercase();
        let owned = self.0.list(&input.user_id).await?;
        if owned
            .iter()
            .any(|entry| entry.ingredient.to_lowercase() == needle)
        {
            tracing::debug!(ingredient = %input.ingredient, "Ingredient already in pantry");

            return Ok(None);
        }

        let category = input
            .category
            .unwrap_or_else(|| categorize(&input.ingredient));
        let entry = self
            .0
            .insert(&input.user_id, &input.ingredient, category)
            .await?;

        tracing::info!(ingredient = %entry.ingredient, category = %entry.category, "Ingredient added");

        Ok(Some(entry))
    }

    /// Removes the entry whose name equals `ingredient` ignoring case.
    pub async fn remove(&self, user_id: &str, ingredient: &str) -> Result<bool> {
        let needle = ingredient.to_lowercase();
        let owned = self.0.list(user_id).await?;
        let Some(entry) = owned
            .into_iter()
            .find(|entry| entry.ingredient.to_lowercase() == needle)
        else {
            return Ok(false);
        };

        let removed = self.0.delete(entry.id).await?;
        if removed {
            tracing::info!(user_id, ingredient = %entry.ingredient, "Ingredient removed");
        }

        Ok(removed)
    }
}
