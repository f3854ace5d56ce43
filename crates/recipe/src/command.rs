use std::sync::Arc;

use smartrecipe_shared::{Recipe, Result};
use validator::Validate;

use crate::{
    CreateInput, MatchCriteria, RecipeRepository, bundled_catalog,
    matching::{self, match_recipes},
};

#[derive(Clone)]
pub struct Command(pub Arc<dyn RecipeRepository>);

impl Command {
    #[tracing::instrument(skip_all, fields(name = %input.name))]
    pub async fn create(&self, input: CreateInput) -> Result<Recipe> {
        input.validate()?;

        let recipe = self.0.insert(input).await?;
        tracing::info!(recipe_id = recipe.id, "Recipe created");

        Ok(recipe)
    }

    /// Inserts the bundled catalog when no recipe exists yet.
    pub async fn seed_catalog(&self) -> Result<usize> {
        if self.0.count().await? > 0 {
            return Ok(0);
        }

        let catalog = bundled_catalog()?;
        let total = catalog.len();
        for input in catalog {
            input.validate()?;
            self.0.insert(input).await?;
        }

        tracing::info!(total, "Recipe catalog seeded");

        Ok(total)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Recipe>> {
        self.0.find(id).await
    }

    pub async fn list(&self) -> Result<Vec<Recipe>> {
        self.0.list().await
    }

    /// At most six recipes matching the pantry, diet and skill level.
    #[tracing::instrument(skip_all, fields(pantry = criteria.pantry.len()))]
    pub async fn suggest(&self, criteria: &MatchCriteria) -> Result<Vec<Recipe>> {
        let catalog = self.0.list().await?;
        let recipes = match_recipes(&catalog, criteria);
        tracing::debug!(catalog = catalog.len(), matched = recipes.len(), "Recipes suggested");

        Ok(recipes)
    }

    /// Catalog listing narrowed by ingredients when given, otherwise by diet tags.
    pub async fn search(
        &self,
        ingredients: &[String],
        dietary_restrictions: &[String],
    ) -> Result<Vec<Recipe>> {
        let catalog = self.0.list().await?;

        if !ingredients.is_empty() {
            return Ok(matching::filter_by_ingredients(&catalog, ingredients));
        }

        Ok(matching::filter_by_dietary_restrictions(
            &catalog,
            dietary_restrictions,
        ))
    }
}
