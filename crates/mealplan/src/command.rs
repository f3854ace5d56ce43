use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Deserialize;
use smartrecipe_pantry::PantryRepository;
use smartrecipe_recipe::RecipeRepository;
use smartrecipe_shared::{Result, bail, not_found};
use smartrecipe_user::ProfileRepository;
use time::OffsetDateTime;

use crate::{
    MealPlan, MealPlanRepository, WeekMeals, current_week_start, derive_shopping_list,
    generate_meal_plan, personalize_catalog,
};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    pub user_id: String,
    /// Defaults to the Monday of the current week.
    pub week_start: Option<String>,
    /// Restricts the catalog to the diet and skill of the user profile.
    #[serde(default)]
    pub personalize: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveInput {
    pub user_id: String,
    /// Defaults to the Monday of the current week.
    pub week_start: Option<String>,
    pub meals: WeekMeals,
}

#[derive(Clone)]
pub struct Command {
    pub plans: Arc<dyn MealPlanRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub pantry: Arc<dyn PantryRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Command {
    pub async fn find(&self, user_id: &str, week_start: &str) -> Result<Option<MealPlan>> {
        self.plans.find(user_id, week_start).await
    }

    pub async fn generate(&self, input: GenerateInput) -> Result<MealPlan> {
        let mut rng = StdRng::from_os_rng();

        self.generate_with(input, &mut rng).await
    }

    #[tracing::instrument(skip_all, fields(user_id = %input.user_id))]
    pub async fn generate_with<R: Rng + Send + ?Sized>(
        &self,
        input: GenerateInput,
        rng: &mut R,
    ) -> Result<MealPlan> {
        if input.user_id.trim().is_empty() {
            bail!("User id is required");
        }

        let week_start = input
            .week_start
            .filter(|week_start| !week_start.trim().is_empty())
            .unwrap_or_else(current_week_start);

        let mut catalog = self.recipes.list().await?;
        if input.personalize
            && let Some(profile) = self.profiles.find(&input.user_id).await?
        {
            catalog = personalize_catalog(
                catalog,
                &profile.dietary_restrictions,
                profile.cooking_level,
            );
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let plan = generate_meal_plan(input.user_id, week_start, &catalog, rng, now);
        self.plans.upsert(&plan).await?;

        tracing::info!(
            week_start = %plan.week_start,
            catalog = catalog.len(),
            "Meal plan generated"
        );

        Ok(plan)
    }

    /// Stores a plan built by the caller, keeping the creation time of a
    /// plan already saved for the same week.
    #[tracing::instrument(skip_all, fields(user_id = %input.user_id))]
    pub async fn save(&self, input: SaveInput) -> Result<MealPlan> {
        if input.user_id.trim().is_empty() {
            bail!("User id is required");
        }

        let week_start = input
            .week_start
            .filter(|week_start| !week_start.trim().is_empty())
            .unwrap_or_else(current_week_start);

        let created_at = match self.plans.find(&input.user_id, &week_start).await? {
            Some(existing) => existing.created_at,
            None => OffsetDateTime::now_utc().unix_timestamp(),
        };

        let plan = MealPlan {
            user_id: input.user_id,
            week_start,
            meals: input.meals,
            created_at,
        };
        self.plans.upsert(&plan).await?;

        tracing::info!(week_start = %plan.week_start, days = plan.meals.len(), "Meal plan saved");

        Ok(plan)
    }

    /// Replaces the meals of an existing plan.
    pub async fn update_meals(
        &self,
        user_id: &str,
        week_start: &str,
        meals: WeekMeals,
    ) -> Result<MealPlan> {
        let mut plan = self
            .plans
            .find(user_id, week_start)
            .await?
            .ok_or_else(|| not_found!("meal plan {user_id}/{week_start}"))?;

        plan.meals = meals;
        self.plans.upsert(&plan).await?;

        Ok(plan)
    }

    /// Plan ingredients missing from the user's pantry.
    pub async fn shopping_list(&self, user_id: &str, week_start: &str) -> Result<Vec<String>> {
        let plan = self
            .plans
            .find(user_id, week_start)
            .await?
            .ok_or_else(|| not_found!("meal plan {user_id}/{week_start}"))?;

        let pantry = self
            .pantry
            .list(user_id)
            .await?
            .into_iter()
            .map(|entry| entry.ingredient)
            .collect::<Vec<_>>();

        Ok(derive_shopping_list(&plan.meals, &pantry))
    }
}
