use smartrecipe_shared::Result;

use crate::{CookingSession, MealPlan};

#[async_trait::async_trait]
pub trait MealPlanRepository: Send + Sync {
    async fn find(&self, user_id: &str, week_start: &str) -> Result<Option<MealPlan>>;
    /// Stores the plan, replacing any plan of the same user and week.
    async fn upsert(&self, plan: &MealPlan) -> Result<()>;
}

#[async_trait::async_trait]
pub trait CookingSessionRepository: Send + Sync {
    async fn find(&self, id: i64) -> Result<Option<CookingSession>>;
    /// Sessions of a user, most recent first.
    async fn list(&self, user_id: &str) -> Result<Vec<CookingSession>>;
    async fn insert(&self, user_id: &str, recipe_id: i64, started_at: i64)
    -> Result<CookingSession>;
    async fn update(&self, session: &CookingSession) -> Result<()>;
}
