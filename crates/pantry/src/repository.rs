use serde::{Deserialize, Serialize};
use smartrecipe_shared::Result;

use crate::IngredientCategory;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryEntry {
    pub id: i64,
    pub user_id: String,
    pub ingredient: String,
    pub category: IngredientCategory,
    pub added_at: i64,
}

#[async_trait::async_trait]
pub trait PantryRepository: Send + Sync {
    /// Entries of a user, oldest first.
    async fn list(&self, user_id: &str) -> Result<Vec<PantryEntry>>;
    async fn insert(
        &self,
        user_id: &str,
        ingredient: &str,
        category: IngredientCategory,
    ) -> Result<PantryEntry>;
    async fn delete(&self, id: i64) -> Result<bool>;
}
