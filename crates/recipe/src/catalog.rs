use serde::{Deserialize, Serialize};
use smartrecipe_shared::{Difficulty, Nutrition};
use validator::Validate;

static BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub cuisine: String,
    #[validate(range(min = 1, max = 1440))]
    pub time: u32,
    pub difficulty: Difficulty,
    #[validate(range(min = 1, max = 100))]
    pub servings: u32,
    #[validate(length(min = 1))]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    #[validate(range(max = 50))]
    pub rating: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[validate(url)]
    pub image_url: Option<String>,
}

/// Recipes shipped with the binary and inserted into an empty catalog.
pub fn bundled_catalog() -> smartrecipe_shared::Result<Vec<CreateInput>> {
    Ok(serde_json::from_str(BUNDLED_CATALOG)?)
}
