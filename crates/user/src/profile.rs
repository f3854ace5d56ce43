use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smartrecipe_shared::CookingLevel;
use validator::Validate;

pub const DEFAULT_FAMILY_SIZE: u32 = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub name: Option<String>,
    pub dietary_restrictions: Vec<String>,
    pub cooking_level: CookingLevel,
    pub family_size: u32,
    pub preferences: Map<String, Value>,
    pub allergies: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_family_size() -> u32 {
    DEFAULT_FAMILY_SIZE
}

/// Full profile as submitted on save.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub cooking_level: CookingLevel,
    #[serde(default = "default_family_size")]
    #[validate(range(min = 1, max = 50))]
    pub family_size: u32,
    #[serde(default)]
    pub preferences: Map<String, Value>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl ProfileInput {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            dietary_restrictions: vec![],
            cooking_level: CookingLevel::default(),
            family_size: DEFAULT_FAMILY_SIZE,
            preferences: Map::new(),
            allergies: vec![],
        }
    }
}

/// Partial update, absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub cooking_level: Option<CookingLevel>,
    #[validate(range(min = 1, max = 50))]
    pub family_size: Option<u32>,
    pub preferences: Option<Map<String, Value>>,
    pub allergies: Option<Vec<String>>,
}

impl ProfilePatch {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = Some(name);
        }
        if let Some(dietary_restrictions) = self.dietary_restrictions {
            profile.dietary_restrictions = dietary_restrictions;
        }
        if let Some(cooking_level) = self.cooking_level {
            profile.cooking_level = cooking_level;
        }
        if let Some(family_size) = self.family_size {
            profile.family_size = family_size;
        }
        if let Some(preferences) = self.preferences {
            profile.preferences.extend(preferences);
        }
        if let Some(allergies) = self.allergies {
            profile.allergies = allergies;
        }
    }
}
