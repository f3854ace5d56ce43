use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::PantryEntry;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Vegetables,
    Proteins,
    Staples,
    Other,
}

const VEGETABLES: [&str; 6] = ["tomato", "cucumber", "onion", "carrot", "pepper", "lettuce"];
const PROTEINS: [&str; 6] = ["chicken", "beef", "fish", "cheese", "egg", "tofu"];

/// Guesses a category from keywords in the ingredient name.
///
/// Vegetables are checked before proteins, anything else is a staple.
pub fn categorize(ingredient: &str) -> IngredientCategory {
    let normalized = ingredient.trim().to_lowercase();

    if VEGETABLES.iter().any(|k| normalized.contains(k)) {
        return IngredientCategory::Vegetables;
    }

    if PROTEINS.iter().any(|k| normalized.contains(k)) {
        return IngredientCategory::Proteins;
    }

    IngredientCategory::Staples
}

pub fn group_by_category(
    entries: Vec<PantryEntry>,
) -> BTreeMap<IngredientCategory, Vec<PantryEntry>> {
    let mut groups = BTreeMap::<IngredientCategory, Vec<PantryEntry>>::new();
    for entry in entries {
        groups.entry(entry.category).or_default().push(entry);
    }

    groups
}
