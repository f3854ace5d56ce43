//! Recipe suggestions from a pantry and a preference profile.
//!
//! Three filters are applied conjunctively, each passing everything when its
//! input is empty:
//! - **Diet**: at least one requested restriction appears in the recipe tags
//!   (exact, case-sensitive). Any single tag qualifies.
//! - **Skill**: the recipe difficulty level is at or below the cook's level.
//! - **Ingredients**: at least half of the recipe ingredients, rounded up,
//!   match some pantry entry under [`ingredient_matches`].
//!
//! Results keep catalog order and are cut to [`MAX_SUGGESTIONS`] without any
//! further ranking.

use serde::Serialize;
use smartrecipe_shared::{CookingLevel, Recipe, ingredient_matches};

pub const MAX_SUGGESTIONS: usize = 6;

const MATCH_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct MatchCriteria {
    pub pantry: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub cooking_level: CookingLevel,
}

/// Number of matched ingredients a recipe needs to pass the ingredient filter.
pub fn required_matches(total_ingredients: usize) -> usize {
    (total_ingredients as f64 * MATCH_RATIO).ceil() as usize
}

/// Number of recipe ingredients owned by the pantry.
pub fn ingredient_match_count<S: AsRef<str>>(recipe: &Recipe, pantry: &[S]) -> usize {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| {
            pantry
                .iter()
                .any(|owned| ingredient_matches(ingredient, owned.as_ref()))
        })
        .count()
}

pub fn passes_diet<S: AsRef<str>>(recipe: &Recipe, restrictions: &[S]) -> bool {
    restrictions.is_empty()
        || restrictions
            .iter()
            .any(|restriction| recipe.has_tag(restriction.as_ref()))
}

pub fn passes_skill(recipe: &Recipe, cooking_level: CookingLevel) -> bool {
    recipe.difficulty.level() <= cooking_level.level()
}

pub fn passes_ingredients<S: AsRef<str>>(recipe: &Recipe, pantry: &[S]) -> bool {
    if pantry.is_empty() {
        return true;
    }

    ingredient_match_count(recipe, pantry) >= required_matches(recipe.ingredients.len())
}

/// How far a pantry is from cooking a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeReadiness {
    pub matched: usize,
    pub total: usize,
    pub missing: usize,
    pub can_make: bool,
}

pub fn readiness<S: AsRef<str>>(recipe: &Recipe, pantry: &[S]) -> RecipeReadiness {
    let total = recipe.ingredients.len();
    let matched = ingredient_match_count(recipe, pantry);

    RecipeReadiness {
        matched,
        total,
        missing: total - matched,
        can_make: matched >= required_matches(total),
    }
}

/// All recipes passing the three filters, in catalog order.
pub fn filter_recipes<'a>(catalog: &'a [Recipe], criteria: &MatchCriteria) -> Vec<&'a Recipe> {
    catalog
        .iter()
        .filter(|recipe| passes_diet(recipe, &criteria.dietary_restrictions))
        .filter(|recipe| passes_skill(recipe, criteria.cooking_level))
        .filter(|recipe| passes_ingredients(recipe, &criteria.pantry))
        .collect()
}

pub fn match_recipes(catalog: &[Recipe], criteria: &MatchCriteria) -> Vec<Recipe> {
    filter_recipes(catalog, criteria)
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Catalog listing narrowed by pantry overlap only.
pub fn filter_by_ingredients<S: AsRef<str>>(catalog: &[Recipe], pantry: &[S]) -> Vec<Recipe> {
    catalog
        .iter()
        .filter(|recipe| passes_ingredients(recipe, pantry))
        .cloned()
        .collect()
}

/// Catalog listing narrowed by diet tags only.
pub fn filter_by_dietary_restrictions<S: AsRef<str>>(
    catalog: &[Recipe],
    restrictions: &[S],
) -> Vec<Recipe> {
    catalog
        .iter()
        .filter(|recipe| passes_diet(recipe, restrictions))
        .cloned()
        .collect()
}
