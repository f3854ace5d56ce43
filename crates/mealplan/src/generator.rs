use rand::{Rng, seq::SliceRandom};
use smartrecipe_recipe::matching::{passes_diet, passes_skill};
use smartrecipe_shared::{CookingLevel, Recipe};
use strum::VariantArray;

use crate::{Breakfast, DayMeals, MealPlan, WeekMeals, Weekday};

/// Draws lunch and dinner for every weekday.
///
/// Each day independently samples two distinct recipes uniformly from the
/// whole catalog, so a recipe may appear on several days. With fewer than two
/// recipes the missing slots stay empty.
pub fn generate_week<R: Rng + ?Sized>(catalog: &[Recipe], rng: &mut R) -> WeekMeals {
    let mut indices = (0..catalog.len()).collect::<Vec<_>>();

    Weekday::VARIANTS
        .iter()
        .map(|day| {
            let (picked, _) = indices.partial_shuffle(rng, 2);
            let lunch = picked.first().map(|&i| catalog[i].clone());
            let dinner = picked.get(1).map(|&i| catalog[i].clone());

            (
                *day,
                DayMeals {
                    breakfast: Breakfast::default(),
                    lunch,
                    dinner,
                },
            )
        })
        .collect()
}

pub fn generate_meal_plan<R: Rng + ?Sized>(
    user_id: impl Into<String>,
    week_start: impl Into<String>,
    catalog: &[Recipe],
    rng: &mut R,
    created_at: i64,
) -> MealPlan {
    MealPlan {
        user_id: user_id.into(),
        week_start: week_start.into(),
        meals: generate_week(catalog, rng),
        created_at,
    }
}

/// Narrows the catalog to recipes fitting the diet and skill of a profile.
pub fn personalize_catalog(
    catalog: Vec<Recipe>,
    dietary_restrictions: &[String],
    cooking_level: CookingLevel,
) -> Vec<Recipe> {
    catalog
        .into_iter()
        .filter(|recipe| {
            passes_diet(recipe, dietary_restrictions) && passes_skill(recipe, cooking_level)
        })
        .collect()
}
