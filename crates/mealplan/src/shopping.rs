use std::collections::HashSet;

use smartrecipe_shared::is_owned;

use crate::WeekMeals;

/// Ingredients of every lunch and dinner that the pantry does not cover.
///
/// Each ingredient text appears once, in the order it is first met walking the
/// week from Monday. Ownership uses the same bidirectional substring rule as
/// recipe matching.
pub fn derive_shopping_list<S: AsRef<str>>(meals: &WeekMeals, pantry: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut missing = vec![];

    for day in meals.values() {
        for recipe in day.recipes() {
            for ingredient in recipe.ingredients.iter() {
                if !seen.insert(ingredient.as_str()) {
                    continue;
                }

                if !is_owned(ingredient, pantry) {
                    missing.push(ingredient.to_owned());
                }
            }
        }
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DayMeals, Weekday};
    use smartrecipe_shared::{Difficulty, Nutrition, Recipe, ingredient_matches};

    fn create_test_recipe(id: i64, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {id}"),
            cuisine: "Test".to_owned(),
            time: 20,
            difficulty: Difficulty::Easy,
            servings: 2,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec![],
            nutrition: Nutrition::default(),
            rating: 40,
            tags: vec![],
            tips: vec![],
            image_url: None,
        }
    }

    fn week(days: Vec<(Weekday, Option<Recipe>, Option<Recipe>)>) -> WeekMeals {
        days.into_iter()
            .map(|(day, lunch, dinner)| {
                (
                    day,
                    DayMeals {
                        lunch,
                        dinner,
                        ..Default::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_missing_ingredients() {
        let meals = week(vec![(
            Weekday::Monday,
            Some(create_test_recipe(1, &["egg", "milk"])),
            Some(create_test_recipe(2, &["egg", "rice"])),
        )]);

        let mut list = derive_shopping_list(&meals, &["egg"]);
        list.sort();

        assert_eq!(list, vec!["milk", "rice"]);
    }

    #[test]
    fn test_nothing_owned_is_listed() {
        let meals = week(vec![
            (
                Weekday::Monday,
                Some(create_test_recipe(1, &["2 chicken breasts", "Basmati Rice"])),
                Some(create_test_recipe(2, &["olive oil", "garlic", "lemon"])),
            ),
            (
                Weekday::Thursday,
                Some(create_test_recipe(3, &["chicken", "lemon juice", "oregano"])),
                None,
            ),
        ]);
        let pantry = ["Chicken", "rice", "lemon"];

        let list = derive_shopping_list(&meals, &pantry);

        assert_eq!(list, vec!["olive oil", "garlic", "oregano"]);
        for item in list.iter() {
            assert!(!pantry.iter().any(|owned| ingredient_matches(item, owned)));
        }
    }

    #[test]
    fn test_empty_plan_or_full_pantry() {
        let meals = week(vec![(Weekday::Monday, None, None)]);
        assert!(derive_shopping_list(&meals, &["egg"]).is_empty());

        let meals = week(vec![(
            Weekday::Sunday,
            Some(create_test_recipe(1, &["egg"])),
            None,
        )]);
        assert!(derive_shopping_list(&meals, &["eggs"]).is_empty());
        assert_eq!(
            derive_shopping_list(&meals, &Vec::<String>::new()),
            vec!["egg"]
        );
    }
}
