use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smartrecipe_shared::Recipe;

use crate::Weekday;

pub const BREAKFAST_NAME: &str = "Healthy Smoothie Bowl";
pub const BREAKFAST_TIME: u32 = 10;
pub const BREAKFAST_CALORIES: u32 = 280;

/// Fixed breakfast entry, never drawn from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakfast {
    pub name: String,
    pub time: u32,
    pub calories: u32,
}

impl Default for Breakfast {
    fn default() -> Self {
        Self {
            name: BREAKFAST_NAME.to_owned(),
            time: BREAKFAST_TIME,
            calories: BREAKFAST_CALORIES,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    #[serde(default)]
    pub breakfast: Breakfast,
    pub lunch: Option<Recipe>,
    pub dinner: Option<Recipe>,
}

impl DayMeals {
    /// Lunch then dinner, skipping empty slots.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.lunch.iter().chain(self.dinner.iter())
    }
}

pub type WeekMeals = BTreeMap<Weekday, DayMeals>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub user_id: String,
    pub week_start: String,
    pub meals: WeekMeals,
    pub created_at: i64,
}
