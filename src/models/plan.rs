use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::recipe::{Ingredient, RecipeCatalogEntry};
use crate::models::stats::MacroTargets;

/// Which of the two rotating daily menus a day uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum DayType {
    A,
    B,
}

impl DayType {
    pub fn label(self) -> char {
        match self {
            DayType::A => 'A',
            DayType::B => 'B',
        }
    }
}

/// How the day types are laid out over a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RotationType {
    /// Day A every day.
    #[default]
    SameDaily,
    /// Day A on Sunday, Tuesday, Thursday and Saturday; day B on the rest.
    #[value(name = "ab")]
    AbRotation,
}

/// Calories and protein carried on a generated meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealMacros {
    pub calories: f64,
    pub protein: f64,
}

/// One meal slot in a generated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMeal {
    /// "Meal 1", "Meal 2", ...
    pub slot: String,

    pub recipe_id: u32,

    /// Recipe name.
    pub recipe: String,

    pub macros: MealMacros,

    pub ingredients: Vec<Ingredient>,

    pub instructions: String,

    /// Servings of the recipe eaten in this slot.
    #[serde(default = "default_portion")]
    pub portion: f64,
}

fn default_portion() -> f64 {
    1.0
}

impl GeneratedMeal {
    /// Build the meal for zero-based `slot_index` from a catalog entry.
    pub fn from_entry(slot_index: usize, entry: &RecipeCatalogEntry) -> Self {
        Self {
            slot: slot_label(slot_index),
            recipe_id: entry.id,
            recipe: entry.name.clone(),
            macros: MealMacros {
                calories: entry.macros.calories,
                protein: entry.macros.protein,
            },
            ingredients: entry.ingredients.clone(),
            instructions: entry.resolved_instructions(),
            portion: default_portion(),
        }
    }

    pub fn scaled_calories(&self) -> f64 {
        self.macros.calories * self.portion
    }

    pub fn scaled_protein(&self) -> f64 {
        self.macros.protein * self.portion
    }
}

/// Slot label for a zero-based slot index.
pub fn slot_label(slot_index: usize) -> String {
    format!("Meal {}", slot_index + 1)
}

/// The two generated day menus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMealPlan {
    pub day_a: Vec<GeneratedMeal>,
    pub day_b: Vec<GeneratedMeal>,
}

impl GeneratedMealPlan {
    pub fn day(&self, day: DayType) -> &[GeneratedMeal] {
        match day {
            DayType::A => &self.day_a,
            DayType::B => &self.day_b,
        }
    }

    pub fn day_mut(&mut self, day: DayType) -> &mut Vec<GeneratedMeal> {
        match day {
            DayType::A => &mut self.day_a,
            DayType::B => &mut self.day_b,
        }
    }

    /// True when either day has fewer than `meals_per_day` meals.
    pub fn is_incomplete(&self, meals_per_day: usize) -> bool {
        self.day_a.len() < meals_per_day || self.day_b.len() < meals_per_day
    }
}

/// A generated plan together with the metadata it is stored with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanRecord {
    pub name: String,
    pub rotation: RotationType,
    pub targets: MacroTargets,
    #[serde(flatten)]
    pub plan: GeneratedMealPlan,
}

/// Aggregated ingredient line for a week of meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    /// Amount as written on the first recipe that used the ingredient.
    pub amount: String,
    /// Number of scheduled meals using the ingredient.
    pub count: u32,
}
