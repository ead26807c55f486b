pub mod plan;
pub mod recipe;
pub mod stats;

pub use plan::{
    DayType, GeneratedMeal, GeneratedMealPlan, MealMacros, MealPlanRecord, RotationType,
    ShoppingItem,
};
pub use recipe::{Ingredient, IngredientMacros, RecipeCatalogEntry, RecipeMacros, RecipeSource};
pub use stats::{Aggression, Goal, HeightUnit, MacroTargets, Sex, UserStats, WeightUnit};
