use serde::{Deserialize, Serialize};

/// Where a recipe came from. Only homemade recipes are eligible for
/// automatic plan generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Homemade,
    External,
}

/// Per-serving macros of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeMacros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientMacros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<IngredientMacros>,
}

/// A recipe in the read-only catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCatalogEntry {
    pub id: u32,
    pub name: String,
    pub macros: RecipeMacros,
    pub source: RecipeSource,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl RecipeCatalogEntry {
    #[inline]
    pub fn is_homemade(&self) -> bool {
        self.source == RecipeSource::Homemade
    }

    /// Instruction steps joined into one line, or the description when the
    /// joined steps are empty.
    pub fn resolved_instructions(&self) -> String {
        let joined = self.instructions.join(" ");
        if joined.is_empty() {
            self.description.clone()
        } else {
            joined
        }
    }

    /// Non-negative macros and a non-blank name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.macros.calories >= 0.0
            && self.macros.protein >= 0.0
            && self.macros.carbs >= 0.0
            && self.macros.fat >= 0.0
    }
}
