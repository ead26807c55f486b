use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Centimeters per inch.
const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound.
const KG_PER_LB: f64 = 0.453592;

/// Fallbacks applied when a profile is missing a body measurement.
pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// An age of 0 counts as missing.
pub fn age_or_default(age: u32) -> u32 {
    if age == 0 { DEFAULT_AGE } else { age }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    #[default]
    Maintain,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Aggression {
    #[default]
    Safe,
    Aggressive,
}

/// Body statistics and goal used to derive a daily macro budget.
///
/// Values are taken as-is; range checks belong to whoever builds the struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub lifting_days: u32,
    pub daily_steps: u32,
    pub goal: Goal,
    pub aggression: Aggression,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            sex: Sex::Unspecified,
            age: DEFAULT_AGE,
            height_cm: DEFAULT_HEIGHT_CM,
            weight_kg: DEFAULT_WEIGHT_KG,
            lifting_days: 4,
            daily_steps: 8000,
            goal: Goal::Maintain,
            aggression: Aggression::Safe,
        }
    }
}

/// Daily calorie and macro budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub fiber: i64,
    /// Liters, one decimal place.
    pub water: f64,
}

impl MacroTargets {
    /// Calories implied by the macro split (4/4/9 kcal per gram).
    pub fn macro_calories(&self) -> i64 {
        self.protein * 4 + self.carbs * 4 + self.fat * 9
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    In,
}

impl HeightUnit {
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::In => value * CM_PER_INCH,
        }
    }
}

/// Convert a feet + inches height to centimeters.
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    (feet * 12.0 + inches) * CM_PER_INCH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }
}
