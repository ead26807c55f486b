use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};

use crate::models::stats::age_or_default;
use crate::models::{
    Aggression, DayType, Goal, HeightUnit, RotationType, Sex, UserStats, WeightUnit,
};
use crate::planner::constants::{DEFAULT_MEALS_PER_DAY, MAX_MEALS_PER_DAY};

/// Meal Planner: macro targets and A/B rotation meal plans from your body stats.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, global = true, env = "MEAL_PLANNER_CATALOG", default_value = "recipes.json")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print daily macro targets for the given stats.
    Macros {
        #[command(flatten)]
        stats: StatsArgs,
    },

    /// Answer a few questions and print daily macro targets.
    Onboard,

    /// Generate a day A / day B meal plan.
    Plan {
        #[command(flatten)]
        stats: StatsArgs,

        /// Meals per day.
        #[arg(long, default_value_t = DEFAULT_MEALS_PER_DAY,
              value_parser = clap::value_parser!(u16).range(1..=MAX_MEALS_PER_DAY as i64).map(usize::from))]
        meals_per_day: usize,

        /// How day A and day B are laid out over the week.
        #[arg(long, value_enum, default_value_t = RotationType::AbRotation)]
        rotation: RotationType,

        /// Name stored with the plan.
        #[arg(long, default_value = "My Meal Plan")]
        name: String,

        /// Save the plan record to this JSON file.
        #[arg(short, long)]
        out: Option<String>,

        /// Also print ingredients and instructions.
        #[arg(long)]
        instructions: bool,
    },

    /// Replace the recipe in one slot of a saved plan.
    Swap {
        #[command(flatten)]
        slot: SlotArgs,

        /// Recipe name (fuzzy matched against the catalog).
        #[arg(long)]
        recipe: String,
    },

    /// Change how many servings one slot of a saved plan counts for.
    Portion {
        #[command(flatten)]
        slot: SlotArgs,

        /// Serving multiplier, e.g. 1.5.
        #[arg(long)]
        multiplier: f64,
    },

    /// Aggregate the week's ingredients for a saved plan.
    Shopping {
        /// Saved plan JSON file.
        #[arg(long)]
        plan: String,

        /// Also write the list to this CSV file.
        #[arg(long)]
        csv: Option<String>,
    },
}

/// Addresses one meal slot in a saved plan.
#[derive(Args, Debug)]
pub struct SlotArgs {
    /// Saved plan JSON file.
    #[arg(long)]
    pub plan: String,

    /// Day type to edit.
    #[arg(long, value_enum)]
    pub day: DayType,

    /// Slot number, starting at 1.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub slot: usize,
}

impl SlotArgs {
    /// Zero-based slot index.
    pub fn index(&self) -> usize {
        self.slot - 1
    }
}

/// Body stats given on the command line.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[arg(long, value_enum, default_value_t = Sex::Unspecified)]
    pub sex: Sex,

    /// Age in years.
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Height in `--height-unit`.
    #[arg(long)]
    pub height: f64,

    #[arg(long, value_enum, default_value_t = HeightUnit::Cm)]
    pub height_unit: HeightUnit,

    /// Weight in `--weight-unit`.
    #[arg(long)]
    pub weight: f64,

    #[arg(long, value_enum, default_value_t = WeightUnit::Kg)]
    pub weight_unit: WeightUnit,

    /// Lifting sessions per week.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(0..=7))]
    pub lifting_days: u32,

    /// Average steps per day.
    #[arg(long, default_value_t = 8000)]
    pub steps: u32,

    #[arg(long, value_enum, default_value_t = Goal::Maintain)]
    pub goal: Goal,

    #[arg(long, value_enum, default_value_t = Aggression::Safe)]
    pub aggression: Aggression,
}

impl StatsArgs {
    pub fn to_stats(&self) -> UserStats {
        UserStats {
            sex: self.sex,
            age: age_or_default(self.age),
            height_cm: self.height_unit.to_cm(self.height),
            weight_kg: self.weight_unit.to_kg(self.weight),
            lifting_days: self.lifting_days,
            daily_steps: self.steps,
            goal: self.goal,
            aggression: self.aggression,
        }
    }
}
