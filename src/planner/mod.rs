pub mod calculations;
pub mod constants;
pub mod ranking;
pub mod schedule;

pub use calculations::{activity_multiplier, calculate_bmr, calculate_macros, calculate_tdee};
pub use constants::*;
pub use ranking::{
    generate_daily_meals, generate_meal_plan, match_score, GeneratorConfig, MealTarget,
};
pub use schedule::{
    day_totals, day_type_for, set_portion, shopping_list, swap_meal, week_schedule, week_totals,
    DayTotals, ScheduledDay, Weekday,
};
