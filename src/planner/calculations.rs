use crate::models::{Aggression, Goal, MacroTargets, Sex, UserStats};
use crate::planner::constants::*;

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
///
/// Unrounded. Unspecified sex uses the midpoint of the male and female offsets.
pub fn calculate_bmr(stats: &UserStats) -> f64 {
    let base = BMR_WEIGHT_COEF * stats.weight_kg + BMR_HEIGHT_COEF * stats.height_cm
        - BMR_AGE_COEF * stats.age as f64;

    let offset = match stats.sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
        Sex::Unspecified => BMR_UNSPECIFIED_OFFSET,
    };

    base + offset
}

/// Activity multiplier from lifting frequency plus a capped step bonus.
///
/// Steps at or below 5000 add nothing; each 2500 above adds 0.05, up to +0.20.
pub fn activity_multiplier(lifting_days: u32, daily_steps: u32) -> f64 {
    let base = LIFTING_MULTIPLIERS
        .iter()
        .find(|(min_days, _)| lifting_days >= *min_days)
        .map(|(_, mult)| *mult)
        .unwrap_or(SEDENTARY_MULT);

    let step_bonus =
        ((daily_steps as f64 - STEP_BASELINE) / STEP_BLOCK).max(0.0) * STEP_BONUS_PER_BLOCK;

    base + step_bonus.min(STEP_BONUS_CAP)
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn calculate_tdee(stats: &UserStats) -> f64 {
    calculate_bmr(stats) * activity_multiplier(stats.lifting_days, stats.daily_steps)
}

/// Daily calorie target for the goal, rounded to whole kcal.
fn calorie_target(stats: &UserStats, bmr: f64, tdee: f64) -> i64 {
    let aggressive = stats.aggression == Aggression::Aggressive;

    let target = match stats.goal {
        Goal::Cut => {
            let deficit = if aggressive {
                AGGRESSIVE_DEFICIT
            } else {
                SAFE_DEFICIT
            };
            let cut = round_half_up(tdee * (1.0 - deficit));
            cut.max(round_half_up(bmr * CUT_BMR_FLOOR))
        }
        Goal::Gain => {
            let surplus = if aggressive {
                AGGRESSIVE_SURPLUS
            } else {
                SAFE_SURPLUS
            };
            round_half_up(tdee * (1.0 + surplus))
        }
        Goal::Maintain => round_half_up(tdee),
    };

    target as i64
}

/// Compute the daily macro budget for a set of stats.
///
/// Protein and fat are fixed per kg of bodyweight; carbs take the remaining
/// calories but never drop below 50 g.
pub fn calculate_macros(stats: &UserStats) -> MacroTargets {
    let bmr = calculate_bmr(stats);
    let tdee = bmr * activity_multiplier(stats.lifting_days, stats.daily_steps);
    let calories = calorie_target(stats, bmr, tdee);

    let protein_per_kg = if stats.goal == Goal::Cut {
        PROTEIN_PER_KG_CUT
    } else {
        PROTEIN_PER_KG
    };
    let protein = round_half_up(stats.weight_kg * protein_per_kg) as i64;
    let fat = round_half_up(stats.weight_kg * FAT_PER_KG) as i64;

    let carb_calories = calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;
    let carbs = (round_half_up(carb_calories as f64 / KCAL_PER_G_CARBS as f64) as i64)
        .max(MIN_CARBS_G);

    let fiber = round_half_up(calories as f64 / 1000.0 * FIBER_PER_1000_KCAL) as i64;
    let water = round_half_up(stats.weight_kg * WATER_ML_PER_KG / 1000.0 * 10.0) / 10.0;

    log::debug!(
        "bmr={:.1} tdee={:.1} -> {} kcal (P:{} C:{} F:{})",
        bmr,
        tdee,
        calories,
        protein,
        carbs,
        fat
    );

    MacroTargets {
        calories,
        protein,
        carbs,
        fat,
        fiber,
        water,
    }
}
