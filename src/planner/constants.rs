/// Mifflin-St Jeor coefficients per kg, cm and year.
pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Midpoint of the male and female offsets.
pub const BMR_UNSPECIFIED_OFFSET: f64 = -78.0;

/// Base multiplier with no lifting days.
pub const SEDENTARY_MULT: f64 = 1.20;

/// (minimum lifting days, multiplier), checked from the top down.
pub const LIFTING_MULTIPLIERS: [(u32, f64); 3] = [(5, 1.55), (3, 1.45), (1, 1.35)];

/// Steps per day that earn no bonus.
pub const STEP_BASELINE: f64 = 5000.0;

/// Every this many steps above the baseline adds `STEP_BONUS_PER_BLOCK`.
pub const STEP_BLOCK: f64 = 2500.0;
pub const STEP_BONUS_PER_BLOCK: f64 = 0.05;
pub const STEP_BONUS_CAP: f64 = 0.20;

/// Fraction of TDEE removed on a cut.
pub const SAFE_DEFICIT: f64 = 0.20;
pub const AGGRESSIVE_DEFICIT: f64 = 0.25;

/// Fraction of TDEE added on a gain.
pub const SAFE_SURPLUS: f64 = 0.10;
pub const AGGRESSIVE_SURPLUS: f64 = 0.15;

/// A cut never drops below this fraction of BMR.
pub const CUT_BMR_FLOOR: f64 = 0.8;

/// Grams of protein per kg bodyweight.
pub const PROTEIN_PER_KG_CUT: f64 = 2.2;
pub const PROTEIN_PER_KG: f64 = 2.0;

/// Grams of fat per kg bodyweight, independent of goal.
pub const FAT_PER_KG: f64 = 0.9;

pub const KCAL_PER_G_PROTEIN: i64 = 4;
pub const KCAL_PER_G_CARBS: i64 = 4;
pub const KCAL_PER_G_FAT: i64 = 9;

pub const MIN_CARBS_G: i64 = 50;

/// Grams of fiber per 1000 kcal.
pub const FIBER_PER_1000_KCAL: f64 = 14.0;

/// Milliliters of water per kg bodyweight.
pub const WATER_ML_PER_KG: f64 = 35.0;

pub const DEFAULT_MEALS_PER_DAY: usize = 3;

/// Upper bound on meal slots a stored plan supports.
pub const MAX_MEALS_PER_DAY: usize = 5;

/// Protein deviation counts this many times a calorie deviation.
pub const PROTEIN_SCORE_WEIGHT: f64 = 2.0;

/// Jaro-Winkler similarity needed for a fuzzy recipe name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Round half up, so `-2.5` becomes `-2` and `2.5` becomes `3`.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
