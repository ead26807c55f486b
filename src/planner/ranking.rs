use std::collections::HashSet;

use crate::models::{DayType, GeneratedMeal, GeneratedMealPlan, MacroTargets, RecipeCatalogEntry};
use crate::planner::constants::*;

/// Catalog entry with its match score for one day.
#[derive(Debug)]
struct Candidate<'a> {
    entry: &'a RecipeCatalogEntry,
    score: f64,
}

/// Configurable knobs for meal generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub meals_per_day: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            meals_per_day: DEFAULT_MEALS_PER_DAY,
        }
    }
}

impl GeneratorConfig {
    /// Sorted-list index a day type starts scanning from.
    ///
    /// Day B skips past day A's top picks.
    pub fn day_offset(&self, day: DayType) -> usize {
        match day {
            DayType::A => 0,
            DayType::B => self.meals_per_day,
        }
    }
}

/// Per-meal calorie and protein targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTarget {
    pub calories: f64,
    pub protein: f64,
}

impl MealTarget {
    /// Split daily targets evenly over `meals_per_day`, rounded to whole units.
    pub fn from_daily(targets: &MacroTargets, meals_per_day: usize) -> Self {
        let meals = meals_per_day as f64;
        Self {
            calories: round_half_up(targets.calories as f64 / meals),
            protein: round_half_up(targets.protein as f64 / meals),
        }
    }
}

/// Distance of a recipe from the per-meal target. Lower is better.
///
/// Protein deviation is weighted twice as heavily as calorie deviation.
pub fn match_score(entry: &RecipeCatalogEntry, target: &MealTarget) -> f64 {
    let calorie_diff = (entry.macros.calories - target.calories).abs();
    let protein_diff = (entry.macros.protein - target.protein).abs();
    calorie_diff + protein_diff * PROTEIN_SCORE_WEIGHT
}

/// Homemade entries sorted best match first. Ties keep catalog order.
fn rank_candidates<'a>(
    catalog: &'a [RecipeCatalogEntry],
    target: &MealTarget,
) -> Vec<Candidate<'a>> {
    let mut candidates: Vec<Candidate> = catalog
        .iter()
        .filter(|entry| entry.is_homemade())
        .map(|entry| Candidate {
            entry,
            score: match_score(entry, target),
        })
        .collect();

    // `sort_by` is stable
    candidates.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
}

/// Pick up to `count` distinct recipes from the ranked list.
///
/// Slot `i` starts at `(offset + i) % len` and probes forward past recipes
/// already used. Slots the probe could not fill are topped up with the
/// best-ranked unused recipes.
fn select_distinct<'a>(
    ranked: &[Candidate<'a>],
    offset: usize,
    count: usize,
) -> Vec<&'a RecipeCatalogEntry> {
    let len = ranked.len();
    let mut selected: Vec<&RecipeCatalogEntry> = Vec::with_capacity(count);
    let mut used: HashSet<u32> = HashSet::new();

    // Offset pass, probing past used recipes
    for i in 0..count.min(len) {
        let start = (offset + i) % len;
        let mut candidate = &ranked[start];

        let mut attempts = 0;
        while used.contains(&candidate.entry.id) && attempts < len {
            candidate = &ranked[(start + attempts + 1) % len];
            attempts += 1;
        }

        if used.insert(candidate.entry.id) {
            selected.push(candidate.entry);
        }
    }

    // Top up with the best unused
    while selected.len() < count {
        match ranked.iter().find(|c| !used.contains(&c.entry.id)) {
            Some(remaining) => {
                used.insert(remaining.entry.id);
                selected.push(remaining.entry);
            }
            None => break,
        }
    }

    selected
}

/// Generate one day's meals approximately matching the targets.
///
/// Returns fewer than `meals_per_day` meals when the catalog has too few
/// distinct homemade recipes.
pub fn generate_daily_meals(
    targets: &MacroTargets,
    day: DayType,
    catalog: &[RecipeCatalogEntry],
    config: &GeneratorConfig,
) -> Vec<GeneratedMeal> {
    if config.meals_per_day == 0 {
        return Vec::new();
    }

    // Score homemade recipes against the per-meal target
    let target = MealTarget::from_daily(targets, config.meals_per_day);
    let ranked = rank_candidates(catalog, &target);

    if ranked.is_empty() {
        log::warn!("Day {}: no homemade recipes in catalog", day.label());
        return Vec::new();
    }

    for c in &ranked {
        log::debug!("Day {} candidate {} score={:.1}", day.label(), c.entry.name, c.score);
    }

    // Pick distinct recipes starting at this day's offset
    let selected = select_distinct(&ranked, config.day_offset(day), config.meals_per_day);

    if selected.len() < config.meals_per_day {
        log::warn!(
            "Day {}: only {} of {} meals could be filled",
            day.label(),
            selected.len(),
            config.meals_per_day
        );
    }

    // Label slots Meal 1..n
    selected
        .into_iter()
        .enumerate()
        .map(|(i, entry)| GeneratedMeal::from_entry(i, entry))
        .collect()
}

/// Generate day A and day B menus from the same catalog snapshot.
pub fn generate_meal_plan(
    targets: &MacroTargets,
    catalog: &[RecipeCatalogEntry],
    config: &GeneratorConfig,
) -> GeneratedMealPlan {
    GeneratedMealPlan {
        day_a: generate_daily_meals(targets, DayType::A, catalog, config),
        day_b: generate_daily_meals(targets, DayType::B, catalog, config),
    }
}
