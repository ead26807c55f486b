use std::fmt;

use crate::error::{PlannerError, Result};
use crate::models::{
    DayType, GeneratedMeal, GeneratedMealPlan, MacroTargets, RecipeCatalogEntry, RotationType,
    ShoppingItem,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day number counted from Sunday = 0.
    pub fn number_from_sunday(self) -> usize {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// One day of the week with the menu it follows.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledDay<'a> {
    pub weekday: Weekday,
    pub day_type: DayType,
    pub meals: &'a [GeneratedMeal],
}

/// Day type a weekday follows.
///
/// Under A/B rotation even days counted from Sunday use day A, so Sunday
/// and Tuesday are A and Monday is B.
pub fn day_type_for(rotation: RotationType, weekday: Weekday) -> DayType {
    match rotation {
        RotationType::SameDaily => DayType::A,
        RotationType::AbRotation if weekday.number_from_sunday() % 2 == 0 => DayType::A,
        RotationType::AbRotation => DayType::B,
    }
}

/// Lay the plan out over Monday..Sunday.
pub fn week_schedule(plan: &GeneratedMealPlan, rotation: RotationType) -> Vec<ScheduledDay<'_>> {
    Weekday::ALL
        .iter()
        .map(|&weekday| {
            let day_type = day_type_for(rotation, weekday);
            ScheduledDay {
                weekday,
                day_type,
                meals: plan.day(day_type),
            }
        })
        .collect()
}

/// Portion-scaled calories and protein for a set of meals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
}

impl DayTotals {
    /// Signed (calories, protein) difference from the daily targets.
    pub fn deviation(&self, targets: &MacroTargets) -> (f64, f64) {
        (
            self.calories - targets.calories as f64,
            self.protein - targets.protein as f64,
        )
    }
}

pub fn day_totals(meals: &[GeneratedMeal]) -> DayTotals {
    meals.iter().fold(DayTotals::default(), |acc, meal| DayTotals {
        calories: acc.calories + meal.scaled_calories(),
        protein: acc.protein + meal.scaled_protein(),
    })
}

/// Totals summed over the scheduled week.
pub fn week_totals(plan: &GeneratedMealPlan, rotation: RotationType) -> DayTotals {
    week_schedule(plan, rotation)
        .iter()
        .map(|day| day_totals(day.meals))
        .fold(DayTotals::default(), |acc, day| DayTotals {
            calories: acc.calories + day.calories,
            protein: acc.protein + day.protein,
        })
}

fn slot_mut(plan: &mut GeneratedMealPlan, day: DayType, slot: usize) -> Result<&mut GeneratedMeal> {
    let meals = plan.day_mut(day);
    let len = meals.len();
    meals.get_mut(slot).ok_or(PlannerError::SlotOutOfRange {
        day: day.label(),
        slot: slot + 1,
        len,
    })
}

/// Replace the recipe in a slot, keeping the slot label and portion.
pub fn swap_meal(
    plan: &mut GeneratedMealPlan,
    day: DayType,
    slot: usize,
    entry: &RecipeCatalogEntry,
) -> Result<()> {
    let meal = slot_mut(plan, day, slot)?;
    let label = std::mem::take(&mut meal.slot);
    let portion = meal.portion;
    *meal = GeneratedMeal::from_entry(slot, entry);
    meal.slot = label;
    meal.portion = portion;
    Ok(())
}

/// Set how many servings a slot's recipe counts for.
pub fn set_portion(
    plan: &mut GeneratedMealPlan,
    day: DayType,
    slot: usize,
    multiplier: f64,
) -> Result<()> {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "Portion must be a positive number, got {}",
            multiplier
        )));
    }

    slot_mut(plan, day, slot)?.portion = multiplier;
    Ok(())
}

/// Ingredients needed for the scheduled week, in first-seen order.
///
/// Each use in a scheduled meal counts once; the amount is the one written on
/// the first recipe that used the ingredient.
pub fn shopping_list(plan: &GeneratedMealPlan, rotation: RotationType) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();

    for day in week_schedule(plan, rotation) {
        for meal in day.meals {
            for ingredient in &meal.ingredients {
                match items.iter_mut().find(|item| item.name == ingredient.name) {
                    Some(item) => item.count += 1,
                    None => items.push(ShoppingItem {
                        name: ingredient.name.clone(),
                        amount: ingredient.amount.clone(),
                        count: 1,
                    }),
                }
            }
        }
    }

    items
}
