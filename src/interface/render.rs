use crate::models::{DayType, GeneratedMeal, MacroTargets, MealPlanRecord, ShoppingItem};
use crate::planner::schedule::{day_totals, week_schedule};

/// Display the daily macro budget.
pub fn display_macro_targets(targets: &MacroTargets) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("  Calories: {:>5} kcal", targets.calories);
    println!("  Protein:  {:>5} g", targets.protein);
    println!("  Carbs:    {:>5} g", targets.carbs);
    println!("  Fat:      {:>5} g", targets.fat);
    println!("  Fiber:    {:>5} g", targets.fiber);
    println!("  Water:    {:>5.1} L", targets.water);
    println!();
}

fn display_day(label: DayType, meals: &[GeneratedMeal], targets: &MacroTargets, expected: usize) {
    println!("--- Day {} ---", label.label());

    if meals.is_empty() {
        println!("  (no meals; add homemade recipes to the catalog)");
        println!();
        return;
    }

    let max_name_len = meals.iter().map(|m| m.recipe.len()).max().unwrap_or(10);

    for meal in meals {
        let portion = if (meal.portion - 1.0).abs() > f64::EPSILON {
            format!("  x{:.2}", meal.portion)
        } else {
            String::new()
        };

        println!(
            "  {:<7} {:<width$} - {:>4.0} kcal | {:>3.0} g protein{}",
            meal.slot,
            meal.recipe,
            meal.scaled_calories(),
            meal.scaled_protein(),
            portion,
            width = max_name_len
        );
    }

    let totals = day_totals(meals);
    let (cal_dev, protein_dev) = totals.deviation(targets);
    println!(
        "  Total: {:.0} kcal ({:+.0}) | {:.0} g protein ({:+.0})",
        totals.calories, cal_dev, totals.protein, protein_dev
    );

    if meals.len() < expected {
        println!(
            "  Incomplete plan: {} of {} meals filled.",
            meals.len(),
            expected
        );
    }
    println!();
}

/// Display both day menus and the weekly layout.
pub fn display_meal_plan(record: &MealPlanRecord, meals_per_day: usize) {
    println!();
    println!("=== Meal Plan: {} ===", record.name);
    println!();

    display_day(DayType::A, &record.plan.day_a, &record.targets, meals_per_day);
    display_day(DayType::B, &record.plan.day_b, &record.targets, meals_per_day);

    println!("--- Week ---");
    for day in week_schedule(&record.plan, record.rotation) {
        println!("  {:<9} Day {}", day.weekday.to_string(), day.day_type.label());
    }
    println!();
}

/// Display instructions for every meal of one day.
pub fn display_instructions(meals: &[GeneratedMeal]) {
    for meal in meals {
        println!("{}: {}", meal.slot, meal.recipe);
        for ingredient in &meal.ingredients {
            println!("    - {} {}", ingredient.amount, ingredient.name);
        }
        println!("    {}", meal.instructions);
        println!();
    }
}

pub fn display_shopping_list(items: &[ShoppingItem]) {
    if items.is_empty() {
        println!("Shopping list: (none)");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", items.len());
    println!();

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);
    for item in items {
        println!(
            "  {:<width$}  {:>8}  x{}",
            item.name,
            item.amount,
            item.count,
            width = max_name_len
        );
    }
    println!();
}
