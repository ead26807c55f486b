use clap::Parser;
use std::path::Path;

use macro_meal_planner::cli::{Cli, Command, SlotArgs, StatsArgs};
use macro_meal_planner::error::Result;
use macro_meal_planner::interface::{
    collect_user_stats, display_instructions, display_macro_targets, display_meal_plan,
    display_shopping_list, prompt_recipe, prompt_yes_no,
};
use macro_meal_planner::models::{MealPlanRecord, RotationType};
use macro_meal_planner::planner::{
    calculate_macros, generate_meal_plan, set_portion, shopping_list, swap_meal, GeneratorConfig,
};
use macro_meal_planner::state::{load_catalog, load_plan, save_plan, write_shopping_csv};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Macros { stats } => cmd_macros(&stats),
        Command::Onboard => cmd_onboard(),
        Command::Plan {
            stats,
            meals_per_day,
            rotation,
            name,
            out,
            instructions,
        } => cmd_plan(
            &cli.catalog,
            &stats,
            meals_per_day,
            rotation,
            name,
            out.as_deref(),
            instructions,
        ),
        Command::Swap { slot, recipe } => cmd_swap(&cli.catalog, &slot, &recipe),
        Command::Portion { slot, multiplier } => cmd_portion(&slot, multiplier),
        Command::Shopping { plan, csv } => cmd_shopping(&plan, csv.as_deref()),
    }
}

/// Print macro targets for stats given as flags.
fn cmd_macros(stats: &StatsArgs) -> Result<()> {
    let targets = calculate_macros(&stats.to_stats());
    display_macro_targets(&targets);
    Ok(())
}

/// Collect stats interactively and print macro targets.
fn cmd_onboard() -> Result<()> {
    let stats = collect_user_stats()?;
    log::debug!("Collected stats: {:?}", stats);

    let targets = calculate_macros(&stats);
    display_macro_targets(&targets);
    Ok(())
}

/// Generate a plan from stats and the recipe catalog.
fn cmd_plan(
    catalog_path: &str,
    stats: &StatsArgs,
    meals_per_day: usize,
    rotation: RotationType,
    name: String,
    out: Option<&str>,
    show_instructions: bool,
) -> Result<()> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", catalog_path);
        eprintln!("Pass --catalog or set MEAL_PLANNER_CATALOG.");
        return Ok(());
    }

    // Load recipes
    let catalog = load_catalog(path)?;
    println!(
        "Loaded {} recipes ({} homemade)",
        catalog.len(),
        catalog.homemade().len()
    );

    for entry in catalog.invalid_entries() {
        log::warn!("Recipe {} '{}' has invalid macros", entry.id, entry.name);
    }

    // Calculate targets
    let targets = calculate_macros(&stats.to_stats());
    display_macro_targets(&targets);

    // Generate plan
    let config = GeneratorConfig { meals_per_day };
    let plan = generate_meal_plan(&targets, catalog.entries(), &config);

    let record = MealPlanRecord {
        name,
        rotation,
        targets,
        plan,
    };
    // Display results
    display_meal_plan(&record, meals_per_day);

    if show_instructions {
        println!("=== Day A ===");
        display_instructions(&record.plan.day_a);
        println!("=== Day B ===");
        display_instructions(&record.plan.day_b);
    }

    // Save plan record
    if let Some(out) = out {
        save_plan(out, &record)?;
        println!("Plan saved to {}", out);
    }

    Ok(())
}

/// Swap the recipe in one slot of a saved plan.
fn cmd_swap(catalog_path: &str, slot: &SlotArgs, recipe: &str) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let mut record = load_plan(&slot.plan)?;

    // Resolve the replacement recipe
    let entry = prompt_recipe(&catalog, recipe)?;
    swap_meal(&mut record.plan, slot.day, slot.index(), entry)?;

    let expected = record.plan.day_a.len().max(record.plan.day_b.len());
    display_meal_plan(&record, expected);

    // Save updated plan
    if prompt_yes_no("Save updated plan?", true)? {
        save_plan(&slot.plan, &record)?;
        println!("Plan saved.");
    }

    Ok(())
}

/// Change the portion multiplier of one slot.
fn cmd_portion(slot: &SlotArgs, multiplier: f64) -> Result<()> {
    let mut record = load_plan(&slot.plan)?;
    set_portion(&mut record.plan, slot.day, slot.index(), multiplier)?;
    save_plan(&slot.plan, &record)?;

    println!(
        "Day {} Meal {} set to {:.2} servings.",
        slot.day.label(),
        slot.slot,
        multiplier
    );
    Ok(())
}

/// Print, and optionally export, the week's shopping list.
fn cmd_shopping(plan_path: &str, csv: Option<&str>) -> Result<()> {
    let record = load_plan(plan_path)?;
    let items = shopping_list(&record.plan, record.rotation);

    display_shopping_list(&items);

    // Export CSV
    if let Some(csv) = csv {
        write_shopping_csv(csv, &items)?;
        println!("Shopping list written to {}", csv);
    }

    Ok(())
}
