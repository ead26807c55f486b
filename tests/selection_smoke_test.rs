use std::collections::HashSet;

use macro_meal_planner::models::{
    DayType, GeneratedMeal, MacroTargets, RecipeCatalogEntry, RecipeMacros, RecipeSource,
    RotationType,
};
use macro_meal_planner::planner::{
    calculate_macros, day_totals, generate_daily_meals, generate_meal_plan, shopping_list,
    GeneratorConfig,
};
use macro_meal_planner::state::{load_catalog, save_catalog, RecipeCatalog};
use macro_meal_planner::UserStats;

const DEMO_CATALOG: &str = include_str!("../demos/recipes.json");

fn demo_catalog() -> RecipeCatalog {
    let entries: Vec<RecipeCatalogEntry> = serde_json::from_str(DEMO_CATALOG).unwrap();
    RecipeCatalog::new(entries)
}

fn targets(calories: i64, protein: i64, carbs: i64, fat: i64) -> MacroTargets {
    MacroTargets {
        calories,
        protein,
        carbs,
        fat,
        fiber: 30,
        water: 3.5,
    }
}

fn recomp_targets() -> MacroTargets {
    targets(2100, 180, 200, 70)
}

fn homemade(id: u32, calories: f64, protein: f64) -> RecipeCatalogEntry {
    RecipeCatalogEntry {
        id,
        name: format!("Recipe {}", id),
        macros: RecipeMacros {
            calories,
            protein,
            carbs: 40.0,
            fat: 15.0,
        },
        source: RecipeSource::Homemade,
        ingredients: vec![],
        instructions: vec![],
        description: format!("Recipe {} description", id),
    }
}

fn names(meals: &[GeneratedMeal]) -> Vec<&str> {
    meals.iter().map(|m| m.recipe.as_str()).collect()
}

#[test]
fn test_generates_three_labelled_meals() {
    let catalog = demo_catalog();
    let meals = generate_daily_meals(
        &recomp_targets(),
        DayType::A,
        catalog.entries(),
        &GeneratorConfig::default(),
    );

    assert_eq!(meals.len(), 3);
    assert_eq!(meals[0].slot, "Meal 1");
    assert_eq!(meals[1].slot, "Meal 2");
    assert_eq!(meals[2].slot, "Meal 3");
}

#[test]
fn test_best_matches_first() {
    // Per meal: 700 kcal / 60 g protein
    let catalog = demo_catalog();
    let plan = generate_meal_plan(&recomp_targets(), catalog.entries(), &Default::default());

    assert_eq!(
        names(&plan.day_a),
        vec!["Salmon Potatoes", "Beef Burrito Bowl", "Chicken Rice Bowl"]
    );
    assert_eq!(
        names(&plan.day_b),
        vec!["Turkey Chili", "Tuna Pasta", "Greek Yogurt Protein Oats"]
    );
}

#[test]
fn test_meals_have_reasonable_macros() {
    let catalog = demo_catalog();
    let meals = generate_daily_meals(
        &recomp_targets(),
        DayType::A,
        catalog.entries(),
        &GeneratorConfig::default(),
    );

    for meal in &meals {
        assert!(meal.macros.calories > 0.0 && meal.macros.calories < 1000.0);
        assert!(meal.macros.protein > 0.0 && meal.macros.protein < 100.0);
        assert!(!meal.recipe.is_empty());
        assert!(!meal.instructions.is_empty());
    }
}

#[test]
fn test_external_recipes_never_selected() {
    let catalog = demo_catalog();
    let external: HashSet<u32> = catalog
        .entries()
        .iter()
        .filter(|e| !e.is_homemade())
        .map(|e| e.id)
        .collect();
    assert!(!external.is_empty());

    for calories in [1200, 1600, 2100, 2800, 4000] {
        let plan = generate_meal_plan(
            &targets(calories, 180, 200, 70),
            catalog.entries(),
            &Default::default(),
        );
        for meal in plan.day_a.iter().chain(plan.day_b.iter()) {
            assert!(!external.contains(&meal.recipe_id));
        }
    }
}

#[test]
fn test_days_differ_and_have_distinct_recipes() {
    let catalog = demo_catalog();

    for calories in (1200..=4000).step_by(200) {
        for protein in [100, 150, 200, 250] {
            let plan = generate_meal_plan(
                &targets(calories, protein, 200, 70),
                catalog.entries(),
                &Default::default(),
            );

            for day in [&plan.day_a, &plan.day_b] {
                let ids: HashSet<u32> = day.iter().map(|m| m.recipe_id).collect();
                assert_eq!(ids.len(), 3);
            }

            let differs = plan
                .day_a
                .iter()
                .zip(plan.day_b.iter())
                .any(|(a, b)| a.recipe_id != b.recipe_id);
            assert!(differs);
        }
    }
}

#[test]
fn test_cut_targets_land_near_budget() {
    let catalog = demo_catalog();
    let plan = generate_meal_plan(
        &targets(1600, 160, 120, 50),
        catalog.entries(),
        &Default::default(),
    );

    let totals = day_totals(&plan.day_a);
    assert_eq!(plan.day_a.len(), 3);
    assert!(totals.calories >= 1300.0 && totals.calories <= 1900.0);
}

#[test]
fn test_bulk_targets_fill_every_slot() {
    let catalog = demo_catalog();
    let plan = generate_meal_plan(
        &targets(2800, 200, 300, 90),
        catalog.entries(),
        &Default::default(),
    );

    assert_eq!(plan.day_a.len(), 3);
    assert_eq!(plan.day_b.len(), 3);
    assert!(plan.day_a.iter().all(|m| m.macros.calories > 0.0));
}

#[test]
fn test_instructions_fall_back_to_description() {
    let catalog = demo_catalog();
    let scramble = catalog.find_by_name("egg white scramble").unwrap();
    assert!(scramble.instructions.is_empty());

    let meal = GeneratedMeal::from_entry(0, scramble);
    assert_eq!(meal.instructions, scramble.description);
}

#[test]
fn test_ties_keep_catalog_order() {
    // All equally distant from 600 kcal / 50 g
    let catalog = vec![
        homemade(10, 650.0, 50.0),
        homemade(11, 550.0, 50.0),
        homemade(12, 600.0, 75.0),
        homemade(13, 600.0, 25.0),
    ];
    let meals = generate_daily_meals(
        &targets(1800, 150, 200, 60),
        DayType::A,
        &catalog,
        &GeneratorConfig::default(),
    );

    let ids: Vec<u32> = meals.iter().map(|m| m.recipe_id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
}

#[test]
fn test_four_entries_days_differ() {
    let catalog: Vec<RecipeCatalogEntry> = (1..=4).map(|i| homemade(i, 500.0, 40.0)).collect();
    let plan = generate_meal_plan(&targets(1500, 120, 150, 50), &catalog, &Default::default());

    // B starts at the 4th entry and wraps
    let a: Vec<u32> = plan.day_a.iter().map(|m| m.recipe_id).collect();
    let b: Vec<u32> = plan.day_b.iter().map(|m| m.recipe_id).collect();
    assert_eq!(a, vec![1, 2, 3]);
    assert_eq!(b, vec![4, 1, 2]);
}

#[test]
fn test_undersized_catalog_returns_short_days() {
    for size in 0..3u32 {
        let catalog: Vec<RecipeCatalogEntry> =
            (1..=size).map(|i| homemade(i, 500.0, 40.0)).collect();
        let plan = generate_meal_plan(&recomp_targets(), &catalog, &Default::default());

        assert_eq!(plan.day_a.len(), size as usize);
        assert_eq!(plan.day_b.len(), size as usize);
        assert!(plan.is_incomplete(3));

        let ids: HashSet<u32> = plan.day_b.iter().map(|m| m.recipe_id).collect();
        assert_eq!(ids.len(), size as usize);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let catalog = demo_catalog();
    let first = generate_meal_plan(&recomp_targets(), catalog.entries(), &Default::default());
    let second = generate_meal_plan(&recomp_targets(), catalog.entries(), &Default::default());
    assert_eq!(first, second);
}

#[test]
fn test_stats_to_plan_to_shopping_list() {
    let catalog = demo_catalog();
    let stats = UserStats::default();
    let targets = calculate_macros(&stats);
    let plan = generate_meal_plan(&targets, catalog.entries(), &Default::default());

    let list = shopping_list(&plan, RotationType::AbRotation);
    assert!(!list.is_empty());

    // Every day uses every ingredient of its menu once
    let total: u32 = list.iter().map(|i| i.count).sum();
    let per_day = |meals: &[GeneratedMeal]| -> u32 {
        meals.iter().map(|m| m.ingredients.len() as u32).sum()
    };
    assert_eq!(total, 4 * per_day(&plan.day_a) + 3 * per_day(&plan.day_b));
}

#[test]
fn test_saved_catalog_generates_same_plan() {
    let catalog = demo_catalog();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");

    save_catalog(&path, catalog.entries()).unwrap();
    let reloaded = load_catalog(&path).unwrap();

    assert_eq!(reloaded.len(), catalog.len());
    assert_eq!(
        generate_meal_plan(&recomp_targets(), reloaded.entries(), &Default::default()),
        generate_meal_plan(&recomp_targets(), catalog.entries(), &Default::default())
    );
}
