use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::stats::{
    age_or_default, feet_inches_to_cm, DEFAULT_AGE, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG,
};
use crate::models::{
    Aggression, Goal, HeightUnit, RecipeCatalogEntry, Sex, UserStats, WeightUnit,
};
use crate::state::RecipeCatalog;

/// Prompt for a number, falling back to `default` on empty input.
fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_non_negative(prompt: &str, default: &str) -> Result<f64> {
    let value = prompt_number(prompt, default)?;
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be a non-negative number",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for a whole number no greater than `max`.
fn prompt_count(prompt: &str, default: u32, max: u32) -> Result<u32> {
    let value = Input::<u32>::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?;

    if value > max {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be at most {}",
            prompt, max
        )));
    }
    Ok(value)
}

pub fn prompt_sex() -> Result<Sex> {
    let options = ["Male", "Female", "Prefer not to say"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(2)
        .interact()?;

    Ok(match selection {
        0 => Sex::Male,
        1 => Sex::Female,
        _ => Sex::Unspecified,
    })
}

pub fn prompt_goal() -> Result<(Goal, Aggression)> {
    let goals = ["Cut (lose fat)", "Maintain", "Gain (build muscle)"];
    let goal = match Select::new()
        .with_prompt("Goal")
        .items(&goals)
        .default(1)
        .interact()?
    {
        0 => Goal::Cut,
        2 => Goal::Gain,
        _ => Goal::Maintain,
    };

    if goal == Goal::Maintain {
        return Ok((goal, Aggression::Safe));
    }

    let aggressive = Confirm::new()
        .with_prompt("Aggressive pace?")
        .default(false)
        .interact()?;

    let aggression = if aggressive {
        Aggression::Aggressive
    } else {
        Aggression::Safe
    };
    Ok((goal, aggression))
}

/// Prompt for height in cm, inches, or feet + inches.
pub fn prompt_height_cm() -> Result<f64> {
    let units = ["cm", "in", "ft + in"];
    let unit = Select::new()
        .with_prompt("Height unit")
        .items(&units)
        .default(0)
        .interact()?;

    let cm = match unit {
        1 => HeightUnit::In.to_cm(prompt_non_negative("Height (in)", "67")?),
        2 => {
            let feet = prompt_non_negative("Height (ft)", "5")?;
            let inches = prompt_non_negative("Height (in)", "7")?;
            feet_inches_to_cm(feet, inches)
        }
        _ => prompt_non_negative("Height (cm)", &DEFAULT_HEIGHT_CM.to_string())?,
    };

    Ok(if cm > 0.0 { cm } else { DEFAULT_HEIGHT_CM })
}

pub fn prompt_weight_kg() -> Result<f64> {
    let units = ["kg", "lbs"];
    let unit = match Select::new()
        .with_prompt("Weight unit")
        .items(&units)
        .default(0)
        .interact()?
    {
        1 => WeightUnit::Lbs,
        _ => WeightUnit::Kg,
    };

    let default = match unit {
        WeightUnit::Kg => "70",
        WeightUnit::Lbs => "155",
    };
    let kg = unit.to_kg(prompt_non_negative("Weight", default)?);

    Ok(if kg > 0.0 { kg } else { DEFAULT_WEIGHT_KG })
}

/// Walk through every stat needed for a macro calculation.
pub fn collect_user_stats() -> Result<UserStats> {
    let (goal, aggression) = prompt_goal()?;
    let sex = prompt_sex()?;
    let age = age_or_default(prompt_count("Age", DEFAULT_AGE, u32::MAX)?);
    let height_cm = prompt_height_cm()?;
    let weight_kg = prompt_weight_kg()?;

    let lifting_days = prompt_count("Lifting days per week (0-7)", 4, 7)?;
    let daily_steps = prompt_count("Average daily steps", 8000, u32::MAX)?;

    Ok(UserStats {
        sex,
        age,
        height_cm,
        weight_kg,
        lifting_days,
        daily_steps,
        goal,
        aggression,
    })
}

/// Resolve a recipe name against the catalog, asking the user to confirm
/// fuzzy matches.
pub fn prompt_recipe<'a>(catalog: &'a RecipeCatalog, query: &str) -> Result<&'a RecipeCatalogEntry> {
    if let Some(entry) = catalog.find_by_name(query) {
        return Ok(entry);
    }

    let candidates = catalog.fuzzy_matches(query);

    match candidates.as_slice() {
        [] => Err(PlannerError::RecipeNotFound(query.to_string())),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only.name))
                .default(true)
                .interact()?;
            if confirm {
                Ok(*only)
            } else {
                Err(PlannerError::RecipeNotFound(query.to_string()))
            }
        }
        many => {
            let options: Vec<&str> = many.iter().take(5).map(|e| e.name.as_str()).collect();
            let mut selection_options = options.clone();
            selection_options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            many.get(selection)
                .filter(|_| selection < options.len())
                .copied()
                .ok_or_else(|| PlannerError::RecipeNotFound(query.to_string()))
        }
    }
}

pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
