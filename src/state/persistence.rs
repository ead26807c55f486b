use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MealPlanRecord, RecipeCatalogEntry, ShoppingItem};
use crate::state::RecipeCatalog;

/// Load a recipe catalog from a JSON array.
///
/// Repeated ids are collapsed (last definition wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<RecipeCatalog> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<RecipeCatalogEntry> = serde_json::from_str(&content)?;
    Ok(RecipeCatalog::new(entries))
}

/// Save catalog entries as a pretty-printed JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, entries: &[RecipeCatalogEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlanRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_plan<P: AsRef<Path>>(path: P, record: &MealPlanRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a shopping list as CSV with a `name,amount,count` header.
pub fn write_shopping_csv<P: AsRef<Path>>(path: P, items: &[ShoppingItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "amount", "count"])?;
    for item in items {
        let count = item.count.to_string();
        wtr.write_record([item.name.as_str(), item.amount.as_str(), count.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeneratedMealPlan, MacroTargets, RotationType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog_dedupes() {
        let json = r#"[
            {"id": 1, "name": "Oats", "macros": {"calories": 400, "protein": 30, "carbs": 50, "fat": 8}, "source": "homemade"},
            {"id": 2, "name": "Eggs", "macros": {"calories": 300, "protein": 25, "carbs": 2, "fat": 20}, "source": "homemade"},
            {"id": 1, "name": "Protein Oats", "macros": {"calories": 450, "protein": 40, "carbs": 50, "fat": 8}, "source": "homemade"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].name, "Protein Oats");
    }

    #[test]
    fn test_load_catalog_rejects_bad_source() {
        let json = r#"[
            {"id": 1, "name": "Oats", "macros": {"calories": 400, "protein": 30, "carbs": 50, "fat": 8}, "source": "restaurant"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(crate::error::PlannerError::Json(_))
        ));
    }

    #[test]
    fn test_plan_save_and_load() {
        let record = MealPlanRecord {
            name: "Week 1".to_string(),
            rotation: RotationType::AbRotation,
            targets: MacroTargets {
                calories: 2200,
                protein: 160,
                carbs: 230,
                fat: 70,
                fiber: 31,
                water: 2.8,
            },
            plan: GeneratedMealPlan::default(),
        };

        let file = NamedTempFile::new().unwrap();
        save_plan(file.path(), &record).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("\"ab_rotation\""));
        assert!(content.contains("\"day_a\""));

        let reloaded = load_plan(file.path()).unwrap();
        assert_eq!(reloaded, record);
    }

    #[test]
    fn test_write_shopping_csv() {
        let items = vec![
            ShoppingItem {
                name: "Rice".to_string(),
                amount: "150g".to_string(),
                count: 7,
            },
            ShoppingItem {
                name: "Chicken, thigh".to_string(),
                amount: "200g".to_string(),
                count: 4,
            },
        ];

        let file = NamedTempFile::new().unwrap();
        write_shopping_csv(file.path(), &items).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "name,amount,count");
        assert_eq!(lines[1], "Rice,150g,7");
        assert_eq!(lines[2], "\"Chicken, thigh\",200g,4");
    }
}
