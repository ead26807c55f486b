use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::RecipeCatalogEntry;
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// Read-only recipe catalog.
///
/// Keeps catalog order, which decides ties during meal selection.
pub struct RecipeCatalog {
    entries: Vec<RecipeCatalogEntry>,
}

impl RecipeCatalog {
    /// Build a catalog with unique ids.
    ///
    /// A repeated id replaces the earlier definition in place (last wins).
    pub fn new(entries: Vec<RecipeCatalogEntry>) -> Self {
        let mut positions: HashMap<u32, usize> = HashMap::new();
        let mut unique: Vec<RecipeCatalogEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            match positions.get(&entry.id) {
                Some(&pos) => {
                    log::warn!(
                        "Duplicate recipe id {}: '{}' replaces '{}'",
                        entry.id,
                        entry.name,
                        unique[pos].name
                    );
                    unique[pos] = entry;
                }
                None => {
                    positions.insert(entry.id, unique.len());
                    unique.push(entry);
                }
            }
        }

        Self { entries: unique }
    }

    /// All entries in catalog order, for passing to the generator.
    pub fn entries(&self) -> &[RecipeCatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&RecipeCatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Case-insensitive exact name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&RecipeCatalogEntry> {
        let needle = name.trim().to_lowercase();
        self.entries.iter().find(|e| e.name.to_lowercase() == needle)
    }

    /// Like `find_by_name` but returns an error when nothing matches.
    pub fn require_by_name(&self, name: &str) -> Result<&RecipeCatalogEntry> {
        self.find_by_name(name)
            .ok_or_else(|| PlannerError::RecipeNotFound(name.to_string()))
    }

    /// Entries whose names are similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str) -> Vec<&RecipeCatalogEntry> {
        let query = query.trim().to_lowercase();
        let mut scored: Vec<(&RecipeCatalogEntry, f64)> = self
            .entries
            .iter()
            .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(e, _)| e).collect()
    }

    /// Entries eligible for automatic generation.
    pub fn homemade(&self) -> Vec<&RecipeCatalogEntry> {
        self.entries.iter().filter(|e| e.is_homemade()).collect()
    }

    /// Entries that fail basic validation.
    pub fn invalid_entries(&self) -> Vec<&RecipeCatalogEntry> {
        self.entries.iter().filter(|e| !e.is_valid()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
