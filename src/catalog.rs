//! Authoritative model-number table.
//!
//! Maps human-readable descriptions (`"9.9 ELH FourStroke"`) to manufacturer
//! model numbers. The table is built once, then only read: there is no
//! mutating API, so a catalog can be shared freely across threads by
//! reference.
//!
//! Lookups try the exact string first, then one normalization pass
//! (whitespace runs collapsed, trimmed, uppercased). There is no fuzzy
//! matching; a near miss is a miss.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

const BUILTIN_TABLE: &str = include_str!("../data/mercury_models.json");

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMapping {
    pub description: String,
    pub model_number: String,
}

#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    entries: Vec<ModelMapping>,
    by_description: HashMap<String, usize>,
    by_model_number: HashMap<String, usize>,
    by_description_normalized: HashMap<String, usize>,
    by_model_number_normalized: HashMap<String, usize>,
}

impl ModelCatalog {
    /// The table bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_TABLE)
    }

    /// Load a JSON array of `{ "description": .., "modelNumber": .. }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<ModelMapping> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }

    /// Build both indexes. Exact duplicates on either side are rejected;
    /// entries that only collide after normalization keep the first one for
    /// normalized lookups.
    pub fn from_entries(entries: impl IntoIterator<Item = ModelMapping>) -> Result<Self> {
        let mut catalog = ModelCatalog::default();

        for (index, entry) in entries.into_iter().enumerate() {
            if entry.description.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "description" });
            }
            if entry.model_number.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "modelNumber" });
            }

            match catalog.by_description.entry(entry.description.clone()) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateDescription(entry.description)),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
            match catalog.by_model_number.entry(entry.model_number.clone()) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateModelNumber(entry.model_number)),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }

            insert_normalized(&mut catalog.by_description_normalized, &entry.description, index);
            insert_normalized(&mut catalog.by_model_number_normalized, &entry.model_number, index);
            catalog.entries.push(entry);
        }

        log::debug!("model table loaded with {} entries", catalog.entries.len());
        Ok(catalog)
    }

    /// Model number for a description.
    pub fn model_number_for(&self, description: &str) -> Option<&str> {
        lookup(&self.by_description, &self.by_description_normalized, description)
            .map(|i| self.entries[i].model_number.as_str())
    }

    /// Description for a model number.
    pub fn description_for(&self, model_number: &str) -> Option<&str> {
        lookup(&self.by_model_number, &self.by_model_number_normalized, model_number)
            .map(|i| self.entries[i].description.as_str())
    }

    pub fn contains_model_number(&self, model_number: &str) -> bool {
        self.description_for(model_number).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelMapping> {
        self.entries.iter()
    }
}

fn lookup(exact: &HashMap<String, usize>, normalized: &HashMap<String, usize>, key: &str) -> Option<usize> {
    exact.get(key).or_else(|| normalized.get(&normalize_key(key))).copied()
}

fn insert_normalized(index: &mut HashMap<String, usize>, key: &str, position: usize) {
    match index.entry(normalize_key(key)) {
        Entry::Occupied(slot) => {
            log::warn!("model table: {key:?} collides with entry {} after normalization", slot.get());
        }
        Entry::Vacant(slot) => {
            slot.insert(position);
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}
