use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::MappingStore;
use crate::gesture::MappingRule;

pub const DEFAULT_MAPPINGS_FILE: &str = "gesture_mappings.json";

/// Reads mapping rules from a `{"mappings": [...]}` JSON file
pub struct JsonMappingStore {
    path: PathBuf,
}

impl JsonMappingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, surfacing any failure
    pub fn read_rules(&self) -> Result<Vec<MappingRule>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read mappings from {:?}", self.path))?;
        parse_mappings(&json)
    }
}

impl Default for JsonMappingStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAPPINGS_FILE)
    }
}

impl MappingStore for JsonMappingStore {
    fn load(&self) -> Vec<MappingRule> {
        match self.read_rules() {
            Ok(rules) => {
                info!("Loaded {} gesture mappings from {:?}", rules.len(), self.path);
                rules
            }
            Err(e) => {
                warn!("{:#}", e);
                Vec::new()
            }
        }
    }
}

/// Parse mapping-file JSON.
///
/// A missing `mappings` key yields no rules. Entries that do not describe a
/// valid rule are skipped with a warning; the rest keep their order.
pub fn parse_mappings(json: &str) -> Result<Vec<MappingRule>> {
    let root: Value = serde_json::from_str(json).context("Failed to parse mappings JSON")?;

    let Some(entries) = root.get("mappings").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<MappingRule>(entry.clone()) {
            Ok(rule) => rules.push(rule),
            Err(e) => warn!("Skipping mapping #{}: {}", idx, e),
        }
    }

    Ok(rules)
}
