//! District gazetteer: the list of known `Province-County-Neighborhood` names
//! behind search-box autocomplete. Independent of geocoding.

use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_RESULTS: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("cannot read district list: {0}")]
    Io(#[from] std::io::Error),
    #[error("district list is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    districts: Vec<String>,
}

impl Gazetteer {
    pub fn new(districts: Vec<String>) -> Self {
        Self { districts }
    }

    /// Load a JSON array of district names.
    pub fn load(path: &Path) -> Result<Self, GazetteerError> {
        let data = fs::read_to_string(path)?;
        let districts: Vec<String> = serde_json::from_str(&data)?;
        Ok(Self::new(districts))
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// Every district containing `query` (trimmed, case-insensitive), in list order.
    fn matches<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + 'a {
        let needle = query.trim().to_lowercase();
        self.districts
            .iter()
            .filter(move |d| !needle.is_empty() && d.to_lowercase().contains(&needle))
            .map(String::as_str)
    }

    /// First `max` matches for `query`; empty for a blank query.
    pub fn search(&self, query: &str, max: usize) -> Vec<&str> {
        self.matches(query).take(max).collect()
    }
}
