//! Seed data types
//!
//! The seed describes a whole quest: the villages in route order, the
//! items each one holds, the bag size and the rescue requirements.
//! It is read from JSON with Serde.

use crate::item::Item;
use crate::village::Village;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Minimum number of items every village must start with
pub const MIN_ITEMS_PER_VILLAGE: usize = 3;

/// The root seed structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub bag_capacity: usize,
    pub villages: Vec<VillageSeed>,
    #[serde(default)]
    pub requirements: Vec<RequirementSeed>,
}

/// One village and its items, in route order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageSeed {
    pub name: String,
    pub items: Vec<Item>,
}

/// Items that must be in the bag before `village` can be rescued
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSeed {
    pub village: String,
    pub items: Vec<String>,
}

/// Error types for seed loading and validation
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Could not read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Bag capacity must be at least 1")]
    ZeroCapacity,

    #[error("Seed has no villages")]
    NoVillages,

    #[error("Village '{village}' has {count} items, needs at least {min}", min = MIN_ITEMS_PER_VILLAGE)]
    TooFewItems { village: String, count: usize },

    #[error("Village '{0}' appears more than once")]
    DuplicateVillage(String),

    #[error("Requirement refers to unknown village '{0}'")]
    UnknownRequirementVillage(String),
}

impl SeedData {
    /// Parses seed data from a JSON string and validates it
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Serializes the seed (pretty format, for hand editing)
    pub fn to_json_pretty(&self) -> Result<String, SeedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the invariants the game relies on
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.bag_capacity == 0 {
            return Err(SeedError::ZeroCapacity);
        }
        if self.villages.is_empty() {
            return Err(SeedError::NoVillages);
        }

        let mut seen = HashSet::new();
        for village in &self.villages {
            if village.items.len() < MIN_ITEMS_PER_VILLAGE {
                return Err(SeedError::TooFewItems {
                    village: village.name.clone(),
                    count: village.items.len(),
                });
            }
            if !seen.insert(village.name.as_str()) {
                return Err(SeedError::DuplicateVillage(village.name.clone()));
            }
        }

        for requirement in &self.requirements {
            if !seen.contains(requirement.village.as_str()) {
                return Err(SeedError::UnknownRequirementVillage(requirement.village.clone()));
            }
        }

        Ok(())
    }

    /// Builds the village roster in route order
    pub fn build_villages(&self) -> Vec<Village> {
        self.villages
            .iter()
            .map(|seed| Village::with_items(seed.name.clone(), seed.items.iter().cloned()))
            .collect()
    }
}

impl VillageSeed {
    pub fn new(name: impl Into<String>, items: &[(&str, u32)]) -> Self {
        VillageSeed {
            name: name.into(),
            items: items
                .iter()
                .map(|(item, score)| Item::new(*item, *score))
                .collect(),
        }
    }
}

impl RequirementSeed {
    pub fn new(village: impl Into<String>, items: &[&str]) -> Self {
        RequirementSeed {
            village: village.into(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}
