// Rescue rules
//
// Table of village name -> item names that must be in the bag before that
// village can be rescued. Villages without an entry can always be rescued.

use crate::inventory::Bag;
use crate::seed::RequirementSeed;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RescueRules {
    requirements: HashMap<String, Vec<String>>,
}

impl RescueRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from seed requirements
    ///
    /// Repeated item names are dropped; two entries for the same village
    /// are merged.
    pub fn from_seed(seeds: &[RequirementSeed]) -> Self {
        let mut rules = Self::new();
        for seed in seeds {
            rules.require(&seed.village, seed.items.iter().map(String::as_str));
        }
        rules
    }

    /// Adds required items for a village
    pub fn require<'a>(&mut self, village: &str, items: impl IntoIterator<Item = &'a str>) {
        let required = self.requirements.entry(village.to_string()).or_default();
        for item in items {
            if !required.iter().any(|existing| existing == item) {
                required.push(item.to_string());
            }
        }
    }

    /// Item names required for `village`, in declaration order
    pub fn requirements_for(&self, village: &str) -> &[String] {
        self.requirements
            .get(village)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Required items for `village` that the bag doesn't currently hold
    pub fn missing_for(&self, village: &str, bag: &Bag) -> Vec<String> {
        self.requirements_for(village)
            .iter()
            .filter(|name| !bag.contains(name))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.values().all(Vec::is_empty)
    }
}
