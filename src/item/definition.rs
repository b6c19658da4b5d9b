use serde::{Deserialize, Serialize};
use std::fmt;

/// A collectible item found in a village or carried in the bag
///
/// Items are plain values: once built they are never changed, and two
/// items with the same name are still distinct values (one may sit in a
/// village while a copy sits in the bag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, stored exactly as given (case preserved)
    name: String,

    /// Relative strength of the item (0 = no score)
    #[serde(default)]
    power_score: u32,
}

impl Item {
    /// Creates a new item
    pub fn new(name: impl Into<String>, power_score: u32) -> Self {
        Item {
            name: name.into(),
            power_score,
        }
    }

    /// Creates an item with the default power score of 0
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_score(&self) -> u32 {
        self.power_score
    }

    /// Returns a copy of this item whose name is lower-cased
    ///
    /// Search indexes are built from these copies so lookups ignore case.
    pub fn with_folded_name(&self) -> Item {
        Item {
            name: self.name.to_lowercase(),
            power_score: self.power_score,
        }
    }

    /// Returns true if the item's name equals `query`, ignoring case
    pub fn matches_ignore_case(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.power_score)
    }
}
