use crate::item::Item;
use serde::{Deserialize, Serialize};

/// A village on the quest route
///
/// Each village holds the items the player collects when it is rescued.
/// Items are only ever appended while the world is being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    name: String,
    items: Vec<Item>,
}

impl Village {
    /// Creates a village with no items
    pub fn new(name: impl Into<String>) -> Self {
        Village {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Creates a village and fills it with `items` in order
    pub fn with_items(name: impl Into<String>, items: impl IntoIterator<Item = Item>) -> Self {
        let mut village = Self::new(name);
        for item in items {
            village.add_item(item);
        }
        village
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an item to the end of the village's list
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    /// Returns true if any item in this village is called `query`, ignoring case
    pub fn has_item_ignore_case(&self, query: &str) -> bool {
        self.items.iter().any(|item| item.matches_ignore_case(query))
    }
}
