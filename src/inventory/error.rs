use crate::item::Item;
use thiserror::Error;

/// Errors that can occur during bag operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Bag was created without any room
    #[error("Bag capacity must be at least 1")]
    ZeroCapacity,

    /// Bag is full; the rejected item is handed back to the caller
    #[error("Bag is full ({capacity}/{capacity}), could not collect {}", .item.name())]
    BagFull { item: Item, capacity: usize },
}

impl InventoryError {
    /// Takes back the item a full bag refused, if any
    pub fn into_rejected_item(self) -> Option<Item> {
        match self {
            InventoryError::BagFull { item, .. } => Some(item),
            InventoryError::ZeroCapacity => None,
        }
    }
}
