// Inventory module
//
// This module provides the player's bag:
// - Bag: capacity-bounded stack with removal by name
// - InventoryError: why a bag operation was refused

pub mod bag;
pub mod error;

// Re-export main types
pub use bag::Bag;
pub use error::InventoryError;
