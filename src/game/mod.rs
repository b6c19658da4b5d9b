// Game module - quest state and the rules for moving through it
//
// This module contains:
// - world.rs: GameWorld struct, the single entry point for player actions
// - rules.rs: Data-driven rescue requirements per village
// - types.rs: Outcomes and errors returned by GameWorld actions

// Module declarations
pub mod rules;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use rules::RescueRules;
pub use types::*;
pub use world::GameWorld;
