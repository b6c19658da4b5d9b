//! Quest seed data
//!
//! This module describes how a game world is set up:
//! - JSON seed files (human-readable, hand-editable)
//! - A built-in seven-village quest used when no file is present
//! - Validation of the invariants the game relies on
//!
//! # Architecture
//!
//! - `types`: Seed data structures and error types
//! - `defaults`: The built-in quest
//! - `loader`: SeedLoader for locating and reading seed files
//!
//! # Example Usage
//!
//! ```ignore
//! let (seed, source) = SeedLoader::new().resolve(None)?;
//! let world = GameWorld::initialize(seed)?;
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use loader::{SeedLoader, SeedSource};
pub use types::*;
