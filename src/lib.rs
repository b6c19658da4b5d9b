//! Village Rescue
//!
//! A small single-player quest: villages are rescued in order, each one
//! handing over items that go into a capacity-bounded bag. Some villages
//! only let you through if the bag already holds particular items.
//!
//! [`GameWorld`] is the whole game state; a front end builds one from
//! [`SeedData`] and calls its methods in response to player input.

pub mod game;
pub mod inventory;
pub mod item;
pub mod journal;
pub mod search;
pub mod seed;
pub mod village;

pub use game::{AdvanceOutcome, GameWorld, RescueError, RescueReport};
pub use inventory::Bag;
pub use item::Item;
pub use search::BinarySearchTree;
pub use seed::{SeedData, SeedError, SeedLoader};
pub use village::{Village, VillageQueue};
