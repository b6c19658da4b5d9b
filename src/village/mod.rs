// Village module
//
// - village.rs: a named source of items
// - queue.rs: the rescue route, processed front to back

pub mod queue;
pub mod village;

pub use queue::VillageQueue;
pub use village::Village;
