// Item module
//
// Items are the only thing that moves through the game: villages hold them,
// the bag carries them and search indexes are built from them.

pub mod definition;

pub use definition::Item;
