// Search module
//
// Name-ordered binary search tree used for one-off item lookups.

pub mod bst;

pub use bst::BinarySearchTree;
