//! An ordered, self-balancing binary search tree of integer keys
//! with level-order inspection.
//!
//! The [`AvlTree`] keeps its keys unique and its height balanced
//! after every insertion and removal. The [`AvlTree::levels`]
//! iterator walks the tree breadth-first and reports each key
//! together with its balance factor, which is what the interactive
//! console renders.

mod tree;

pub use tree::{AvlTree, Levels};
