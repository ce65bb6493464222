//! In-memory word-frequency dictionary over a 27-symbol prefix tree.
//!
//! Words are built from lowercase ASCII letters plus the apostrophe.
//! [`Dict`] tracks how many times each word has been inserted and
//! answers existence lookups, whole-tree statistics, ancestor-distance
//! queries between nodes, and greedy one-symbol continuation
//! suggestions for a prefix.
//!
//! The tree only grows; dropping the [`Dict`] releases every node.

pub mod alphabet;
mod dict;
mod error;

pub use dict::{Dict, NodeId};
pub use error::DictError;
