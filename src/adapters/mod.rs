//! Adapters layer: Concrete implementations of ports.
//!
//! - `tree`: exported decision tree loaded from JSON

pub mod tree;

pub use tree::{DecisionTreeModel, ModelError};
