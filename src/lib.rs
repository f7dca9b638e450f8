//! Depth-first traversal of a flat graph array with constant auxiliary memory.
//!
//! A graph with `n` vertices and `m` directed edges lives in one `[i64]` of
//! length `n + m + 2` (see [`layout`]). [`traverse`] walks it without a stack
//! or a visited set by permuting the array in place, and hands the array back
//! unchanged.

pub mod cli;
pub mod codec;
pub mod errors;
pub mod generator;
pub mod layout;
pub mod linear;
pub mod order;
pub mod traversal;
pub mod validate;

pub use crate::errors::{DfsError, OrderViolation};
pub use crate::generator::{GeneratorConfig, generate_graph};
pub use crate::linear::dfs_linear_memory;
pub use crate::order::{EventRecorder, TraversalEvent, check_dfs_order, record_events};
pub use crate::traversal::{FnCallbacks, TraversalCallbacks, traverse, traverse_with};
pub use crate::validate::{GraphSummary, validate_sorted};
