//! Circuit analysis: validation, node graph and path finding.
//!
//! This module turns the flat component list from the parser into the
//! ordered branch-groups the layout planner draws. Everything here is pure
//! and works on borrowed component lists.

mod graph;
mod path;
mod types;
mod validate;

pub use graph::NodeGraph;
pub use path::find_path;
pub use types::*;
pub use validate::{validate_circuit, ValidationReport};
