//! Visible-graph model and slice assembly.

mod assemble;
mod types;

pub use assemble::assemble;
pub use types::{GraphEdge, GraphNode, VisibleGraph};
