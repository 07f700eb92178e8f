//! Graph store: nodes + directed weighted edges, built incrementally.
//!
//! Add nodes with `add_node`, connect them with `add_edge(source, target,
//! weight)`, then inspect via `neighbors` / `snapshot` or query shortest
//! paths through the [`crate::route`] module.

mod snapshot;
mod store;

pub use snapshot::{EdgeSnapshot, NodeSnapshot};
pub use store::{Edge, Graph};
