//! Shortest-path engine: single-source Dijkstra over a graph snapshot.
//!
//! `Graph::shortest_paths(source)` runs the full computation and returns a
//! [`ShortestPathTree`]; `Graph::route(source, destination)` is the one-shot
//! query that also reconstructs the path.

mod engine;
pub mod logging;

pub use engine::{Route, ShortestPathTree};
