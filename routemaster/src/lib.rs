//! # RouteMaster
//!
//! A small in-memory routing primitive: a mutable directed weighted graph
//! paired with a single-source shortest-path engine (Dijkstra). Build a graph
//! incrementally with `add_node` / `add_edge`, then query the minimum-weight
//! path between any two nodes.
//!
//! ## Design Principles
//!
//! - **Owned graphs**: `Graph` is a plain value with no hidden globals; any
//!   number of independent graphs may coexist.
//! - **Fresh run state per query**: each shortest-path computation builds its
//!   own distance and predecessor maps, owned by the returned
//!   [`ShortestPathTree`]. Nothing is carried between queries.
//! - **Non-negative weights by construction**: weights are `u64`, so the
//!   algorithm's precondition cannot be violated through the API.
//!
//! ## Main Modules
//!
//! - [`graph`]: `Graph`, `Edge`, and the `snapshot` display view — build and
//!   inspect the graph.
//! - [`route`]: `ShortestPathTree` and `Route` — single-source computation
//!   and path reconstruction.
//!
//! ## Quick Start
//!
//! ```rust
//! use routemaster::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 4);
//! graph.add_edge("A", "C", 1);
//! graph.add_edge("C", "B", 1);
//!
//! let route = graph.route("A", "B").unwrap().unwrap();
//! assert_eq!(route.total_distance, 2);
//! assert_eq!(route.path, vec!["A", "C", "B"]);
//! ```

pub mod error;
pub mod graph;
pub mod route;

pub use error::RouteError;
pub use graph::{Edge, EdgeSnapshot, Graph, NodeSnapshot};
pub use route::{Route, ShortestPathTree};
