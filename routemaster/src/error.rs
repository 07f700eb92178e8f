//! Routing error types.
//!
//! Returned by `Graph::route` and `Graph::shortest_paths` when a query names
//! an endpoint the graph does not know about.

use thiserror::Error;

/// Error raised when validating a shortest-path query.
///
/// Both endpoints must be present in the graph before any computation starts;
/// on violation the query aborts with no state touched. An unreachable
/// destination is not an error — it is reported as an absent route.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The named endpoint was never registered via `add_node` or `add_edge`.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A query was issued before any nodes exist.
    #[error("graph is empty: add nodes and edges before querying")]
    EmptyGraph,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display format of UnknownNode contains the node name.
    #[test]
    fn unknown_node_display_contains_name() {
        let err = RouteError::UnknownNode("X".to_string());
        let s = err.to_string();
        assert!(
            s.contains("unknown node"),
            "Display should contain 'unknown node': {}",
            s
        );
        assert!(s.contains('X'), "Display should contain the name: {}", s);
    }

    /// **Scenario**: Display format of EmptyGraph mentions the empty graph.
    #[test]
    fn empty_graph_display() {
        let s = RouteError::EmptyGraph.to_string();
        assert!(s.contains("empty"), "Display should mention empty: {}", s);
    }
}
