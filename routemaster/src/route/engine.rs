//! Dijkstra computation and path reconstruction.
//!
//! Each query builds its own run state (distance map, predecessor map,
//! frontier heap); the maps end up owned by the returned tree and nothing is
//! shared between queries. The frontier is a binary min-heap with lazy
//! deletion: a node may be pushed more than once, and stale entries are
//! skipped when popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::RouteError;
use crate::graph::Graph;
use crate::route::logging;

/// A reconstructed shortest path.
///
/// `path` runs from source to destination inclusive; a route from a node to
/// itself is `[node]` with distance 0. The sum of edge weights along `path`
/// equals `total_distance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub total_distance: u64,
    pub path: Vec<String>,
}

/// Result of a full single-source run: final distances and predecessor links
/// for every node reachable from the source.
///
/// Nodes absent from the tree are unreachable. Where several paths tie on
/// total weight, which one the predecessor links record is arbitrary;
/// distances are always exact.
pub struct ShortestPathTree {
    source: String,
    distances: HashMap<String, u64>,
    predecessors: HashMap<String, String>,
}

impl ShortestPathTree {
    /// The node this tree was computed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Final distance from the source to `node`, or `None` if unreachable.
    pub fn distance_to(&self, node: &str) -> Option<u64> {
        self.distances.get(node).copied()
    }

    /// Reconstructs the path from the source to `destination` by walking
    /// predecessor links back and reversing. `None` if unreachable.
    pub fn route_to(&self, destination: &str) -> Option<Route> {
        let total_distance = self.distance_to(destination)?;

        let mut path = vec![destination.to_string()];
        let mut current = destination;
        while current != self.source {
            let pred = self.predecessors.get(current)?;
            path.push(pred.clone());
            current = pred;
        }
        path.reverse();

        Some(Route {
            total_distance,
            path,
        })
    }
}

impl Graph {
    /// Computes shortest distances from `source` to every reachable node.
    ///
    /// Returns `EmptyGraph` if no nodes exist, `UnknownNode` if `source` is
    /// not in the graph. Runs until the frontier is exhausted; unreachable
    /// nodes are simply absent from the resulting tree.
    pub fn shortest_paths(&self, source: &str) -> Result<ShortestPathTree, RouteError> {
        if self.is_empty() {
            return Err(RouteError::EmptyGraph);
        }
        if !self.has_node(source) {
            return Err(RouteError::UnknownNode(source.to_string()));
        }

        let mut distances: HashMap<String, u64> = HashMap::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        let mut frontier: BinaryHeap<Reverse<(u64, String)>> = BinaryHeap::new();

        distances.insert(source.to_string(), 0);
        frontier.push(Reverse((0, source.to_string())));

        while let Some(Reverse((dist, node))) = frontier.pop() {
            // Stale entry: the node was re-pushed with a shorter tentative
            // distance and already settled.
            if is_stale(&distances, &node, dist) {
                continue;
            }

            for edge in self.neighbors(&node) {
                let candidate = dist.saturating_add(edge.weight);
                let improved = distances
                    .get(&edge.target)
                    .map_or(true, |&best| candidate < best);
                if improved {
                    distances.insert(edge.target.clone(), candidate);
                    predecessors.insert(edge.target.clone(), node.clone());
                    frontier.push(Reverse((candidate, edge.target.clone())));
                }
            }
        }

        Ok(ShortestPathTree {
            source: source.to_string(),
            distances,
            predecessors,
        })
    }

    /// One-shot query: validates both endpoints, runs the engine, and
    /// reconstructs the path to `destination`.
    ///
    /// - `Err(..)` — empty graph or an endpoint is not a known node; no
    ///   computation is performed.
    /// - `Ok(None)` — both endpoints known, destination unreachable.
    /// - `Ok(Some(route))` — path and total distance, source to destination
    ///   inclusive.
    pub fn route(&self, source: &str, destination: &str) -> Result<Option<Route>, RouteError> {
        logging::log_query_start(source, destination);

        if !self.is_empty() && !self.has_node(destination) {
            let err = RouteError::UnknownNode(destination.to_string());
            logging::log_query_error(&err);
            return Err(err);
        }

        let tree = match self.shortest_paths(source) {
            Ok(tree) => tree,
            Err(err) => {
                logging::log_query_error(&err);
                return Err(err);
            }
        };

        let route = tree.route_to(destination);
        logging::log_query_complete(source, destination, route.as_ref());
        Ok(route)
    }
}

fn is_stale(distances: &HashMap<String, u64>, node: &str, dist: u64) -> bool {
    distances.get(node).is_some_and(|&best| dist > best)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes {A,B,C}; edges A→B(4), A→C(1), C→B(1). The two-hop detour wins.
    fn make_triangle() -> Graph {
        let mut g = Graph::new();
        g.add_edge("A", "B", 4);
        g.add_edge("A", "C", 1);
        g.add_edge("C", "B", 1);
        g
    }

    #[test]
    fn detour_beats_direct_edge() {
        let g = make_triangle();
        let route = g.route("A", "B").unwrap().unwrap();
        assert_eq!(route.total_distance, 2);
        assert_eq!(route.path, vec!["A", "C", "B"]);
    }

    #[test]
    fn route_to_self_is_zero_length() {
        let g = make_triangle();
        let route = g.route("A", "A").unwrap().unwrap();
        assert_eq!(route.total_distance, 0);
        assert_eq!(route.path, vec!["A"]);
    }

    #[test]
    fn no_edges_means_no_path() {
        let mut g = Graph::new();
        g.add_node("A");
        g.add_node("B");
        assert_eq!(g.route("A", "B").unwrap(), None);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let g = make_triangle();
        match g.route("X", "A") {
            Err(RouteError::UnknownNode(name)) => assert_eq!(name, "X"),
            other => panic!("expected UnknownNode, got {:?}", other),
        }
    }

    #[test]
    fn unknown_destination_is_rejected() {
        let g = make_triangle();
        match g.route("A", "X") {
            Err(RouteError::UnknownNode(name)) => assert_eq!(name, "X"),
            other => panic!("expected UnknownNode, got {:?}", other),
        }
    }

    #[test]
    fn empty_graph_is_rejected() {
        let g = Graph::new();
        assert_eq!(g.route("A", "B"), Err(RouteError::EmptyGraph));
    }

    #[test]
    fn edges_are_directed() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        assert!(g.route("A", "B").unwrap().is_some());
        assert_eq!(g.route("B", "A").unwrap(), None);
    }

    #[test]
    fn tree_exposes_all_reachable_distances() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 2);
        g.add_edge("B", "C", 3);
        g.add_node("Z");

        let tree = g.shortest_paths("A").unwrap();
        assert_eq!(tree.source(), "A");
        assert_eq!(tree.distance_to("A"), Some(0));
        assert_eq!(tree.distance_to("B"), Some(2));
        assert_eq!(tree.distance_to("C"), Some(5));
        assert_eq!(tree.distance_to("Z"), None);
        assert!(tree.route_to("Z").is_none());
    }

    #[test]
    fn longer_hop_count_can_still_be_shorter() {
        // A→E direct 10 vs A→B→C→D→E at 1 each.
        let mut g = Graph::new();
        g.add_edge("A", "E", 10);
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);
        g.add_edge("C", "D", 1);
        g.add_edge("D", "E", 1);

        let route = g.route("A", "E").unwrap().unwrap();
        assert_eq!(route.total_distance, 4);
        assert_eq!(route.path, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn zero_weight_edges_are_traversed() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 0);
        g.add_edge("B", "C", 0);
        let route = g.route("A", "C").unwrap().unwrap();
        assert_eq!(route.total_distance, 0);
        assert_eq!(route.path.len(), 3);
    }

    #[test]
    fn cycle_does_not_loop_forever() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);
        g.add_edge("C", "A", 1);
        let route = g.route("A", "C").unwrap().unwrap();
        assert_eq!(route.total_distance, 2);
    }

    #[test]
    fn self_loop_is_ignored_for_shorter_routes() {
        let mut g = Graph::new();
        g.add_edge("A", "A", 5);
        g.add_edge("A", "B", 1);
        let route = g.route("A", "A").unwrap().unwrap();
        assert_eq!(route.total_distance, 0);
        let route = g.route("A", "B").unwrap().unwrap();
        assert_eq!(route.total_distance, 1);
    }

    #[test]
    fn queries_do_not_share_run_state() {
        // Two consecutive queries from different sources; the second must
        // not see distances from the first.
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);

        let first = g.route("A", "C").unwrap().unwrap();
        assert_eq!(first.total_distance, 2);

        let second = g.route("B", "C").unwrap().unwrap();
        assert_eq!(second.total_distance, 1);
        assert_eq!(second.path, vec!["B", "C"]);

        // And the original query still answers the same.
        let again = g.route("A", "C").unwrap().unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn upserted_weight_is_used() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 9);
        g.add_edge("A", "B", 2);
        let route = g.route("A", "B").unwrap().unwrap();
        assert_eq!(route.total_distance, 2);
    }

    #[test]
    fn huge_weights_saturate_instead_of_wrapping() {
        let mut g = Graph::new();
        g.add_edge("A", "B", u64::MAX);
        g.add_edge("B", "C", u64::MAX);
        let route = g.route("A", "C").unwrap().unwrap();
        assert_eq!(route.total_distance, u64::MAX);
    }
}
