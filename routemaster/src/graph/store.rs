//! The mutable graph value: adjacency lists keyed by node name.
//!
//! Nodes are identified by case-sensitive names; edges are directed, owned by
//! their source node, and unique per (source, target) pair. The graph is a
//! plain owned value — construct as many as needed, mutate only through
//! `add_node` / `add_edge`.

use std::collections::HashMap;

/// A directed edge in an adjacency list.
///
/// Weights are non-negative by construction; Dijkstra's precondition cannot
/// be violated through this API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: String,
    pub weight: u64,
}

/// In-memory directed weighted graph.
///
/// Adjacency lists preserve edge insertion order, and `order` preserves node
/// insertion order, so [`Graph::snapshot`] output is deterministic.
///
/// **Interaction**: build with `add_node` / `add_edge`, query with
/// `Graph::route` or `Graph::shortest_paths` (see the `route` module).
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
    /// Node names in insertion order. Invariant: same key set as `adjacency`.
    order: Vec<String>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Adds a node with an empty outgoing edge set.
    ///
    /// Idempotent: adding an existing node leaves the graph unchanged.
    pub fn add_node(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.adjacency.contains_key(&name) {
            self.order.push(name.clone());
            self.adjacency.insert(name, Vec::new());
        }
        self
    }

    /// Adds or updates the directed edge `source → target`.
    ///
    /// Both endpoints become nodes if they were not already present. At most
    /// one edge exists per (source, target) pair; a repeated call overwrites
    /// the weight while keeping the edge's insertion position.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: u64,
    ) -> &mut Self {
        let source = source.into();
        let target = target.into();
        self.add_node(source.clone());
        self.add_node(target.clone());

        if let Some(edges) = self.adjacency.get_mut(&source) {
            match edges.iter_mut().find(|e| e.target == target) {
                Some(edge) => edge.weight = weight,
                None => edges.push(Edge { target, weight }),
            }
        }
        self
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// Returns an empty slice when `node` has no outgoing edges or is not in
    /// the graph.
    pub fn neighbors(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` is a node of the graph.
    pub fn has_node(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Node names in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
