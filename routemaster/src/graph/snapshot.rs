//! Read-only display view of the graph.
//!
//! `Graph::snapshot` produces plain data structs a collaborator can render or
//! serialize; node and edge order follow insertion order, so output is
//! deterministic across runs.

use serde::Serialize;

use crate::graph::Graph;

/// One outgoing edge in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    pub target: String,
    pub weight: u64,
}

/// One node and its outgoing edges in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub name: String,
    pub edges: Vec<EdgeSnapshot>,
}

impl Graph {
    /// Read-only snapshot of every node and its outgoing edges, in insertion
    /// order.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.nodes()
            .map(|name| NodeSnapshot {
                name: name.to_string(),
                edges: self
                    .neighbors(name)
                    .iter()
                    .map(|e| EdgeSnapshot {
                        target: e.target.clone(),
                        weight: e.weight,
                    })
                    .collect(),
            })
            .collect()
    }
}
