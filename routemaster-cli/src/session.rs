//! Shell session: owns the graph and executes parsed commands.
//!
//! Routing errors are rendered into the reply, never propagated — the shell
//! keeps running whatever the user types. In JSON mode every reply is a
//! single JSON object per line.

use routemaster::Graph;
use serde_json::json;

use crate::command::Command;

/// What the shell should do with an executed command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this and read the next command.
    Message(String),
    /// Leave the loop.
    Quit,
}

/// One shell session: a graph plus the output mode.
pub struct Session {
    graph: Graph,
    json: bool,
}

impl Session {
    pub fn new(json: bool) -> Self {
        Self {
            graph: Graph::new(),
            json,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Executes one command against the graph and renders the reply.
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::AddNode { name } => {
                self.graph.add_node(name.as_str());
                self.confirm(format!("Added node {}.", name))
            }
            Command::AddEdge {
                source,
                target,
                weight,
            } => {
                self.graph.add_edge(source.as_str(), target.as_str(), weight);
                self.confirm(format!("Added edge {} -> {} ({}).", source, target, weight))
            }
            Command::Route {
                source,
                destination,
            } => self.route(&source, &destination),
            Command::Show => Reply::Message(self.render_graph()),
            Command::Help => Reply::Message(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn confirm(&self, message: String) -> Reply {
        if self.json {
            Reply::Message(
                json!({
                    "ok": true,
                    "nodes": self.graph.node_count(),
                    "edges": self.graph.edge_count(),
                })
                .to_string(),
            )
        } else {
            Reply::Message(message)
        }
    }

    fn route(&self, source: &str, destination: &str) -> Reply {
        match self.graph.route(source, destination) {
            Ok(Some(route)) => Reply::Message(if self.json {
                json!({
                    "source": source,
                    "destination": destination,
                    "found": true,
                    "total_distance": route.total_distance,
                    "path": route.path,
                })
                .to_string()
            } else {
                format!(
                    "Shortest path from {} to {}:\nTotal Distance: {}\nPath: {}",
                    source,
                    destination,
                    route.total_distance,
                    route.path.join(" -> ")
                )
            }),
            Ok(None) => Reply::Message(if self.json {
                json!({
                    "source": source,
                    "destination": destination,
                    "found": false,
                })
                .to_string()
            } else {
                format!(
                    "Shortest path from {} to {}:\nNo path found.",
                    source, destination
                )
            }),
            Err(err) => Reply::Message(if self.json {
                json!({ "error": err.to_string() }).to_string()
            } else {
                format!("Error: {}", err)
            }),
        }
    }

    fn render_graph(&self) -> String {
        let snapshot = self.graph.snapshot();
        if self.json {
            return serde_json::to_string(&snapshot).unwrap_or_else(|_| "[]".to_string());
        }
        if snapshot.is_empty() {
            return "Graph is empty.".to_string();
        }
        let mut out = String::from("Graph:");
        for node in snapshot {
            let edges: Vec<String> = node
                .edges
                .iter()
                .map(|e| format!("{}({})", e.target, e.weight))
                .collect();
            out.push('\n');
            out.push_str(&node.name);
            out.push_str(" -> ");
            out.push_str(&edges.join(", "));
        }
        out
    }
}

const HELP: &str = "\
Commands:
  node <NAME>               add a node
  edge <FROM> <TO> <WEIGHT> add or update a directed edge
  route <FROM> <TO>         shortest path between two nodes
  graph                     display the current graph
  help                      this message
  quit                      leave the shell";
