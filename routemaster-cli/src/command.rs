//! Line-to-command parsing for the shell.
//!
//! One command per line, whitespace-separated. Blank lines and `#` comments
//! parse to nothing. Weight validation happens here, at the input boundary:
//! the library API only accepts `u64` weights, so anything non-numeric or
//! negative is rejected before it reaches the graph.

use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `node <NAME>` — add a node.
    AddNode { name: String },
    /// `edge <FROM> <TO> <WEIGHT>` — add or update a directed edge.
    AddEdge {
        source: String,
        target: String,
        weight: u64,
    },
    /// `route <FROM> <TO>` — shortest-path query.
    Route {
        source: String,
        destination: String,
    },
    /// `graph` — display the current graph.
    Show,
    /// `help` — list commands.
    Help,
    /// `quit` / `exit` — leave the shell.
    Quit,
}

/// Error when a line cannot be parsed into a [`Command`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// First word of the line is not a known command.
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// Known command with the wrong number of arguments.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// Edge weight that is not a non-negative integer.
    #[error("malformed weight: {0} (expected a non-negative integer)")]
    MalformedWeight(String),
}

/// Parses one input line. `Ok(None)` for blank lines and comments.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match (words[0], &words[1..]) {
        ("node", [name]) => Command::AddNode {
            name: (*name).to_string(),
        },
        ("node", _) => return Err(ParseError::Usage("node <NAME>")),

        ("edge", [source, target, weight]) => Command::AddEdge {
            source: (*source).to_string(),
            target: (*target).to_string(),
            weight: weight
                .parse()
                .map_err(|_| ParseError::MalformedWeight((*weight).to_string()))?,
        },
        ("edge", _) => return Err(ParseError::Usage("edge <FROM> <TO> <WEIGHT>")),

        ("route", [source, destination]) => Command::Route {
            source: (*source).to_string(),
            destination: (*destination).to_string(),
        },
        ("route", _) => return Err(ParseError::Usage("route <FROM> <TO>")),

        ("graph", []) => Command::Show,
        ("graph", _) => return Err(ParseError::Usage("graph")),

        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,

        (other, _) => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}
