//! routemaster-cli library: command parsing and session logic for the shell.
//!
//! The binary stays thin; everything testable lives here. Feed command lines
//! (from stdin or a script file) through [`run`], which owns a [`Session`]
//! holding the graph for the life of the process.
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let script = "edge A B 4\nedge A C 1\nedge C B 1\nroute A B\n";
//! let mut output = Vec::new();
//! routemaster_cli::run(Cursor::new(script), &mut output, false).unwrap();
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("Total Distance: 2"));
//! ```

mod command;
mod run;
mod session;

pub use command::{parse, Command, ParseError};
pub use run::run;
pub use session::{Reply, Session};
