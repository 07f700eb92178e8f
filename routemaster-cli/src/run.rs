//! The shell loop: read lines, parse, execute, print.

use std::io::{self, BufRead, Write};

use serde_json::json;

use crate::command;
use crate::session::{Reply, Session};

/// Runs a session over `input` until EOF or a `quit` command.
///
/// Parse errors are reported on `output` and the loop continues; only I/O
/// failures abort.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, json: bool) -> io::Result<()> {
    let mut session = Session::new(json);

    for line in input.lines() {
        let line = line?;
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(cmd)) => match session.execute(cmd) {
                Reply::Message(message) => writeln!(output, "{}", message)?,
                Reply::Quit => break,
            },
            Err(err) => {
                if json {
                    writeln!(output, "{}", json!({ "error": err.to_string() }))?;
                } else {
                    writeln!(output, "Error: {}", err)?;
                }
            }
        }
    }
    Ok(())
}
