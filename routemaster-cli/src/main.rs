//! routemaster binary: interactive routing shell over stdin, or batch mode
//! with `--script`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "routemaster")]
#[command(about = "Weighted-graph routing shell — add nodes and edges, query shortest paths")]
struct Args {
    /// Read commands from FILE instead of stdin, then exit
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Emit one JSON object per reply instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let result = match &args.script {
        Some(path) => {
            let file = File::open(path)?;
            routemaster_cli::run(BufReader::new(file), &mut io::stdout(), args.json)
        }
        None => {
            let stdin = io::stdin();
            routemaster_cli::run(stdin.lock(), &mut io::stdout(), args.json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
