//! Command-line converter: reads one statement from a MySQL dump and prints
//! it as JSON on standard output.
//!
//! Diagnostics are written to standard error through `tracing`; set
//! `RUST_LOG` (for example `RUST_LOG=mysql2json=debug`) to see more.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use mysql2json::Error;
use mysql2json::json::{self, JsonStyle};
use mysql2json::sql::{Parser, Statement};
use tracing_subscriber::EnvFilter;

/// Convert a MySQL dump statement into JSON.
#[derive(Debug, clap::Parser)]
#[command(name = "mysql2json", version, about)]
struct Cli {
    /// Path to the MySQL dump file, or `-` for standard input.
    path: PathBuf,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(path = %cli.path.display(), "{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let statement = read_statement(cli)?;
    tracing::info!(table = statement.table_name(), "parsed statement");

    let style = if cli.pretty {
        JsonStyle::Pretty
    } else {
        JsonStyle::Compact
    };
    json::encode(&statement, io::stdout().lock(), style)
}

fn read_statement(cli: &Cli) -> Result<Statement, Error> {
    if cli.path.as_os_str() == "-" {
        return Parser::from_reader(io::stdin().lock()).parse_stream();
    }
    let file = File::open(&cli.path)?;
    Parser::from_reader(file).parse_stream()
}
