//! Depot Parcel System CLI
//!
//! Command-line interface for serving depot customers from text input files.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --parcels data/parcels.txt --customers data/customers.txt process --count 3
//! cargo run -- report
//! cargo run -- find X100
//! cargo run -- export parcels --output parcels.csv
//! cargo run -- --add-parcel "X7 4 1.25 2x3x4" --add-customer "Jane Doe X7" process --report
//! ```
//!
//! The program loads the parcel and customer files, runs the selected
//! command, and saves the event log to `--log` (default `log.txt`) before
//! exiting. Without a subcommand every waiting customer is served and the
//! report is printed.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input file not found, unwritable output, etc.)

use depot_parcels::cli::{self, Command};
use depot_parcels::{DepotError, DepotSession, EventLog};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_cli_logger(args.verbose);

    // Created once here and saved once at shutdown
    let log = EventLog::new();

    let mut session = match DepotSession::open(args.to_session_config(), log) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    for failure in session.load_failures() {
        eprintln!("Warning: {}", failure);
    }

    let result = run(&mut session, args.selected_command());

    if let Err(e) = session.save_log() {
        eprintln!("Error saving log: {}", e);
        process::exit(1);
    }
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(session: &mut DepotSession, command: Command) -> Result<(), DepotError> {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match command {
        Command::Process { count, report } => {
            session.process(count, &mut output)?;
            if report {
                writeln!(output)?;
                session.report(&mut output)?;
            }
        }
        Command::Report => {
            session.report(&mut output)?;
        }
        Command::Find { parcel_id } => {
            session.find(&parcel_id, &mut output)?;
        }
        Command::Export { table, output: None } => {
            session.export(table, &mut output)?;
        }
        Command::Export {
            table,
            output: Some(path),
        } => {
            let mut file = BufWriter::new(File::create(&path)?);
            session.export(table, &mut file)?;
            file.flush()?;
            tracing::info!(path = %path.display(), "table exported");
        }
    }

    Ok(())
}
