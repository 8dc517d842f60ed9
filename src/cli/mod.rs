// CLI module
// Command-line interface, argument parsing and diagnostics setup

mod args;
mod logger;

pub use args::{CliArgs, Command, ExportTable};
pub use logger::init_cli_logger;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (unknown flag, malformed `--add-parcel` value, `--help`),
/// clap prints the error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
