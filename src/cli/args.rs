use crate::io::{parse_new_customer, parse_parcel_line, NewCustomer, SaveMode};
use crate::session::SessionConfig;
use crate::types::{DepotError, Parcel};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Track depot parcels, serve waiting customers and report on collections
#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(about = "Track depot parcels, serve waiting customers and report on collections", long_about = None)]
pub struct CliArgs {
    /// Parcel file path
    #[arg(
        long = "parcels",
        value_name = "PATH",
        default_value = "parcels.txt",
        help = "Parcel file (first line must be PARCELS)"
    )]
    pub parcels_file: PathBuf,

    /// Customer file path
    #[arg(
        long = "customers",
        value_name = "PATH",
        default_value = "customers.txt",
        help = "Customer file (first line is a header)"
    )]
    pub customers_file: PathBuf,

    /// Event log output path
    #[arg(
        long = "log",
        value_name = "PATH",
        default_value = "log.txt",
        help = "File the event log is saved to at exit"
    )]
    pub log_file: PathBuf,

    /// Append to the log file instead of replacing it
    #[arg(long = "append")]
    pub append: bool,

    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Extra parcels, one per flag
    #[arg(
        long = "add-parcel",
        value_name = "RECORD",
        value_parser = parse_added_parcel,
        help = "Add a parcel: \"<ID> <DAYS> <WEIGHT> <L>x<W>x<H>\""
    )]
    pub added_parcels: Vec<Parcel>,

    /// Extra customers, one per flag, queued after the customer file
    #[arg(
        long = "add-customer",
        value_name = "RECORD",
        value_parser = parse_added_customer,
        help = "Queue a customer: \"<NAME...> <PARCEL_ID>\""
    )]
    pub added_customers: Vec<NewCustomer>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What to do once the data is loaded
///
/// Without a subcommand the whole queue is processed and a report produced.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve customers from the head of the queue
    Process {
        /// Number of customers to serve (default: everyone waiting)
        #[arg(long = "count", value_name = "N")]
        count: Option<usize>,

        /// Generate the report afterwards
        #[arg(long = "report")]
        report: bool,
    },
    /// Generate the depot report for the loaded data
    Report,
    /// Show one parcel's details
    Find {
        #[arg(value_name = "PARCEL_ID")]
        parcel_id: String,
    },
    /// Write a table as CSV
    Export {
        #[arg(value_name = "TABLE")]
        table: ExportTable,

        /// Output file (default: stdout)
        #[arg(long = "output", short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Process {
            count: None,
            report: true,
        }
    }
}

/// Tables available for CSV export
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTable {
    Parcels,
    Customers,
}

impl CliArgs {
    /// Session configuration described by these arguments
    pub fn to_session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new(
            &self.parcels_file,
            &self.customers_file,
            &self.log_file,
        );
        config.save_mode = if self.append {
            SaveMode::Append
        } else {
            SaveMode::Overwrite
        };
        config.added_parcels = self.added_parcels.clone();
        config.added_customers = self.added_customers.clone();
        config
    }

    /// The selected subcommand, or the default full run
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

fn parse_added_parcel(value: &str) -> Result<Parcel, DepotError> {
    parse_parcel_line(value).map_err(DepotError::invalid_parcel)
}

fn parse_added_customer(value: &str) -> Result<NewCustomer, DepotError> {
    parse_new_customer(value).map_err(DepotError::invalid_customer)
}
