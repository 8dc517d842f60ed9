//! Depot session orchestration
//!
//! A `DepotSession` wires the event log, parcel store, customer queue and
//! worker together for one run of the program:
//! 1. Resolves both input paths (falling back to the parent directory)
//! 2. Loads parcels and customers through the bulk loaders
//! 3. Applies parcels and customers entered on the command line
//! 4. Serves customers, builds reports, looks up and exports data on request
//! 5. Saves the event log at shutdown
//!
//! A missing input file aborts the session. Any other load failure (bad
//! header, empty file, no valid records) is recorded and the session
//! continues with whatever was loaded.

use crate::cli::ExportTable;
use crate::core::fee::calculate_fee;
use crate::core::{CustomerQueue, ParcelStore, Worker};
use crate::io::report::CURRENCY;
use crate::io::{
    load_customers, load_parcels, write_customers_csv, write_parcels_csv, DepotReport, EventLog,
    NewCustomer, SaveMode,
};
use crate::types::{DepotError, Parcel};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything a session needs before it starts
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub parcels_path: PathBuf,
    pub customers_path: PathBuf,
    pub log_path: PathBuf,
    pub save_mode: SaveMode,
    /// Parcels entered by hand, inserted after the parcel file is loaded
    pub added_parcels: Vec<Parcel>,
    /// Customers entered by hand, queued after the customer file is loaded
    pub added_customers: Vec<NewCustomer>,
}

impl SessionConfig {
    pub fn new(
        parcels_path: impl Into<PathBuf>,
        customers_path: impl Into<PathBuf>,
        log_path: impl Into<PathBuf>,
    ) -> Self {
        SessionConfig {
            parcels_path: parcels_path.into(),
            customers_path: customers_path.into(),
            log_path: log_path.into(),
            save_mode: SaveMode::default(),
            added_parcels: Vec::new(),
            added_customers: Vec::new(),
        }
    }
}

/// Outcome of serving one customer
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    /// The customer collected their parcel and paid `fee`
    Collected {
        customer: String,
        parcel_id: String,
        fee: rust_decimal::Decimal,
    },
    /// The customer left without a parcel
    Lost { customer: String, parcel_id: String },
}

/// One run of the depot
#[derive(Debug)]
pub struct DepotSession {
    worker: Worker,
    log: EventLog,
    log_path: PathBuf,
    save_mode: SaveMode,
    load_failures: Vec<DepotError>,
}

impl DepotSession {
    /// Load both inputs and apply hand-entered records
    ///
    /// # Errors
    ///
    /// Returns `DepotError::FileNotFound` if either input exists neither at
    /// its given path nor in the parent directory. Nothing is loaded in
    /// that case.
    pub fn open(config: SessionConfig, log: EventLog) -> Result<Self, DepotError> {
        log.record("Attempting to load data files...");
        let parcels_path = locate_input(&config.parcels_path, "Parcel", &log)?;
        let customers_path = locate_input(&config.customers_path, "Customer", &log)?;

        let mut store = ParcelStore::new(log.clone());
        let mut queue = CustomerQueue::new(log.clone());
        let mut load_failures = Vec::new();

        log.record(format!("Loading parcels from: {}", parcels_path.display()));
        match load_parcels(&parcels_path, &mut store, &log) {
            Ok(_) => log.record(format!("Successfully loaded parcels: {}", store.len())),
            Err(e) => {
                log.record(format!(
                    "Failed to load parcels from: {}",
                    parcels_path.display()
                ));
                tracing::warn!(error = %e, "parcel load failed");
                load_failures.push(e);
            }
        }

        log.record(format!(
            "Loading customers from: {}",
            customers_path.display()
        ));
        match load_customers(&customers_path, &mut queue, &log) {
            Ok(_) => log.record(format!("Successfully loaded customers: {}", queue.len())),
            Err(e) => {
                log.record(format!(
                    "Failed to load customers from: {}",
                    customers_path.display()
                ));
                tracing::warn!(error = %e, "customer load failed");
                load_failures.push(e);
            }
        }

        for parcel in config.added_parcels {
            store.insert(parcel);
        }
        for customer in config.added_customers {
            queue.enqueue(&customer.name, &customer.parcel_id)?;
        }

        tracing::info!(
            parcels = store.len(),
            customers = queue.len(),
            "depot data loaded"
        );

        Ok(DepotSession {
            worker: Worker::new(store, queue, log.clone()),
            log,
            log_path: config.log_path,
            save_mode: config.save_mode,
            load_failures,
        })
    }

    /// Wrap an already populated worker
    pub fn with_worker(worker: Worker, log: EventLog, log_path: impl Into<PathBuf>) -> Self {
        DepotSession {
            worker,
            log,
            log_path: log_path.into(),
            save_mode: SaveMode::default(),
            load_failures: Vec::new(),
        }
    }

    /// Loads that failed without aborting the session
    pub fn load_failures(&self) -> &[DepotError] {
        &self.load_failures
    }

    pub fn worker(&self) -> &Worker {
        &self.worker
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// Serve up to `count` customers from the head of the queue
    ///
    /// With `count` of `None` the whole queue is served. Each outcome is
    /// written to `output` as one line.
    pub fn process(
        &mut self,
        count: Option<usize>,
        output: &mut dyn Write,
    ) -> Result<Vec<Collection>, DepotError> {
        let waiting = self.worker.queue().len();
        let limit = count.map_or(waiting, |count| count.min(waiting));
        let mut outcomes = Vec::with_capacity(limit);

        if self.worker.queue().is_empty() {
            writeln!(output, "No customers in queue to process")?;
            return Ok(outcomes);
        }

        for _ in 0..limit {
            let outcome = match self.serve_next() {
                Some(outcome) => outcome?,
                None => break,
            };
            match &outcome {
                Collection::Collected {
                    customer,
                    parcel_id,
                    fee,
                } => writeln!(
                    output,
                    "{} collected {} - Fee: {}{:.2}",
                    customer, parcel_id, CURRENCY, fee
                )?,
                Collection::Lost {
                    customer,
                    parcel_id,
                } => writeln!(
                    output,
                    "{} could not collect {}: parcel not found",
                    customer, parcel_id
                )?,
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Serve the head of the queue, `None` once the queue is empty
    fn serve_next(&mut self) -> Option<Result<Collection, DepotError>> {
        let customer = self.worker.queue().first()?;
        let name = customer.name().to_string();
        let parcel_id = customer.parcel_id().to_string();

        Some(match self.worker.process_next() {
            Ok(fee) => Ok(Collection::Collected {
                customer: name,
                parcel_id,
                fee,
            }),
            Err(DepotError::ParcelNotFound { .. }) => Ok(Collection::Lost {
                customer: name,
                parcel_id,
            }),
            Err(e) => Err(e),
        })
    }

    /// Build the report, record it in the event log and write it to `output`
    pub fn report(&self, output: &mut dyn Write) -> Result<DepotReport, DepotError> {
        let report = DepotReport::build(self.worker.parcels())?;
        for line in report.lines() {
            self.log.record(line);
        }
        report.write_to(output)?;
        Ok(report)
    }

    /// Look up a parcel and describe it, or say it is unknown
    pub fn find(&self, parcel_id: &str, output: &mut dyn Write) -> Result<Option<&Parcel>, DepotError> {
        let found = self.worker.parcels().get(parcel_id);
        match found {
            Some(parcel) => {
                writeln!(output, "Parcel Found:")?;
                writeln!(output, "ID: {}", parcel.id())?;
                writeln!(output, "Days in Depot: {}", parcel.days_in_depot())?;
                writeln!(output, "Weight: {}", parcel.weight())?;
                writeln!(output, "Dimensions: {}", parcel.dimensions())?;
                writeln!(output, "Status: {}", parcel.status_label())?;
                writeln!(output, "Fee: {}{:.2}", CURRENCY, calculate_fee(parcel))?;
            }
            None => writeln!(output, "No parcel found with ID: {}", parcel_id)?,
        }
        Ok(found)
    }

    /// Write one of the depot's tables as CSV
    pub fn export(&self, table: ExportTable, output: &mut dyn Write) -> Result<(), DepotError> {
        match table {
            ExportTable::Parcels => write_parcels_csv(self.worker.parcels(), output),
            ExportTable::Customers => write_customers_csv(self.worker.queue(), output),
        }
    }

    /// Save the event log to the configured log file
    pub fn save_log(&self) -> Result<(), DepotError> {
        self.log.save_to_file(&self.log_path, self.save_mode)
    }
}

/// Find an input file at `path` or, failing that, in the parent directory
///
/// Absolute paths are used as given.
pub fn resolve_input_path(path: &Path) -> Option<PathBuf> {
    if path.exists() {
        return Some(path.to_path_buf());
    }
    if path.is_absolute() {
        return None;
    }
    let fallback = Path::new("..").join(path);
    fallback.exists().then_some(fallback)
}

fn locate_input(path: &Path, kind: &str, log: &EventLog) -> Result<PathBuf, DepotError> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }
    log.record(format!("{} file not found at: {}", kind, path.display()));

    match resolve_input_path(path) {
        Some(found) => {
            log.record(format!(
                "Found {} file in parent directory: {}",
                kind.to_lowercase(),
                found.display()
            ));
            Ok(found)
        }
        None => {
            if let Ok(cwd) = std::env::current_dir() {
                log.record(format!("Current working directory: {}", cwd.display()));
            }
            Err(DepotError::file_not_found(path.display()))
        }
    }
}
