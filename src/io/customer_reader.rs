//! Customer file reader
//!
//! Reads the waiting line: one header line (content ignored), then one
//! customer per line as `<sequence> <name...> <parcel id>`. Names may span
//! several whitespace-separated words; the last field is always the parcel
//! identifier.

use crate::core::CustomerQueue;
use crate::io::lines::{open_input, DataLines};
use crate::io::EventLog;
use crate::types::{Customer, DepotError, ParcelId, SequenceNumber};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streaming reader over the customers in a customer file
#[derive(Debug)]
pub struct CustomerReader<R> {
    lines: DataLines<R>,
}

impl CustomerReader<BufReader<File>> {
    /// Open a customer file and consume its header line
    ///
    /// # Errors
    ///
    /// - `FileNotFound` / `IoError` if the file cannot be opened
    /// - `EmptySource` if the file has no first line
    pub fn new(path: &Path) -> Result<Self, DepotError> {
        Self::from_reader(open_input(path)?, &path.display().to_string())
    }
}

impl<R: BufRead> CustomerReader<R> {
    /// Wrap any buffered reader and consume its header line
    ///
    /// `input` names the source in the `EmptySource` error.
    pub fn from_reader(reader: R, input: &str) -> Result<Self, DepotError> {
        let mut lines = DataLines::new(reader);

        match lines.next_raw()? {
            Some(header) => tracing::debug!(header = %header, "customer header line"),
            None => return Err(DepotError::empty_source(input)),
        }

        Ok(Self { lines })
    }
}

impl<R: BufRead> Iterator for CustomerReader<R> {
    type Item = Result<Customer, DepotError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line_num, line) = match self.lines.next()? {
            Ok(numbered) => numbered,
            Err(e) => return Some(Err(e)),
        };

        Some(
            parse_customer_line(&line)
                .map_err(|message| DepotError::parse_error(line_num, message)),
        )
    }
}

/// Parse one customer line: `<sequence> <name...> <parcel id>`
///
/// With exactly three fields the middle one is the name. With more, every
/// field between the sequence number and the parcel identifier is part of
/// the name, re-joined with single spaces.
pub fn parse_customer_line(line: &str) -> Result<Customer, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(format!(
            "insufficient data: expected at least 3 fields, found {}",
            parts.len()
        ));
    }

    let sequence = parse_sequence(parts[0])?;
    let (name, parcel_id) = split_name_and_parcel(&parts[1..])?;

    Ok(Customer::new(sequence, name, parcel_id))
}

fn parse_sequence(token: &str) -> Result<SequenceNumber, String> {
    match token.parse::<SequenceNumber>() {
        Ok(0) => Err("sequence number must be positive".to_string()),
        Ok(sequence) => Ok(sequence),
        Err(e) => Err(format!("invalid sequence number '{}': {}", token, e)),
    }
}

/// Name and parcel of a customer joining the queue by hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub parcel_id: ParcelId,
}

/// Parse `<name...> <parcel id>` for a customer without a sequence number
pub fn parse_new_customer(text: &str) -> Result<NewCustomer, String> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let (name, parcel_id) = split_name_and_parcel(&parts)?;
    Ok(NewCustomer { name, parcel_id })
}

/// Last field is the parcel, everything before it is the name
fn split_name_and_parcel(parts: &[&str]) -> Result<(String, ParcelId), String> {
    match parts {
        [] | [_] => Err("expected a name followed by a parcel ID".to_string()),
        [name @ .., parcel_id] => Ok((name.join(" "), parcel_id.to_string())),
    }
}

/// Load every customer in a file onto the tail of the queue
///
/// Malformed lines are recorded in the event log and skipped.
///
/// # Returns
///
/// * `Ok(count)` - Number of customers queued by this load (at least one)
/// * `Err(DepotError)` - The file could not be read, is empty, or not a
///   single customer was produced
pub fn load_customers(
    path: &Path,
    queue: &mut CustomerQueue,
    log: &EventLog,
) -> Result<usize, DepotError> {
    log.record(format!(
        "Starting to load customers from file: {}",
        path.display()
    ));

    let reader = CustomerReader::new(path)
        .inspect_err(|e| log.record(format!("Error loading customers: {}", e)))?;

    enqueue_customers(reader, &path.display().to_string(), queue, log)
}

/// Drain a customer reader onto the queue
pub fn enqueue_customers<R: BufRead>(
    reader: CustomerReader<R>,
    input: &str,
    queue: &mut CustomerQueue,
    log: &EventLog,
) -> Result<usize, DepotError> {
    let mut loaded = 0;

    for result in reader {
        match result {
            Ok(customer) => {
                log.record(format!(
                    "Parsed customer: seqNo={}, name={}, parcelID={}",
                    customer.sequence(),
                    customer.name(),
                    customer.parcel_id()
                ));
                queue.push(customer);
                loaded += 1;
            }
            Err(e) if e.is_fatal_load_error() => {
                log.record(format!("Error loading customers: {}", e));
                return Err(e);
            }
            Err(e) => {
                tracing::debug!(error = %e, "skipping customer line");
                log.record(format!("Skipping customer line: {}", e));
            }
        }
    }

    log.record(format!("Loaded {} customers from {}", loaded, input));
    if loaded == 0 {
        return Err(DepotError::no_records_loaded(input));
    }
    Ok(loaded)
}
