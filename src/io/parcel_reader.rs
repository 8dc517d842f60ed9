//! Parcel file reader
//!
//! Reads the depot's parcel list: a `PARCELS` header line, one column-header
//! line (content ignored), then one parcel per line:
//!
//! ```text
//! PARCELS
//! ID    Days  Weight  Dimensions
//! P100  2     5.0     20 x 30 x 40
//! X017  10    2.0     10x10x10
//! ```
//!
//! # Error Handling
//!
//! - A missing file, a wrong first line or a missing second line is fatal
//!   and is returned from `ParcelReader::new` / `from_reader`.
//! - A malformed data line (too few fields, bad number, dimensions that do
//!   not match `L x W x H`) is yielded as an `Err` item and the reader
//!   carries on with the next line.

use crate::core::ParcelStore;
use crate::io::dimensions::{scan_dimensions, DimensionMatch};
use crate::io::lines::{open_input, DataLines};
use crate::io::EventLog;
use crate::types::{DepotError, Parcel};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Required first line of a parcel file (compared after trimming)
pub const PARCEL_HEADER: &str = "PARCELS";

/// Streaming reader over the parcels in a parcel file
#[derive(Debug)]
pub struct ParcelReader<R> {
    lines: DataLines<R>,
}

impl ParcelReader<BufReader<File>> {
    /// Open a parcel file and validate its header lines
    ///
    /// # Errors
    ///
    /// - `FileNotFound` / `IoError` if the file cannot be opened
    /// - `InvalidHeader` if the first line is not `PARCELS`
    /// - `MissingColumnHeader` if there is no second line
    pub fn new(path: &Path) -> Result<Self, DepotError> {
        Self::from_reader(open_input(path)?)
    }
}

impl<R: BufRead> ParcelReader<R> {
    /// Wrap any buffered reader and validate its header lines
    pub fn from_reader(reader: R) -> Result<Self, DepotError> {
        let mut lines = DataLines::new(reader);

        let header = lines.next_raw()?;
        tracing::debug!(header = ?header, "parcel header line");
        if header.as_deref().map(str::trim) != Some(PARCEL_HEADER) {
            return Err(DepotError::invalid_header(PARCEL_HEADER, header.as_deref()));
        }

        if lines.next_raw()?.is_none() {
            return Err(DepotError::MissingColumnHeader);
        }

        Ok(Self { lines })
    }
}

impl<R: BufRead> Iterator for ParcelReader<R> {
    type Item = Result<Parcel, DepotError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line_num, line) = match self.lines.next()? {
            Ok(numbered) => numbered,
            Err(e) => return Some(Err(e)),
        };

        Some(parse_parcel_line(&line).map_err(|message| DepotError::parse_error(line_num, message)))
    }
}

/// Parse one parcel line: `<id> <days> <weight> <dimension tokens...>`
///
/// Fields are separated by runs of whitespace. The dimension tokens are
/// re-joined with single spaces and scanned for `L x W x H`.
///
/// # Returns
///
/// * `Ok(Parcel)` - Successfully parsed parcel (not yet collected)
/// * `Err(String)` - Why the line was rejected
pub fn parse_parcel_line(line: &str) -> Result<Parcel, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(format!(
            "insufficient data: expected at least 4 fields, found {}",
            parts.len()
        ));
    }

    let id = parts[0];
    let days_in_depot = parts[1]
        .parse::<u32>()
        .map_err(|e| format!("invalid days in depot '{}': {}", parts[1], e))?;
    let weight = parse_weight(parts[2])?;

    let dimension_text = parts[3..].join(" ");
    let dimensions = match scan_dimensions(&dimension_text) {
        DimensionMatch::Matched(dimensions) => dimensions,
        DimensionMatch::NotMatched => {
            return Err(format!(
                "failed to parse dimensions from '{}'",
                dimension_text
            ))
        }
        DimensionMatch::OutOfRange { digits } => {
            return Err(format!("dimension '{}' is out of range", digits))
        }
    };

    Ok(Parcel::new(id, days_in_depot, weight, dimensions))
}

/// Parse a non-negative weight in plain (`2.5`) or scientific (`2.5e1`) form
pub fn parse_weight(token: &str) -> Result<Decimal, String> {
    let parsed = if token.contains(['e', 'E']) {
        Decimal::from_scientific(token)
    } else {
        Decimal::from_str(token)
    };

    let weight = parsed.map_err(|e| format!("invalid weight '{}': {}", token, e))?;
    if weight < Decimal::ZERO {
        return Err(format!("invalid weight '{}': cannot be negative", token));
    }
    Ok(weight)
}

/// Load every parcel in a file into the store
///
/// Malformed lines are recorded in the event log and skipped.
///
/// # Returns
///
/// * `Ok(count)` - Number of parcels inserted by this load (at least one)
/// * `Err(DepotError)` - The file could not be read, its header is wrong,
///   or not a single parcel was produced
pub fn load_parcels(
    path: &Path,
    store: &mut ParcelStore,
    log: &EventLog,
) -> Result<usize, DepotError> {
    log.record(format!(
        "Starting to load parcels from file: {}",
        path.display()
    ));

    let reader = ParcelReader::new(path)
        .inspect_err(|e| log.record(format!("Error loading parcels: {}", e)))?;

    insert_parcels(reader, &path.display().to_string(), store, log)
}

/// Drain a parcel reader into the store
///
/// `input` names the source in log entries and errors.
pub fn insert_parcels<R: BufRead>(
    reader: ParcelReader<R>,
    input: &str,
    store: &mut ParcelStore,
    log: &EventLog,
) -> Result<usize, DepotError> {
    let mut loaded = 0;

    for result in reader {
        match result {
            Ok(parcel) => {
                store.insert(parcel);
                loaded += 1;
            }
            Err(e) if e.is_fatal_load_error() => {
                log.record(format!("Error loading parcels: {}", e));
                return Err(e);
            }
            Err(e) => {
                tracing::debug!(error = %e, "skipping parcel line");
                log.record(format!("Skipping parcel line: {}", e));
            }
        }
    }

    log.record(format!("Loaded {} parcels from {}", loaded, input));
    if loaded == 0 {
        return Err(DepotError::no_records_loaded(input));
    }
    Ok(loaded)
}
