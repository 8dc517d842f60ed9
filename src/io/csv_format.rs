//! CSV export of the parcel table and the customer queue
//!
//! This module provides:
//! - ParcelRow / CustomerRow structures for serialization
//! - Conversion from domain types to rows
//! - Table writers for both
//!
//! Row conversion is pure (no I/O) for easy testing.

use crate::core::fee::calculate_fee;
use crate::core::{CustomerQueue, ParcelStore};
use crate::types::{Customer, DepotError, Parcel, SequenceNumber};
use serde::Serialize;
use std::io::Write;

/// One row of the parcel table
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ParcelRow {
    #[serde(rename = "parcel_id")]
    pub id: String,
    pub days_in_depot: u32,
    pub weight: String,
    pub dimensions: String,
    pub status: &'static str,
    pub fee: String,
}

impl From<&Parcel> for ParcelRow {
    fn from(parcel: &Parcel) -> Self {
        ParcelRow {
            id: parcel.id().to_string(),
            days_in_depot: parcel.days_in_depot(),
            weight: parcel.weight().to_string(),
            dimensions: parcel.dimensions().to_string(),
            status: parcel.status_label(),
            fee: format!("{:.2}", calculate_fee(parcel)),
        }
    }
}

/// One row of the customer table
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CustomerRow {
    pub seq_no: SequenceNumber,
    pub name: String,
    pub parcel_id: String,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        CustomerRow {
            seq_no: customer.sequence(),
            name: customer.name().to_string(),
            parcel_id: customer.parcel_id().to_string(),
        }
    }
}

/// Write every parcel as CSV, sorted by parcel identifier
///
/// Columns: parcel_id, days_in_depot, weight, dimensions, status, fee.
/// The fee column is what the parcel costs (or cost) to collect.
pub fn write_parcels_csv(store: &ParcelStore, output: &mut dyn Write) -> Result<(), DepotError> {
    let mut rows: Vec<ParcelRow> = store.all().into_iter().map(ParcelRow::from).collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    write_rows(&rows, output)
}

/// Write the waiting line as CSV, head first
///
/// Columns: seq_no, name, parcel_id.
pub fn write_customers_csv(
    queue: &CustomerQueue,
    output: &mut dyn Write,
) -> Result<(), DepotError> {
    let rows: Vec<CustomerRow> = queue.customers().iter().map(CustomerRow::from).collect();
    write_rows(&rows, output)
}

fn write_rows<T: Serialize>(rows: &[T], output: &mut dyn Write) -> Result<(), DepotError> {
    let mut writer = csv::Writer::from_writer(output);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
