//! I/O module
//!
//! Handles reading the depot's input files and producing its output.
//!
//! # Components
//!
//! - `lines` - Line-oriented input shared by both readers
//! - `dimensions` - Scanner for `LxWxH` dimension fields
//! - `parcel_reader` - Parcel file reader with iterator interface and bulk loader
//! - `customer_reader` - Customer file reader with iterator interface and bulk loader
//! - `event_log` - The depot's activity log
//! - `report` - Human-readable depot report
//! - `csv_format` - CSV export of the parcel table and customer queue

pub mod csv_format;
pub mod customer_reader;
pub mod dimensions;
pub mod event_log;
pub mod lines;
pub mod parcel_reader;
pub mod report;

pub use csv_format::{write_customers_csv, write_parcels_csv, CustomerRow, ParcelRow};
pub use customer_reader::{
    load_customers, parse_customer_line, parse_new_customer, CustomerReader, NewCustomer,
};
pub use event_log::{EventLog, SaveMode};
pub use parcel_reader::{load_parcels, parse_parcel_line, ParcelReader, PARCEL_HEADER};
pub use report::DepotReport;
