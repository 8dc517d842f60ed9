//! Depot Parcel System Library
//! # Overview
//!
//! This library tracks parcels held at a depot and the customers waiting to
//! collect them. It loads both from loosely formatted text files, serves
//! customers one at a time, charges a collection fee and reports on the
//! depot's state.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Parcel, Customer, DepotError)
//! - [`cli`] - CLI arguments parsing and diagnostics setup
//! - [`core`] - Business logic components:
//!   - [`core::parcel_store`] - Parcels keyed by identifier
//!   - [`core::customer_queue`] - Ordered waiting line with renumbering
//!   - [`core::worker`] - Serves the head of the queue
//!   - [`core::fee`] - Collection fee rules
//! - [`io`] - Input readers, event log, report and CSV export
//! - [`session`] - Wires everything together for one run
//!
//! # Fees
//!
//! A parcel's fee is built up as follows:
//!
//! - **Weight**: 0.50 per unit of weight
//! - **Volume**: 0.01 per unit of `length x width x height`
//! - **Storage**: nothing up to 3 days, 5.00 for 4 to 7 days, 10.00 beyond
//! - **Discount**: parcels whose identifier starts with `X` pay 90% of the
//!   total, applied after the storage surcharge
//!
//! The result is rounded to the cent, with ties rounding up.
//!
//! # Queue Order
//!
//! Each waiting customer's sequence number is their 1-based position in the
//! line. Removing anyone renumbers everyone behind them.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use crate::core::{calculate_fee, CustomerQueue, ParcelStore, Worker};
pub use io::{DepotReport, EventLog, SaveMode};
pub use session::{DepotSession, SessionConfig};
pub use types::{Customer, DepotError, Dimensions, Parcel, ParcelId, SequenceNumber};
