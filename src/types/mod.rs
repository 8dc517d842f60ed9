//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `parcel`: Parcel, its dimensions and identifier
//! - `customer`: Customer and queue sequence numbers
//! - `error`: Error types for the depot

pub mod customer;
pub mod error;
pub mod parcel;

pub use customer::{Customer, SequenceNumber};
pub use error::DepotError;
pub use parcel::{Dimensions, Parcel, ParcelId};
