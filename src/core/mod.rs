//! Core business logic module
//!
//! This module contains the depot's collection components:
//! - `parcel_store` - Parcels keyed by identifier
//! - `customer_queue` - The ordered waiting line
//! - `fee` - Collection fee rules
//! - `worker` - Serves the head of the queue against the store

pub mod customer_queue;
pub mod fee;
pub mod parcel_store;
pub mod worker;

pub use customer_queue::CustomerQueue;
pub use fee::calculate_fee;
pub use parcel_store::ParcelStore;
pub use worker::Worker;
