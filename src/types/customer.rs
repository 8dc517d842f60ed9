//! Customer-related types for the depot

use super::parcel::ParcelId;
use std::fmt;

/// Position of a customer in the waiting line (1-based)
pub type SequenceNumber = u32;

/// A customer waiting to collect a parcel
///
/// The name and target parcel are fixed. The sequence number is owned by the
/// queue and rewritten whenever someone ahead leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    sequence: SequenceNumber,
    name: String,
    parcel_id: ParcelId,
}

impl Customer {
    /// Create a new customer
    ///
    /// # Arguments
    ///
    /// * `sequence` - Position in the queue as read from input
    /// * `name` - Customer name, may contain spaces
    /// * `parcel_id` - Parcel the customer has come for (not validated here)
    pub fn new(sequence: SequenceNumber, name: impl Into<String>, parcel_id: impl Into<ParcelId>) -> Self {
        Customer {
            sequence,
            name: name.into(),
            parcel_id: parcel_id.into(),
        }
    }

    pub fn sequence(&self) -> SequenceNumber {
        self.sequence
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parcel_id(&self) -> &str {
        &self.parcel_id
    }

    pub(crate) fn set_sequence(&mut self, sequence: SequenceNumber) {
        self.sequence = sequence;
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.sequence, self.name, self.parcel_id)
    }
}
