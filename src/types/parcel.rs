//! Parcel-related types for the depot
//!
//! This module defines the Parcel structure, its physical dimensions, and the
//! identifier type used as the store key.

use rust_decimal::Decimal;
use std::fmt;

/// Parcel identifier
///
/// Free-form token from the input file (for example `P100` or `X017`).
pub type ParcelId = String;

/// Physical size of a parcel in whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(length: u32, width: u32, height: u32) -> Self {
        Dimensions {
            length,
            width,
            height,
        }
    }

    /// Volume as an exact decimal
    ///
    /// The product of three `u32` values always fits in a `Decimal`.
    pub fn volume(&self) -> Decimal {
        Decimal::from(self.length) * Decimal::from(self.width) * Decimal::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {}", self.length, self.width, self.height)
    }
}

/// A parcel held at the depot
///
/// The identifier and physical attributes are fixed at construction. The
/// collected flag only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    id: ParcelId,
    days_in_depot: u32,
    weight: Decimal,
    dimensions: Dimensions,
    collected: bool,
}

impl Parcel {
    /// Create a new, uncollected parcel
    ///
    /// # Arguments
    ///
    /// * `id` - Unique parcel identifier
    /// * `days_in_depot` - Number of days the parcel has been waiting
    /// * `weight` - Weight of the parcel (non-negative)
    /// * `dimensions` - Length, width and height
    pub fn new(
        id: impl Into<ParcelId>,
        days_in_depot: u32,
        weight: Decimal,
        dimensions: Dimensions,
    ) -> Self {
        Parcel {
            id: id.into(),
            days_in_depot,
            weight,
            dimensions,
            collected: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn days_in_depot(&self) -> u32 {
        self.days_in_depot
    }

    pub fn weight(&self) -> Decimal {
        self.weight
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Human-readable collection status
    pub fn status_label(&self) -> &'static str {
        if self.collected {
            "Collected"
        } else {
            "Waiting"
        }
    }

    /// Flag the parcel as collected. There is no way back.
    pub(crate) fn mark_collected(&mut self) {
        self.collected = true;
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.id, self.days_in_depot, self.weight, self.dimensions
        )
    }
}
