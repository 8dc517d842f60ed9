//! Collection fee calculation
//!
//! The fee is a pure function of a parcel's attributes:
//!
//! 1. `weight * 0.50`
//! 2. plus `volume * 0.01`
//! 3. plus a storage surcharge: nothing up to 3 days, `5.00` for 4 to 7
//!    days, `10.00` beyond 7 days
//! 4. times `0.9` when the parcel identifier starts with `X`, applied after
//!    the surcharge
//! 5. rounded to whole cents, halves rounding up
//!
//! All arithmetic is exact decimal arithmetic, so a computed value that
//! lands on a half cent (for example `1.005`) is a true tie and always
//! rounds up to the next cent.

use crate::types::Parcel;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rate per unit of weight (0.50)
pub const WEIGHT_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Rate per unit of volume (0.01)
pub const VOLUME_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Surcharge for parcels kept 4 to 7 days
pub const SHORT_STAY_SURCHARGE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Surcharge for parcels kept more than 7 days
pub const LONG_STAY_SURCHARGE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Multiplier applied to discounted parcels (0.9)
pub const DISCOUNT_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Identifier prefix that earns the discount
pub const DISCOUNT_PREFIX: char = 'X';

/// Days in depot that are free of surcharge
pub const FREE_DAYS: u32 = 3;

/// Days in depot after which the long-stay surcharge applies
pub const LONG_STAY_DAYS: u32 = 7;

/// Storage surcharge for the given number of days in depot
pub fn storage_surcharge(days_in_depot: u32) -> Decimal {
    if days_in_depot <= FREE_DAYS {
        Decimal::ZERO
    } else if days_in_depot <= LONG_STAY_DAYS {
        SHORT_STAY_SURCHARGE
    } else {
        LONG_STAY_SURCHARGE
    }
}

/// Compute the collection fee for a parcel, rounded to 2 decimal places
pub fn calculate_fee(parcel: &Parcel) -> Decimal {
    let mut fee = parcel.weight() * WEIGHT_RATE;
    fee += parcel.dimensions().volume() * VOLUME_RATE;
    fee += storage_surcharge(parcel.days_in_depot());

    if parcel.id().starts_with(DISCOUNT_PREFIX) {
        fee *= DISCOUNT_FACTOR;
    }

    round_to_cents(fee)
}

/// Round half up to whole cents
///
/// Fees are never negative, so away-from-zero is round-half-up here.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
