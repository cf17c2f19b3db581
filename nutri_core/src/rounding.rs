//! Decimal rounding for reported quantities.
//!
//! Ties go to the even digit, and the tie test is made on the exact binary
//! value of the input, so `506.25` rounds to `506.2` while `2.675` (stored
//! just below the half) rounds to `2.67`.

use rust_decimal::prelude::{Decimal, RoundingStrategy};

/// Round `value` to `places` decimal places, halves to even.
///
/// Values outside the range of [`Decimal`] (including non-finite ones) are
/// returned unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven))
        .map(|d| d.mantissa() as f64 / 10f64.powi(d.scale() as i32))
        .unwrap_or(value)
}
