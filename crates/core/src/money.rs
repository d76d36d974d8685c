//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to the currency's minor unit (2 decimal places),
/// midpoint away from zero.
///
/// Intermediate products (line totals, tax) are rounded with this before they
/// are summed, so repeated arithmetic cannot drift below the cent.
#[must_use]
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
