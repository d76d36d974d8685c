//! Cart lines and their totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::round_to_cents;

/// A cart line reduced to what pricing needs: the unit price snapshotted from
/// the product and the quantity requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    /// Unit price in major units (e.g. `12990.00`).
    pub unit_price: Decimal,

    /// Number of units, at least 1.
    pub quantity: u32,
}

impl PricedLine {
    /// Creates a new priced line.
    #[must_use]
    pub const fn new(unit_price: Decimal, quantity: u32) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    /// The line's extended price, rounded to the minor unit.
    #[must_use]
    pub fn total(&self) -> Decimal {
        round_to_cents(self.unit_price * Decimal::from(self.quantity))
    }
}

/// Sums the per-line totals. Each line is rounded before summing, so the
/// subtotal is always an exact amount of cents. Empty input yields zero.
#[must_use]
pub fn subtotal(lines: &[PricedLine]) -> Decimal {
    lines.iter().map(PricedLine::total).sum()
}

/// Total unit count across all lines, saturating at `u32::MAX`. Empty input
/// yields zero.
#[must_use]
pub fn total_items(lines: &[PricedLine]) -> u32 {
    lines
        .iter()
        .fold(0, |count, line| count.saturating_add(line.quantity))
}
