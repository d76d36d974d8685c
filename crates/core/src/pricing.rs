//! Checkout pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    lines::{PricedLine, subtotal},
    money::round_to_cents,
};

/// Errors that can occur while deriving a checkout breakdown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A line carried a negative unit price.
    #[error("line {0} has a negative unit price")]
    NegativePrice(usize),

    /// A line carried a zero quantity.
    #[error("line {0} has a zero quantity")]
    ZeroQuantity(usize),
}

/// Jurisdiction-specific checkout rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat shipping fee charged below the free-shipping threshold.
    pub flat_shipping_fee: Decimal,

    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Decimal,

    /// Tax rate applied to the subtotal (e.g. `0.18`).
    pub tax_rate: Decimal,
}

/// The derived totals for a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Sum of rounded line totals.
    pub subtotal: Decimal,

    /// Flat fee, or zero at or above the free-shipping threshold.
    pub shipping_fee: Decimal,

    /// `subtotal * tax_rate`, rounded to the minor unit.
    pub tax_amount: Decimal,

    /// `subtotal + shipping_fee + tax_amount`.
    pub total: Decimal,
}

/// Derives the checkout breakdown for a cart snapshot.
///
/// An empty snapshot yields an all-zero breakdown; rejecting empty carts is
/// the caller's policy, not a pricing concern.
///
/// # Errors
///
/// - [`PricingError::NegativePrice`]: a line had a negative unit price.
/// - [`PricingError::ZeroQuantity`]: a line had a zero quantity.
pub fn checkout_breakdown(
    lines: &[PricedLine],
    config: &PricingConfig,
) -> Result<PricingBreakdown, PricingError> {
    for (index, line) in lines.iter().enumerate() {
        if line.unit_price.is_sign_negative() {
            return Err(PricingError::NegativePrice(index));
        }

        if line.quantity == 0 {
            return Err(PricingError::ZeroQuantity(index));
        }
    }

    let subtotal = subtotal(lines);

    let shipping_fee = if lines.is_empty() || subtotal >= config.free_shipping_threshold {
        Decimal::ZERO
    } else {
        config.flat_shipping_fee
    };

    let tax_amount = round_to_cents(subtotal * config.tax_rate);

    Ok(PricingBreakdown {
        subtotal,
        shipping_fee,
        tax_amount,
        total: subtotal + shipping_fee + tax_amount,
    })
}
