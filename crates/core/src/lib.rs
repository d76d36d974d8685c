//! Atelier Core
//!
//! Pure checkout arithmetic for the Atelier storefront: currency rounding,
//! cart line totals and the subtotal/shipping/tax breakdown. No I/O and no
//! shared state; everything here is a deterministic function of its inputs.

pub mod lines;
pub mod money;
pub mod pricing;

pub use lines::{PricedLine, subtotal, total_items};
pub use pricing::{PricingBreakdown, PricingConfig, PricingError, checkout_breakdown};
