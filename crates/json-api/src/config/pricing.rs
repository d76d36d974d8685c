//! Pricing Config

use atelier_core::PricingConfig;
use clap::Args;
use rust_decimal::Decimal;

/// Checkout pricing settings. These are the single source of truth for the
/// derived totals; orders freeze the values in effect when they are placed.
#[derive(Debug, Args)]
pub struct PricingSettings {
    /// Flat shipping fee charged below the free-shipping threshold
    #[arg(long, env = "FLAT_SHIPPING_FEE", default_value = "200.00")]
    pub flat_shipping_fee: Decimal,

    /// Cart subtotal at or above which shipping is free
    #[arg(long, env = "FREE_SHIPPING_THRESHOLD", default_value = "5000.00")]
    pub free_shipping_threshold: Decimal,

    /// Tax rate applied to the cart subtotal
    #[arg(long, env = "TAX_RATE", default_value = "0.18")]
    pub tax_rate: Decimal,
}

impl PricingSettings {
    /// Convert into the pricing configuration the checkout calculator takes.
    #[must_use]
    pub fn to_pricing_config(&self) -> PricingConfig {
        PricingConfig {
            flat_shipping_fee: self.flat_shipping_fee,
            free_shipping_threshold: self.free_shipping_threshold,
            tax_rate: self.tax_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_parse_into_pricing_config() -> TestResult {
        let settings = PricingSettings {
            flat_shipping_fee: "200.00".parse()?,
            free_shipping_threshold: "5000.00".parse()?,
            tax_rate: "0.18".parse()?,
        };

        let config = settings.to_pricing_config();

        assert_eq!(config.flat_shipping_fee, "200.00".parse::<Decimal>()?);
        assert_eq!(config.tax_rate, "0.18".parse::<Decimal>()?);

        Ok(())
    }
}
