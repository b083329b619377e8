//! Pricing Config

use clap::Args;
use decimal_percentage::Percentage;
use intellismart::pricing::PricingRules;
use rust_decimal::Decimal;
use rusty_money::{Findable, iso::Currency};

use crate::config::ConfigError;

/// Shipping, tax and display currency.
#[derive(Debug, Args)]
pub struct PricingConfig {
    /// Flat shipping charged on any non-empty cart
    #[arg(long, env = "FLAT_SHIPPING", default_value = "10.00")]
    pub flat_shipping: Decimal,

    /// Tax rate as a fraction of the subtotal (0.1 is 10%)
    #[arg(long, env = "TAX_RATE", default_value_t = 0.1)]
    pub tax_rate: f64,

    /// ISO 4217 code used when printing amounts
    #[arg(long, env = "CURRENCY", default_value = "USD")]
    pub currency: String,
}

impl PricingConfig {
    /// Pricing rules for these settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the tax rate is outside `0..=1` or shipping is
    /// negative.
    pub fn rules(&self) -> Result<PricingRules, ConfigError> {
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(ConfigError::TaxRate(self.tax_rate));
        }

        if self.flat_shipping.is_sign_negative() {
            return Err(ConfigError::FlatShipping(self.flat_shipping));
        }

        Ok(PricingRules {
            flat_shipping: self.flat_shipping,
            tax_rate: Percentage::from(self.tax_rate),
        })
    }

    /// The display currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Currency`] for codes `rusty_money` does not know.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        Currency::find(&self.currency.to_uppercase())
            .ok_or_else(|| ConfigError::Currency(self.currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    fn config(tax_rate: f64, flat_shipping: Decimal, currency: &str) -> PricingConfig {
        PricingConfig {
            flat_shipping,
            tax_rate,
            currency: currency.to_string(),
        }
    }

    #[test]
    fn defaults_match_the_engine_defaults() -> Result<(), ConfigError> {
        let rules = config(0.1, Decimal::TEN, "USD").rules()?;
        let totals = rules.totals(Decimal::new(20_00, 2), Decimal::ZERO);

        assert_eq!(totals.total, Decimal::new(32_00, 2));

        Ok(())
    }

    #[test]
    fn tax_rate_outside_unit_range_is_rejected() {
        assert!(matches!(
            config(1.5, Decimal::TEN, "USD").rules(),
            Err(ConfigError::TaxRate(_))
        ));
        assert!(matches!(
            config(f64::NAN, Decimal::TEN, "USD").rules(),
            Err(ConfigError::TaxRate(_))
        ));
    }

    #[test]
    fn negative_shipping_is_rejected() {
        assert!(matches!(
            config(0.1, Decimal::NEGATIVE_ONE, "USD").rules(),
            Err(ConfigError::FlatShipping(_))
        ));
    }

    #[test]
    fn currency_codes_are_case_insensitive() -> Result<(), ConfigError> {
        assert_eq!(config(0.1, Decimal::TEN, "eur").currency()?, iso::EUR);

        Ok(())
    }

    #[test]
    fn unknown_currency_is_rejected() {
        assert!(matches!(
            config(0.1, Decimal::TEN, "XXQ").currency(),
            Err(ConfigError::Currency(code)) if code == "XXQ"
        ));
    }
}
