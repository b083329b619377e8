//! Pricing rules
//!
//! Turns a cart subtotal and an optional coupon into the full set of derived
//! totals. Shipping is a flat rate on any non-empty cart and tax is a single
//! global percentage of the subtotal.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::round_money;

/// Derived monetary totals of a cart, each rounded to cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Shipping and tax configuration.
#[derive(Debug, Clone, Copy)]
pub struct PricingRules {
    /// Charged once on any cart with a positive subtotal.
    pub flat_shipping: Decimal,

    /// Applied to the subtotal.
    pub tax_rate: Percentage,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            flat_shipping: Decimal::TEN,
            tax_rate: Percentage::from(0.1),
        }
    }
}

impl PricingRules {
    /// Derive totals from an unrounded subtotal and discount.
    ///
    /// The total is taken from the unrounded components and every field is
    /// rounded on its own, so the rounded fields may not sum to the rounded
    /// total to the cent. A discount larger than the rest of the cart drives
    /// the total negative.
    #[must_use]
    pub fn totals(&self, subtotal: Decimal, discount: Decimal) -> Totals {
        let shipping = if subtotal > Decimal::ZERO {
            self.flat_shipping
        } else {
            Decimal::ZERO
        };

        let tax = self.tax_rate * subtotal;
        let total = subtotal + shipping + tax - discount;

        Totals {
            subtotal: round_money(subtotal),
            shipping: round_money(shipping),
            tax: round_money(tax),
            discount: round_money(discount),
            total: round_money(total),
        }
    }
}

/// Computes the discount a coupon grants on a subtotal.
///
/// Implementations receive whatever code the shopper typed; nothing upstream
/// validates it or bounds the result.
pub trait DiscountPolicy: Send + Sync {
    /// Discount amount for `coupon` on `subtotal`.
    fn discount(&self, subtotal: Decimal, coupon: &str) -> Decimal;
}

/// Accepts every coupon and grants nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn discount(&self, _subtotal: Decimal, _coupon: &str) -> Decimal {
        Decimal::ZERO
    }
}

impl<F> DiscountPolicy for F
where
    F: Fn(Decimal, &str) -> Decimal + Send + Sync,
{
    fn discount(&self, subtotal: Decimal, coupon: &str) -> Decimal {
        self(subtotal, coupon)
    }
}
