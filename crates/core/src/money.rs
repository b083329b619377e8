//! Money helpers

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every derived cart amount is rounded to.
pub const MONEY_DP: u32 = 2;

/// Round an amount to cents, midpoints away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}
