//! Money helpers
//!
//! All monetary values flow through `rust_decimal::Decimal` so transport
//! precision never loses cents; rounding to two decimal places happens only
//! at the display boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Display precision for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to display precision (half-up)
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary value as a currency string
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}
