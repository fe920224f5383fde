//! Money helpers
//!
//! Pricing arithmetic runs on `rust_decimal`; models store `f64`. Amounts
//! keep full precision through the discount chain, so rounding to two
//! decimal places happens only at display time.

use rust_decimal::prelude::*;

/// Rounding for displayed monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation.
///
/// Returns `None` for non-finite input; the pricing layer surfaces that as
/// an error instead of treating it as zero.
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert a Decimal amount back to f64 for the API surface.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Round to two decimal places, half away from zero.
#[inline]
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a dollar amount with two decimals, rounding half away from zero
///
/// # Examples
///
/// ```
/// use shared::money::format_price;
///
/// assert_eq!(format_price(10.0), "$10.00");
/// assert_eq!(format_price(19.99), "$19.99");
/// ```
pub fn format_price(value: f64) -> String {
    let rounded = to_decimal(value).map(round_display).unwrap_or_default();
    format!("${rounded:.2}")
}
