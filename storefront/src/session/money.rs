//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done on `Decimal` internally, then converted
//! back to `f64` for storage and display. Prices are PLN with grosz
//! (2 decimal place) precision.

use rust_decimal::prelude::*;
use shared::order::LineItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per item (1 000 000 zł)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line item
pub const MAX_QUANTITY: i32 = 9999;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line subtotal: `price × quantity`, 2 dp.
pub fn line_subtotal(item: &LineItem) -> f64 {
    to_f64(to_decimal(item.price) * Decimal::from(item.quantity))
}

/// Order total: sum of line subtotals, 2 dp.
///
/// Pure function of the items passed in; callers recompute after every
/// mutation rather than caching.
pub fn order_total(items: &[LineItem]) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum();
    to_f64(total)
}

/// Clamp raw quantity input from the UI into the valid range.
///
/// Values below 1 become 1 (the quantity floor); values above
/// [`MAX_QUANTITY`] are capped.
pub fn clamp_quantity(raw: i64) -> i32 {
    raw.clamp(1, MAX_QUANTITY as i64) as i32
}
