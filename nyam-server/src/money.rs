//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic on prices is done using `Decimal` internally, then
//! converted to `f64` for storage/serialization. Rounding is half-up to
//! 2 decimal places.

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;

use crate::utils::AppError;

/// Monetary values carry 2 decimal places
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per product (€1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i64 = 9999;

/// Validate that a price is finite, non-negative and within bounds.
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_PRICE {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_PRICE}), got {value}"
        )));
    }
    Ok(())
}

fn to_decimal(value: f64) -> Decimal {
    // Prices are validated finite before any arithmetic, so the
    // conversion cannot fail in practice.
    Decimal::from_f64(value).unwrap_or_default()
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute a line subtotal: unit price × quantity, rounded to cents.
pub fn line_subtotal(price: f64, quantity: i64) -> f64 {
    let subtotal = to_decimal(price) * Decimal::from(quantity);
    round_money(subtotal).to_f64().unwrap_or(0.0)
}

/// Sum already-rounded monetary values without floating point drift.
pub fn sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let total = values
        .into_iter()
        .map(to_decimal)
        .fold(Decimal::ZERO, |acc, v| acc + v);
    round_money(total).to_f64().unwrap_or(0.0)
}

/// Round a single monetary value to cents.
pub fn round(value: f64) -> f64 {
    round_money(to_decimal(value)).to_f64().unwrap_or(0.0)
}
