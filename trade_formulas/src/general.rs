//! general.rs — Currency conversion, percentages, weighted-average price
//!
//! Leaf-level numeric helpers shared by journaling and risk callers.
//! All percentages are on a 0–100 scale.

use crate::error::FormulaError;
use crate::models::SharesPrice;

/// What percentage of `from_value` is `value`.
///
/// `calculate_percentage_of(2.0, 50.0) = 4.0`
pub fn calculate_percentage_of(value: f64, from_value: f64) -> f64 {
    value / from_value * 100.0
}

/// Convert a price quoted in the original currency into the account
/// currency at the given exchange rate.
pub fn convert_from_original(price: f64, exchange_rate: f64) -> f64 {
    price * exchange_rate
}

/// Inverse of [`convert_from_original`]. A zero rate yields ±inf/NaN
/// per IEEE-754; the library does not guard against it.
pub fn convert_to_original(converted_price: f64, exchange_rate: f64) -> f64 {
    converted_price / exchange_rate
}

/// Share-weighted average fill price over an ordered fill sequence:
///
///   avg = Σ(shares_i · price_i) / Σ(shares_i)
///
/// Single full-sequence pass; any length ≥ 1 is supported. A zero
/// share total divides out to ±inf/NaN like every other zero
/// denominator in this crate.
pub fn calculate_average_price(fills: &[SharesPrice]) -> Result<f64, FormulaError> {
    if fills.is_empty() {
        return Err(FormulaError::EmptyInput);
    }
    let (notional, shares) = fills.iter().fold((0.0f64, 0.0f64), |(n, s), f| {
        (n + f.shares * f.price, s + f.shares)
    });
    Ok(notional / shares)
}

/// Contract count under the house leverage heuristic:
///
///   ceil(n / 3) − 1 + n
pub fn calculate_leveraged_contracts(n: i64) -> i64 {
    (n as f64 / 3.0).ceil() as i64 - 1 + n
}
