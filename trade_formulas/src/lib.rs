//! Stateless financial arithmetic for equity trading.
//!
//! Every function is a pure, closed-form formula over scalar inputs:
//! position sizing, stoploss levels, initial/actual risk, realized P/L,
//! R-multiples and tax + commission cost breakdowns. No state, no I/O;
//! all functions are safe to call concurrently.
//!
//! Division by a caller-supplied zero propagates the IEEE-754 result
//! (±inf/NaN) uniformly; the only structural error is an empty fill
//! sequence ([`FormulaError::EmptyInput`]).

pub mod after_trade;
pub mod before_trade;
pub mod error;
pub mod general;
pub mod models;

pub use error::FormulaError;
pub use models::*;

/// Library version, for callers that surface it.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
