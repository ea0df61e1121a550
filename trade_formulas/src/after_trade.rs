//! after_trade.rs — Post-trade risk, R-multiple, cost and P/L formulas
//!
//! ACTUAL RISK
//!   If the trade closed at a profit, or at a loss smaller than the planned
//!   initial risk, the planned risk stands. Only when the realized loss
//!   exceeds the plan is the exposure recomputed from the actual fills:
//!
//! ```text
//!     s_buy·p_buy·(1 + t_buy) − s_sell·p_sell·(1 − t_sell) + c_buy + c_sell
//! ```
//!
//! R-MULTIPLE
//!   R = profit_loss / risk_initial — how many units of planned risk the
//!   trade returned. R = −1 means the stop did exactly its job.

/// Risk actually carried by a completed round trip. Returns
/// `risk_initial` unchanged unless the realized loss exceeded it.
#[allow(clippy::too_many_arguments)]
pub fn calculate_risk_actual(
    price_buy: f64,
    shares_buy: i64,
    tax_buy: f64,
    commission_buy: f64,
    price_sell: f64,
    shares_sell: i64,
    tax_sell: f64,
    commission_sell: f64,
    risk_initial: f64,
    profit_loss: f64,
) -> f64 {
    if profit_loss >= 0.0 || profit_loss.abs() < risk_initial {
        return risk_initial;
    }
    shares_buy as f64 * price_buy * (1.0 + tax_buy / 100.0)
        - shares_sell as f64 * price_sell * (1.0 - tax_sell / 100.0)
        + commission_buy
        + commission_sell
}

/// Profit/loss normalized by the initial risk taken.
pub fn calculate_r_multiple(profit_loss: f64, risk_initial: f64) -> f64 {
    profit_loss / risk_initial
}

/// Total fee drag of a round trip: tax on each leg's amount plus both
/// commissions. `direction` is irrelevant here; both legs are summed.
pub fn calculate_cost_total(
    amount_buy: f64,
    tax_buy: f64,
    commission_buy: f64,
    amount_sell: f64,
    tax_sell: f64,
    commission_sell: f64,
) -> f64 {
    tax_buy / 100.0 * amount_buy + commission_buy
        + tax_sell / 100.0 * amount_sell + commission_sell
}

/// Gross profit/loss of a round trip, fees excluded.
pub fn calculate_profit_loss(
    price_buy: f64,
    shares_buy: i64,
    price_sell: f64,
    shares_sell: i64,
) -> f64 {
    shares_sell as f64 * price_sell - shares_buy as f64 * price_buy
}
