//! before_trade.rs — Pre-trade sizing, stoploss and cost formulas
//!
//! ─────────────────────────────────────────────────────────────────────────
//! MATHEMATICAL SPECIFICATION
//! ─────────────────────────────────────────────────────────────────────────
//!
//! Throughout, `t = tax_percent / 100` (percentages on a 0–100 scale),
//! `c = commission` (flat per-transaction fee).
//!
//! RECOMMENDED SHARES
//!   Net the pool of tax and commission, divide by price, floor:
//!
//! ```text
//!     shares = ⌊(pool − t·pool − c) / price⌋
//! ```
//!
//! STOPLOSS PRICE
//!   Price level at which closing the position loses exactly the accepted
//!   risk (risk_percent of pool), fees included. Two mirrored branches:
//!
//! ```text
//!     long:  (risk/100·pool + s·p·(1 − t) − 2c) / (s + t)
//!     short: (s·p·(1 + t) − risk/100·pool + 2c) / (s − t)
//! ```
//!
//!   The denominators are `s ± tax_percent/100` (NOT `s·(1 ± t)`). This is
//!   what the upstream formulas compute and what the reference values are
//!   derived from; keep it verbatim.
//!
//! INITIAL RISK
//!   Money lost if the stop fires immediately, both fee legs included:
//!
//! ```text
//!     long:  s·p·(1 + t) − s·stop·(1 − t) + 2c
//!     short: s·stop·(1 + t) − s·p·(1 − t) + 2c
//! ```
//!
//! AMOUNTS AND COSTS
//!   amount                 = p·s
//!   amount + tax + fee     = s·p ± s·p·tax_percent ± c        (buy: +, sell: −)
//!   amount with tax only   = s·p·(1 ∓ t)                      (buy: −, sell: +)
//!   transaction cost       = p·s·t + c
//!   tax share of an amount = ±(amount − s·p) − c              (buy: +, sell: −)
//!   price from amount      = (amount ∓ c) / ((1 ± t)·s)       (buy: −/+, sell: +/−)
//!
//!   NOTE: the amount-with-tax-and-commission formula multiplies by the RAW
//!   percent value (3.0, not 0.03) while its siblings divide by 100. The
//!   asymmetry is upstream's and is preserved so documented outputs match
//!   (e.g. buy of 2 × 12.0 at 3% tax, 1.0 commission → 97.0); it is flagged
//!   for the domain owner, not silently repaired.
//! ─────────────────────────────────────────────────────────────────────────

use tracing::debug;

use crate::models::{Direction, PositionKind};

/// Recommended share count for a buy that keeps tax and commission inside
/// the allocated pool.
pub fn calculate_shares_recommended(
    pool: f64,
    commission: f64,
    tax_percent: f64,
    price: f64,
) -> i64 {
    let net_pool = pool - tax_percent / 100.0 * pool - commission;
    let shares = (net_pool / price).floor() as i64;
    debug!("Net pool: {}, recommended shares: {}", net_pool, shares);
    shares
}

/// Stoploss price such that a fill at that level realizes exactly
/// `risk_percent` of `pool`, fees on both legs included.
pub fn calculate_stoploss(
    price: f64,
    shares: i64,
    tax_percent: f64,
    commission: f64,
    risk_percent: f64,
    pool: f64,
    kind: PositionKind,
) -> f64 {
    let s = shares as f64;
    let t = tax_percent / 100.0;
    let risk = risk_percent / 100.0 * pool;
    let stop = match kind {
        PositionKind::Long => (risk + s * price * (1.0 - t) - 2.0 * commission) / (s + t),
        PositionKind::Short => (s * price * (1.0 + t) - risk + 2.0 * commission) / (s - t),
    };
    debug!("Risk amount: {}, stoploss: {}", risk, stop);
    stop
}

/// Monetary risk the caller intends to take: `risk_percent` of `pool`.
pub fn calculate_risk_input(pool: f64, risk_percent: f64) -> f64 {
    risk_percent / 100.0 * pool
}

/// Theoretical loss if the stop fires: entry leg plus exit leg at the
/// stoploss price, both adjusted for tax, plus commission on each leg.
pub fn calculate_risk_initial(
    price: f64,
    shares: i64,
    tax_percent: f64,
    commission: f64,
    stoploss: f64,
    kind: PositionKind,
) -> f64 {
    let s = shares as f64;
    let t = tax_percent / 100.0;
    match kind {
        PositionKind::Long => {
            s * price * (1.0 + t) - s * stoploss * (1.0 - t) + 2.0 * commission
        }
        PositionKind::Short => {
            s * stoploss * (1.0 + t) - s * price * (1.0 - t) + 2.0 * commission
        }
    }
}

/// Raw trade amount, no fees.
pub fn calculate_amount(price: f64, shares: i64) -> f64 {
    price * shares as f64
}

/// Trade amount including tax and commission.
///
/// Upstream multiplies by the raw percent value here (see module header);
/// buy of 2 × 12.0 at tax 3.0, commission 1.0 yields 97.0.
pub fn calculate_amount_with_tax_and_commission(
    price: f64,
    shares: i64,
    tax_percent: f64,
    commission: f64,
    direction: Direction,
) -> f64 {
    let amount = shares as f64 * price;
    match direction {
        Direction::Buy => amount + amount * tax_percent + commission,
        Direction::Sell => amount - amount * tax_percent - commission,
    }
}

/// Trade amount adjusted for tax only.
pub fn calculate_amount_with_tax(
    price: f64,
    shares: i64,
    tax_percent: f64,
    direction: Direction,
) -> f64 {
    let amount = shares as f64 * price;
    match direction {
        Direction::Buy => amount * (1.0 - tax_percent / 100.0),
        Direction::Sell => amount * (1.0 + tax_percent / 100.0),
    }
}

/// Total cost of one transaction: tax on the traded value plus commission.
pub fn cost_transaction(price: f64, shares: i64, tax_percent: f64, commission: f64) -> f64 {
    price * shares as f64 * tax_percent / 100.0 + commission
}

/// Tax portion of a gross amount, with commission stripped out.
pub fn cost_tax(
    amount: f64,
    commission: f64,
    shares: i64,
    price: f64,
    direction: Direction,
) -> f64 {
    let notional = shares as f64 * price;
    match direction {
        Direction::Buy => amount - notional - commission,
        Direction::Sell => -amount - commission + notional,
    }
}

/// Per-share price that a gross amount corresponds to, fees backed out.
pub fn calculate_price(
    amount: f64,
    shares: i64,
    tax_percent: f64,
    commission: f64,
    direction: Direction,
) -> f64 {
    let s = shares as f64;
    let t = tax_percent / 100.0;
    match direction {
        Direction::Buy => (amount - commission) / ((1.0 + t) * s),
        Direction::Sell => (amount + commission) / ((1.0 - t) * s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_recommended_documented_example() {
        // (10000 − 300 − 1) / 12 = 808.25 → 808
        assert_eq!(calculate_shares_recommended(10000.0, 1.0, 3.0, 12.0), 808);
    }

    #[test]
    fn stoploss_long_documented_example() {
        let stop = calculate_stoploss(12.0, 2, 3.0, 1.0, 2.0, 10000.0, PositionKind::Long);
        // (200 + 23.28 − 2) / 2.03
        assert!((stop - 109.00492610837439).abs() < 1e-9, "stop = {stop}");
    }

    #[test]
    fn stoploss_short_mirrors_long() {
        let stop = calculate_stoploss(12.0, 2, 3.0, 1.0, 2.0, 1000.0, PositionKind::Short);
        // (24.72 − 20 + 2) / 1.97
        assert!((stop - 3.4111675126903553).abs() < 1e-9, "stop = {stop}");
    }

    #[test]
    fn risk_input_is_percent_of_pool() {
        assert!((calculate_risk_input(10000.0, 2.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn risk_initial_long() {
        let risk = calculate_risk_initial(12.0, 2, 3.0, 1.0, 10.0, PositionKind::Long);
        // 24·1.03 − 20·0.97 + 2 = 7.32
        assert!((risk - 7.32).abs() < 1e-9, "risk = {risk}");
    }

    #[test]
    fn risk_initial_short() {
        let risk = calculate_risk_initial(12.0, 2, 3.0, 1.0, 14.0, PositionKind::Short);
        // 28·1.03 − 24·0.97 + 2 = 7.56
        assert!((risk - 7.56).abs() < 1e-9, "risk = {risk}");
    }

    #[test]
    fn amount_is_price_times_shares() {
        assert_eq!(calculate_amount(12.0, 2), 24.0);
    }

    #[test]
    fn amount_with_tax_and_commission_documented_example() {
        let buy =
            calculate_amount_with_tax_and_commission(12.0, 2, 3.0, 1.0, Direction::Buy);
        // 24 + 24·3.0 + 1 — raw percent, upstream quirk
        assert_eq!(buy, 97.0);
        let sell =
            calculate_amount_with_tax_and_commission(12.0, 2, 3.0, 1.0, Direction::Sell);
        assert_eq!(sell, -49.0);
    }

    #[test]
    fn amount_with_tax_branches_reflect_under_tax_negation() {
        for &(price, shares, tax) in &[(12.0, 2i64, 3.0), (101.5, 40, 0.25), (7.0, 1, 12.0)] {
            let buy = calculate_amount_with_tax(price, shares, tax, Direction::Buy);
            let sell = calculate_amount_with_tax(price, shares, -tax, Direction::Sell);
            assert!((buy - sell).abs() < 1e-9, "({price}, {shares}, {tax})");
        }
    }

    #[test]
    fn cost_transaction_tax_plus_commission() {
        // 24·0.03 + 1 = 1.72
        assert!((cost_transaction(12.0, 2, 3.0, 1.0) - 1.72).abs() < 1e-9);
    }

    #[test]
    fn cost_tax_both_directions() {
        let buy = cost_tax(25.72, 1.0, 2, 12.0, Direction::Buy);
        assert!((buy - 0.72).abs() < 1e-9, "buy = {buy}");
        let sell = cost_tax(22.28, 1.0, 2, 12.0, Direction::Sell);
        assert!((sell - 0.72).abs() < 1e-9, "sell = {sell}");
    }

    #[test]
    fn price_from_amount() {
        let buy = calculate_price(97.0, 2, 3.0, 1.0, Direction::Buy);
        // (97 − 1) / (1.03 · 2)
        assert!((buy - 46.601941747572816).abs() < 1e-9, "buy = {buy}");
        let sell = calculate_price(46.0, 2, 3.0, 1.0, Direction::Sell);
        // (46 + 1) / (0.97 · 2)
        assert!((sell - 24.226804123711341).abs() < 1e-9, "sell = {sell}");
    }
}
