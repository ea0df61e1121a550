use serde::{Deserialize, Serialize};

/// Side of a transaction. Closed enum: every formula that takes a
/// direction matches exhaustively, so there is no fallback branch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

/// Whether a position is opened by buying (long) or by selling short.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PositionKind {
    Long,
    Short,
}

/// One executed fill: size and price. Element of the sequence fed to
/// the weighted-average-price computation. No sign or range constraint
/// is imposed here; callers supply sensible values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SharesPrice {
    pub shares: f64,
    pub price: f64,
}
