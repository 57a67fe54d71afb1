//! Two-candle engulfing pattern detection.
//!
//! Only the real bodies (open/close) matter; wicks are ignored. The latest
//! candle must fully contain and reverse the previous candle's body.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub close: f64,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Previous candle bearish, latest bullish, latest body engulfs it.
pub fn bullish_engulfing(prev: &Candle, last: &Candle) -> bool {
    prev.is_bearish() && last.is_bullish() && last.close > prev.open && last.open < prev.close
}

/// Previous candle bullish, latest bearish, latest body engulfs it.
pub fn bearish_engulfing(prev: &Candle, last: &Candle) -> bool {
    prev.is_bullish() && last.is_bearish() && last.open > prev.close && last.close < prev.open
}
