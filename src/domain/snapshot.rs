//! Market snapshot: the single input aggregate for one evaluation.
//!
//! The snapshot is validated at the boundary before the rule chain runs.
//! Structural problems (inverted levels, short candle history, non-finite
//! numbers) are errors, never WAIT decisions.

use serde::{Deserialize, Serialize};

use crate::domain::config::SignalConfig;
use crate::domain::error::SigtraderError;
use crate::domain::price_action::Candle;

/// Closed price interval derived from Fibonacci retracement levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibZone {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub prices_1h: Vec<f64>,
    pub prices_4h: Vec<f64>,
    pub prices_15m: Vec<f64>,
    pub candles_15m: Vec<Candle>,
    pub current_price: f64,
    pub support: f64,
    pub resistance: f64,
    pub fib_zone: FibZone,
    pub structure_sl: f64,
    pub structure_tp: f64,
}

impl MarketSnapshot {
    /// Boundary validation: structural checks first, then lookback lengths
    /// against the configured periods.
    pub fn validate(&self, config: &SignalConfig) -> Result<(), SigtraderError> {
        for (name, value) in [
            ("current_price", self.current_price),
            ("support", self.support),
            ("resistance", self.resistance),
            ("fib_zone.low", self.fib_zone.low),
            ("fib_zone.high", self.fib_zone.high),
            ("structure_sl", self.structure_sl),
            ("structure_tp", self.structure_tp),
        ] {
            if !value.is_finite() {
                return Err(SigtraderError::malformed(format!(
                    "{name} is not a finite number"
                )));
            }
        }

        if self.support >= self.resistance {
            return Err(SigtraderError::malformed(format!(
                "support {} is not below resistance {}",
                self.support, self.resistance
            )));
        }
        if self.fib_zone.low > self.fib_zone.high {
            return Err(SigtraderError::malformed(format!(
                "fib_zone is inverted: [{}, {}]",
                self.fib_zone.low, self.fib_zone.high
            )));
        }
        if self.candles_15m.len() < 2 {
            return Err(SigtraderError::malformed(format!(
                "candles_15m has {} candles, need at least 2",
                self.candles_15m.len()
            )));
        }
        for candle in &self.candles_15m {
            if !candle.open.is_finite() || !candle.close.is_finite() {
                return Err(SigtraderError::malformed(
                    "candles_15m contains a non-finite open or close",
                ));
            }
        }

        check_series("prices_1h", &self.prices_1h, config.ma_slow_period)?;
        check_series("prices_4h", &self.prices_4h, config.ma_slow_period)?;
        check_series("prices_15m", &self.prices_15m, config.rsi_min_len())?;
        Ok(())
    }
}

fn check_series(name: &str, prices: &[f64], need: usize) -> Result<(), SigtraderError> {
    if prices.len() < need {
        return Err(SigtraderError::InsufficientData {
            series: name.to_string(),
            have: prices.len(),
            need,
        });
    }
    if prices.iter().any(|p| !p.is_finite()) {
        return Err(SigtraderError::malformed(format!(
            "{name} contains a non-finite price"
        )));
    }
    Ok(())
}
