//! Signal engine thresholds.
//!
//! Every constant of the rule chain is a named field so tests can probe
//! boundary behavior directly and deployments can tune via the `[signal]`
//! config section.

use crate::domain::error::SigtraderError;
use crate::ports::config_port::ConfigPort;

#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Fast moving-average period for HTF bias (both timeframes).
    pub ma_fast_period: usize,
    /// Slow moving-average period for HTF bias (both timeframes).
    pub ma_slow_period: usize,
    /// RSI lookback on the 15-minute series.
    pub rsi_period: usize,
    /// Width of the support/resistance proximity bands, as a fraction of the
    /// level (0.002 = 0.2%).
    pub level_proximity_pct: f64,
    /// RSI value separating bullish from bearish momentum territory.
    pub rsi_midline: f64,
    /// Upper RSI bound for bullish confirmation (overbought beyond).
    pub rsi_overbought: f64,
    /// Lower RSI bound for bearish confirmation (oversold beyond).
    pub rsi_oversold: f64,
    /// Minimum risk/reward ratio; plans below this are rejected.
    pub min_risk_reward: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            ma_fast_period: 50,
            ma_slow_period: 200,
            rsi_period: 14,
            level_proximity_pct: 0.002,
            rsi_midline: 50.0,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            min_risk_reward: 3.0,
        }
    }
}

impl SignalConfig {
    /// Build from a config source, falling back to defaults for absent keys.
    pub fn from_config_port(port: &dyn ConfigPort) -> Result<Self, SigtraderError> {
        let defaults = Self::default();
        let config = Self {
            ma_fast_period: port.get_int("signal", "ma_fast_period", defaults.ma_fast_period as i64)
                as usize,
            ma_slow_period: port.get_int("signal", "ma_slow_period", defaults.ma_slow_period as i64)
                as usize,
            rsi_period: port.get_int("signal", "rsi_period", defaults.rsi_period as i64) as usize,
            level_proximity_pct: port.get_double(
                "signal",
                "level_proximity_pct",
                defaults.level_proximity_pct,
            ),
            rsi_midline: port.get_double("signal", "rsi_midline", defaults.rsi_midline),
            rsi_overbought: port.get_double("signal", "rsi_overbought", defaults.rsi_overbought),
            rsi_oversold: port.get_double("signal", "rsi_oversold", defaults.rsi_oversold),
            min_risk_reward: port.get_double("signal", "min_risk_reward", defaults.min_risk_reward),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SigtraderError> {
        if self.ma_fast_period == 0 {
            return Err(invalid("ma_fast_period", "must be positive"));
        }
        if self.ma_slow_period <= self.ma_fast_period {
            return Err(invalid(
                "ma_slow_period",
                "must be greater than ma_fast_period",
            ));
        }
        if self.rsi_period == 0 {
            return Err(invalid("rsi_period", "must be positive"));
        }
        if self.level_proximity_pct <= 0.0 || !self.level_proximity_pct.is_finite() {
            return Err(invalid("level_proximity_pct", "must be a positive fraction"));
        }
        if self.min_risk_reward <= 0.0 || !self.min_risk_reward.is_finite() {
            return Err(invalid("min_risk_reward", "must be positive"));
        }
        let bounds_ordered = 0.0 <= self.rsi_oversold
            && self.rsi_oversold < self.rsi_midline
            && self.rsi_midline < self.rsi_overbought
            && self.rsi_overbought <= 100.0;
        if !bounds_ordered {
            return Err(invalid(
                "rsi_oversold",
                "RSI bounds must satisfy 0 <= oversold < midline < overbought <= 100",
            ));
        }
        Ok(())
    }

    /// Minimum series length needed for RSI (deltas array is one shorter
    /// than the price series).
    pub fn rsi_min_len(&self) -> usize {
        self.rsi_period + 1
    }
}

fn invalid(key: &str, reason: &str) -> SigtraderError {
    SigtraderError::ConfigInvalid {
        section: "signal".to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
