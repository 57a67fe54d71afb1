//! Momentum confirmation via RSI on the 15-minute series.
//!
//! Confirms only when momentum is directionally consistent with bias and not
//! yet exhausted: bullish wants RSI strictly inside (midline, overbought),
//! bearish strictly inside (oversold, midline). Open intervals; landing
//! exactly on a bound never confirms.

use crate::domain::bias::Bias;
use crate::domain::config::SignalConfig;
use crate::domain::error::SigtraderError;
use crate::domain::indicator::relative_strength;

pub fn momentum_confirmed(
    prices_15m: &[f64],
    bias: Bias,
    config: &SignalConfig,
) -> Result<bool, SigtraderError> {
    let rsi = relative_strength(prices_15m, config.rsi_period)?;

    let confirmed = match bias {
        Bias::Bullish => rsi > config.rsi_midline && rsi < config.rsi_overbought,
        Bias::Bearish => rsi < config.rsi_midline && rsi > config.rsi_oversold,
        Bias::Range => false,
    };
    Ok(confirmed)
}
