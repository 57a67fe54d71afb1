//! The decision pipeline: a fixed gate chain over one market snapshot.
//!
//! Gates run in a strict order and the first failing gate is terminal:
//! bias, key-level proximity, momentum, price action, risk/reward. A full
//! pass yields a SIGNAL; any gate miss yields a WAIT with a reason.

use serde::{Deserialize, Serialize};

use crate::domain::bias::{htf_bias, Bias};
use crate::domain::config::SignalConfig;
use crate::domain::error::SigtraderError;
use crate::domain::levels::at_key_level;
use crate::domain::momentum::momentum_confirmed;
use crate::domain::price_action::{bearish_engulfing, bullish_engulfing};
use crate::domain::snapshot::MarketSnapshot;
use crate::domain::trade::build_trade;

/// The evaluation outcome. Serialized field names are a compatibility
/// contract with downstream consumers and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Decision {
    #[serde(rename = "WAIT")]
    Wait { reason: String },
    #[serde(rename = "SIGNAL")]
    Signal {
        bias: Bias,
        entry: f64,
        sl: f64,
        tp: f64,
        rr: f64,
    },
}

impl Decision {
    fn wait(reason: &str) -> Self {
        Decision::Wait {
            reason: reason.to_string(),
        }
    }
}

/// Run the full gate chain over a snapshot. Each evaluation is a single
/// deterministic pass with no retries; errors (insufficient data, malformed
/// input, degenerate risk) propagate rather than degrading into a WAIT.
pub fn evaluate(
    snapshot: &MarketSnapshot,
    config: &SignalConfig,
) -> Result<Decision, SigtraderError> {
    snapshot.validate(config)?;

    let bias = htf_bias(&snapshot.prices_1h, &snapshot.prices_4h, config)?;
    if bias == Bias::Range {
        return Ok(Decision::wait("HTF ranging"));
    }

    let price = snapshot.current_price;
    if !at_key_level(
        price,
        snapshot.support,
        snapshot.resistance,
        &snapshot.fib_zone,
        config,
    ) {
        return Ok(Decision::wait("Not at good position"));
    }

    if !momentum_confirmed(&snapshot.prices_15m, bias, config)? {
        return Ok(Decision::wait("Momentum not aligned"));
    }

    // Validation guarantees at least two candles.
    let last = &snapshot.candles_15m[snapshot.candles_15m.len() - 1];
    let prev = &snapshot.candles_15m[snapshot.candles_15m.len() - 2];
    match bias {
        Bias::Bullish if !bullish_engulfing(prev, last) => {
            return Ok(Decision::wait("No bullish price action"));
        }
        Bias::Bearish if !bearish_engulfing(prev, last) => {
            return Ok(Decision::wait("No bearish price action"));
        }
        _ => {}
    }

    match build_trade(
        price,
        bias,
        snapshot.structure_sl,
        snapshot.structure_tp,
        config,
    )? {
        None => Ok(Decision::wait("RR below 1:3")),
        Some(plan) => Ok(Decision::Signal {
            bias,
            entry: plan.entry,
            sl: plan.sl,
            tp: plan.tp,
            rr: plan.rr,
        }),
    }
}
