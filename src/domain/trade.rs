//! Trade plan construction and the risk/reward gate.
//!
//! Entry is the current price; stop and target come from external market
//! structure analysis. The directional contract is enforced here: bullish
//! plans need `sl < entry < tp`, bearish need `tp < entry < sl`.

use crate::domain::bias::Bias;
use crate::domain::config::SignalConfig;
use crate::domain::error::SigtraderError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradePlan {
    pub entry: f64,
    pub sl: f64,
    pub tp: f64,
    pub rr: f64,
}

/// Build a trade plan, or `None` when the risk/reward ratio falls below the
/// configured minimum. The ratio is computed from unrounded prices; only the
/// returned plan is rounded to 2 decimal places.
pub fn build_trade(
    price: f64,
    bias: Bias,
    structure_sl: f64,
    structure_tp: f64,
    config: &SignalConfig,
) -> Result<Option<TradePlan>, SigtraderError> {
    let entry = price;
    let sl = structure_sl;
    let tp = structure_tp;

    if sl == entry {
        return Err(SigtraderError::DegenerateRisk { entry });
    }

    let aligned = match bias {
        Bias::Bullish => sl < entry && entry < tp,
        Bias::Bearish => tp < entry && entry < sl,
        Bias::Range => false,
    };
    if !aligned {
        return Err(SigtraderError::malformed(format!(
            "structure levels not on the correct side of entry for {bias} \
             (entry {entry}, sl {sl}, tp {tp})"
        )));
    }

    let rr = (tp - entry).abs() / (entry - sl).abs();
    if rr < config.min_risk_reward {
        return Ok(None);
    }

    Ok(Some(TradePlan {
        entry: round2(entry),
        sl: round2(sl),
        tp: round2(tp),
        rr: round2(rr),
    }))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
