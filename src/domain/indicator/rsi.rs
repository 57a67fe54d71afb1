//! RSI (Relative Strength Index) over the trailing window of a price series.
//!
//! Per-step deltas are split into gains and losses, then the last `period`
//! of each are averaged:
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0: RSI = 100
//!
//! The deltas array is one shorter than the input, so `period + 1` prices
//! are required; fewer is `InsufficientData`.

use crate::domain::error::SigtraderError;

pub fn relative_strength(prices: &[f64], period: usize) -> Result<f64, SigtraderError> {
    if period == 0 || prices.len() < period + 1 {
        return Err(SigtraderError::InsufficientData {
            series: "prices".into(),
            have: prices.len(),
            need: period + 1,
        });
    }

    let mut gains: Vec<f64> = Vec::with_capacity(prices.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(prices.len() - 1);

    for pair in prices.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    let avg_gain = gains[gains.len() - period..].iter().sum::<f64>() / period as f64;
    let avg_loss = losses[losses.len() - period..].iter().sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    Ok(100.0 - (100.0 / (1.0 + avg_gain / avg_loss)))
}
