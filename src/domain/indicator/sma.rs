//! Simple moving average over the trailing window of a price series.
//!
//! Fails fast with `InsufficientData` when the series is shorter than the
//! requested period; the window is never silently shrunk.

use crate::domain::error::SigtraderError;

pub fn moving_average(prices: &[f64], period: usize) -> Result<f64, SigtraderError> {
    if period == 0 {
        return Err(SigtraderError::InsufficientData {
            series: "prices".into(),
            have: prices.len(),
            need: 1,
        });
    }
    if prices.len() < period {
        return Err(SigtraderError::InsufficientData {
            series: "prices".into(),
            have: prices.len(),
            need: period,
        });
    }

    let window = &prices[prices.len() - period..];
    Ok(window.iter().sum::<f64>() / period as f64)
}
