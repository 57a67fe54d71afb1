//! Higher-timeframe trend bias classification.
//!
//! Compares fast (50) and slow (200) moving averages on the 1-hour and
//! 4-hour series. Both timeframes must agree strictly; any disagreement or
//! tie collapses to `Range`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::config::SignalConfig;
use crate::domain::error::SigtraderError;
use crate::domain::indicator::moving_average;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bias {
    Bullish,
    Bearish,
    Range,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Bullish => write!(f, "BULLISH"),
            Bias::Bearish => write!(f, "BEARISH"),
            Bias::Range => write!(f, "RANGE"),
        }
    }
}

pub fn htf_bias(
    prices_1h: &[f64],
    prices_4h: &[f64],
    config: &SignalConfig,
) -> Result<Bias, SigtraderError> {
    let fast_1h = moving_average(prices_1h, config.ma_fast_period)?;
    let slow_1h = moving_average(prices_1h, config.ma_slow_period)?;
    let fast_4h = moving_average(prices_4h, config.ma_fast_period)?;
    let slow_4h = moving_average(prices_4h, config.ma_slow_period)?;

    if fast_1h > slow_1h && fast_4h > slow_4h {
        return Ok(Bias::Bullish);
    }
    if fast_1h < slow_1h && fast_4h < slow_4h {
        return Ok(Bias::Bearish);
    }
    Ok(Bias::Range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_config() -> SignalConfig {
        SignalConfig {
            ma_fast_period: 2,
            ma_slow_period: 4,
            ..SignalConfig::default()
        }
    }

    /// Series whose trailing 2-average exceeds its trailing 4-average.
    fn rising() -> Vec<f64> {
        vec![100.0, 101.0, 102.0, 103.0, 104.0, 105.0]
    }

    fn falling() -> Vec<f64> {
        vec![105.0, 104.0, 103.0, 102.0, 101.0, 100.0]
    }

    fn flat() -> Vec<f64> {
        vec![100.0; 6]
    }

    #[test]
    fn both_timeframes_rising_is_bullish() {
        let bias = htf_bias(&rising(), &rising(), &small_config()).unwrap();
        assert_eq!(bias, Bias::Bullish);
    }

    #[test]
    fn both_timeframes_falling_is_bearish() {
        let bias = htf_bias(&falling(), &falling(), &small_config()).unwrap();
        assert_eq!(bias, Bias::Bearish);
    }

    #[test]
    fn mixed_timeframes_is_range() {
        let bias = htf_bias(&rising(), &falling(), &small_config()).unwrap();
        assert_eq!(bias, Bias::Range);
    }

    #[test]
    fn tied_averages_is_range() {
        let bias = htf_bias(&flat(), &rising(), &small_config()).unwrap();
        assert_eq!(bias, Bias::Range);
    }

    #[test]
    fn short_series_is_insufficient_data() {
        let err = htf_bias(&[100.0, 101.0], &rising(), &small_config()).unwrap_err();
        assert!(matches!(err, SigtraderError::InsufficientData { .. }));
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Bias::Bullish).unwrap(), "\"BULLISH\"");
        assert_eq!(serde_json::to_string(&Bias::Range).unwrap(), "\"RANGE\"");
    }

    proptest! {
        // Multiplying every price by a positive constant leaves the verdict
        // unchanged.
        #[test]
        fn bias_is_scale_invariant(scale in 0.01f64..1000.0) {
            let config = small_config();
            let scaled: Vec<f64> = rising().iter().map(|p| p * scale).collect();
            let bias = htf_bias(&scaled, &scaled, &config).unwrap();
            prop_assert_eq!(bias, Bias::Bullish);
        }
    }
}
