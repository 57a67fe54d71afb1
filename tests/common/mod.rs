#![allow(dead_code)]

use sigtrader::domain::error::SigtraderError;
use sigtrader::domain::price_action::Candle;
use sigtrader::domain::snapshot::{FibZone, MarketSnapshot};
use sigtrader::ports::snapshot_port::SnapshotPort;

/// Steadily rising series: the trailing 50-average sits above the trailing
/// 200-average.
pub fn rising_series(len: usize) -> Vec<f64> {
    (0..len).map(|i| 2000.0 + i as f64 * 0.1).collect()
}

/// Steadily falling series: the trailing 50-average sits below the trailing
/// 200-average.
pub fn falling_series(len: usize) -> Vec<f64> {
    (0..len).map(|i| 2040.0 - i as f64 * 0.1).collect()
}

/// 15-minute series with a controlled RSI: `ups` rising steps of +1 out of
/// 14 deltas, the rest falling. RSI(14) = 100 * ups / 14.
pub fn rsi_series(base: f64, ups: usize) -> Vec<f64> {
    let mut prices = vec![base];
    for i in 0..14 {
        let last = *prices.last().unwrap();
        prices.push(if i < ups { last + 1.0 } else { last - 1.0 });
    }
    prices
}

pub fn bullish_engulfing_candles() -> Vec<Candle> {
    vec![
        Candle {
            open: 2026.0,
            close: 2024.5,
        },
        Candle {
            open: 2024.0,
            close: 2026.5,
        },
    ]
}

pub fn bearish_engulfing_candles() -> Vec<Candle> {
    vec![
        Candle {
            open: 2043.0,
            close: 2044.5,
        },
        Candle {
            open: 2045.0,
            close: 2042.0,
        },
    ]
}

/// Two same-direction candles: no reversal pattern either way.
pub fn continuation_candles() -> Vec<Candle> {
    vec![
        Candle {
            open: 2024.0,
            close: 2025.0,
        },
        Candle {
            open: 2025.0,
            close: 2026.0,
        },
    ]
}

/// Snapshot that clears every gate with a bullish bias: price sits exactly
/// on support, RSI ≈ 57, bullish engulfing, risk 2 / reward 8 (rr 4.0).
pub fn bullish_snapshot() -> MarketSnapshot {
    MarketSnapshot {
        prices_1h: rising_series(200),
        prices_4h: rising_series(200),
        prices_15m: rsi_series(2024.0, 8),
        candles_15m: bullish_engulfing_candles(),
        current_price: 2025.0,
        support: 2025.0,
        resistance: 2045.0,
        fib_zone: FibZone {
            low: 2028.0,
            high: 2034.0,
        },
        structure_sl: 2023.0,
        structure_tp: 2033.0,
    }
}

/// Snapshot that clears every gate with a bearish bias: price sits exactly
/// on resistance, RSI ≈ 43, bearish engulfing, risk 2 / reward 8 (rr 4.0).
pub fn bearish_snapshot() -> MarketSnapshot {
    MarketSnapshot {
        prices_1h: falling_series(200),
        prices_4h: falling_series(200),
        prices_15m: rsi_series(2046.0, 6),
        candles_15m: bearish_engulfing_candles(),
        current_price: 2045.0,
        support: 2025.0,
        resistance: 2045.0,
        fib_zone: FibZone {
            low: 2030.0,
            high: 2036.0,
        },
        structure_sl: 2047.0,
        structure_tp: 2037.0,
    }
}

pub enum MockFetch {
    Snapshot(MarketSnapshot),
    IoError(String),
}

pub struct MockSnapshotPort {
    pub fetch: MockFetch,
}

impl MockSnapshotPort {
    pub fn with_snapshot(snapshot: MarketSnapshot) -> Self {
        Self {
            fetch: MockFetch::Snapshot(snapshot),
        }
    }

    pub fn with_io_error(reason: &str) -> Self {
        Self {
            fetch: MockFetch::IoError(reason.to_string()),
        }
    }
}

impl SnapshotPort for MockSnapshotPort {
    fn fetch(&self) -> Result<MarketSnapshot, SigtraderError> {
        match &self.fetch {
            MockFetch::Snapshot(s) => Ok(s.clone()),
            MockFetch::IoError(reason) => {
                Err(SigtraderError::Io(std::io::Error::other(reason.clone())))
            }
        }
    }
}
