//! Key-level proximity filter.
//!
//! Price qualifies when it sits just above support, just below resistance,
//! or inside the fib retracement zone. All three bands are closed intervals;
//! an exact boundary hit counts.

use crate::domain::config::SignalConfig;
use crate::domain::snapshot::FibZone;

pub fn at_key_level(
    price: f64,
    support: f64,
    resistance: f64,
    fib_zone: &FibZone,
    config: &SignalConfig,
) -> bool {
    let band = config.level_proximity_pct;

    if support <= price && price <= support * (1.0 + band) {
        return true;
    }
    if resistance * (1.0 - band) <= price && price <= resistance {
        return true;
    }
    fib_zone.low <= price && price <= fib_zone.high
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(low: f64, high: f64) -> FibZone {
        FibZone { low, high }
    }

    #[test]
    fn exact_support_counts() {
        let config = SignalConfig::default();
        assert!(at_key_level(2025.0, 2025.0, 2045.0, &zone(0.0, 0.0), &config));
    }

    #[test]
    fn exact_resistance_counts() {
        let config = SignalConfig::default();
        assert!(at_key_level(2045.0, 2025.0, 2045.0, &zone(0.0, 0.0), &config));
    }

    #[test]
    fn top_of_support_band_counts() {
        let config = SignalConfig::default();
        // 2025 * 1.002 = 2029.05
        assert!(at_key_level(2029.05, 2025.0, 2045.0, &zone(0.0, 0.0), &config));
    }

    #[test]
    fn just_above_support_band_misses() {
        let config = SignalConfig::default();
        assert!(!at_key_level(2029.2, 2025.0, 2045.0, &zone(0.0, 0.0), &config));
    }

    #[test]
    fn bottom_of_resistance_band_counts() {
        let config = SignalConfig::default();
        // 2045 * 0.998 = 2040.91
        assert!(at_key_level(2040.91, 2025.0, 2045.0, &zone(0.0, 0.0), &config));
    }

    #[test]
    fn inside_fib_zone_counts() {
        let config = SignalConfig::default();
        assert!(at_key_level(
            2031.0,
            2025.0,
            2045.0,
            &zone(2028.0, 2034.0),
            &config
        ));
    }

    #[test]
    fn fib_zone_boundaries_count() {
        let config = SignalConfig::default();
        let fib = zone(2028.0, 2034.0);
        assert!(at_key_level(2028.0, 2000.0, 2100.0, &fib, &config));
        assert!(at_key_level(2034.0, 2000.0, 2100.0, &fib, &config));
    }

    #[test]
    fn between_levels_misses() {
        let config = SignalConfig::default();
        assert!(!at_key_level(
            2036.0,
            2025.0,
            2045.0,
            &zone(2028.0, 2034.0),
            &config
        ));
    }

    #[test]
    fn below_support_misses() {
        let config = SignalConfig::default();
        assert!(!at_key_level(2024.9, 2025.0, 2045.0, &zone(0.0, 0.0), &config));
    }

    #[test]
    fn wider_band_from_config() {
        let config = SignalConfig {
            level_proximity_pct: 0.01,
            ..SignalConfig::default()
        };
        // 2025 * 1.01 = 2045.25, so 2040 is inside the widened support band.
        assert!(at_key_level(2040.0, 2025.0, 2100.0, &zone(0.0, 0.0), &config));
    }
}
