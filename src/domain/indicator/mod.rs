//! Technical indicator implementations.
//!
//! Point-in-time indicators over a chronological price series (oldest
//! first). Each returns a single value for the trailing window rather than
//! a full series; the decision pipeline only ever looks at the latest bar.

pub mod rsi;
pub mod sma;

pub use rsi::relative_strength;
pub use sma::moving_average;
