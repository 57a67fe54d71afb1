//! Core domain types and logic.

pub mod bias;
pub mod config;
pub mod error;
pub mod indicator;
pub mod levels;
pub mod momentum;
pub mod price_action;
pub mod signal;
pub mod snapshot;
pub mod trade;
