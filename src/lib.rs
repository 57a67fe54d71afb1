//! sigtrader — market snapshot signal evaluation engine.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
