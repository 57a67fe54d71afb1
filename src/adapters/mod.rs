//! Concrete adapter implementations for the port traits.

pub mod file_config_adapter;
pub mod json_snapshot_adapter;

#[cfg(feature = "web")]
pub mod web;
