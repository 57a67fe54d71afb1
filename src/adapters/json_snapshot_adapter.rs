//! JSON file snapshot adapter.
//!
//! Reads a [`MarketSnapshot`] from a JSON document on disk. The file is
//! re-read on every fetch so a host can refresh it between evaluations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::SigtraderError;
use crate::domain::snapshot::MarketSnapshot;
use crate::ports::snapshot_port::SnapshotPort;

pub struct JsonSnapshotAdapter {
    path: PathBuf,
}

impl JsonSnapshotAdapter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotPort for JsonSnapshotAdapter {
    fn fetch(&self) -> Result<MarketSnapshot, SigtraderError> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| SigtraderError::SnapshotParse {
            file: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
