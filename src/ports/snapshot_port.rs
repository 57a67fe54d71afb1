//! Market snapshot acquisition port trait.
//!
//! The engine does not care where a snapshot comes from; any provider that
//! can produce a [`MarketSnapshot`] can drive an evaluation.

use crate::domain::error::SigtraderError;
use crate::domain::snapshot::MarketSnapshot;

pub trait SnapshotPort {
    fn fetch(&self) -> Result<MarketSnapshot, SigtraderError>;
}
