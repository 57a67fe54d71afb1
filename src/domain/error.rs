//! Domain error types.
//!
//! Evaluation errors are surfaced to the caller as errors, never folded into
//! a WAIT decision; WAIT is reserved for legitimate no-trade rule outcomes.

/// Top-level error type for sigtrader.
#[derive(Debug, thiserror::Error)]
pub enum SigtraderError {
    #[error("insufficient data in {series}: have {have} points, need {need}")]
    InsufficientData {
        series: String,
        have: usize,
        need: usize,
    },

    #[error("degenerate risk: stop-loss equals entry price {entry}")]
    DegenerateRisk { entry: f64 },

    #[error("malformed snapshot: {reason}")]
    MalformedSnapshot { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("snapshot parse error in {file}: {reason}")]
    SnapshotParse { file: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SigtraderError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SigtraderError::MalformedSnapshot {
            reason: reason.into(),
        }
    }
}

impl From<&SigtraderError> for std::process::ExitCode {
    fn from(err: &SigtraderError) -> Self {
        let code: u8 = match err {
            SigtraderError::Io(_) => 1,
            SigtraderError::ConfigParse { .. }
            | SigtraderError::ConfigMissing { .. }
            | SigtraderError::ConfigInvalid { .. } => 2,
            SigtraderError::SnapshotParse { .. } | SigtraderError::MalformedSnapshot { .. } => 3,
            SigtraderError::InsufficientData { .. } | SigtraderError::DegenerateRisk { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
