//! Snapshot encoding and restore failures.

use crate::builder::BuildError;
use crate::core::InvariantError;
use thiserror::Error;

/// Wire format a snapshot was being read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Binary,
}

impl std::fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// Why a snapshot could not be written or turned back into an engine.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Cannot encode session as {format}: {reason}")]
    Encode {
        format: SnapshotFormat,
        reason: String,
    },

    #[error("Cannot decode {format} session: {reason}")]
    Decode {
        format: SnapshotFormat,
        reason: String,
    },

    #[error("Snapshot format version {found} is not readable, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The stored settings would be refused by `EngineBuilder`.
    #[error("Stored engine settings are invalid: {0}")]
    InvalidConfig(#[from] BuildError),

    #[error("Stored state is inconsistent: {0}")]
    InvalidState(#[from] InvariantError),

    #[error("State history holds up to {state} entries but the settings allow {config}")]
    CapacityMismatch { state: usize, config: usize },
}

impl SnapshotError {
    pub(crate) fn encode(format: SnapshotFormat, err: impl ToString) -> Self {
        Self::Encode {
            format,
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode(format: SnapshotFormat, err: impl ToString) -> Self {
        Self::Decode {
            format,
            reason: err.to_string(),
        }
    }
}
