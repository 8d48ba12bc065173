//! Session snapshots.
//!
//! A snapshot captures the full calculator state so a session can be
//! persisted by the host and resumed later. The engine itself never touches
//! the filesystem; it only produces and consumes bytes.

use crate::builder::{EngineBuilder, EngineConfig};
use crate::core::CalculatorState;
use crate::machine::CalculatorStateMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{SnapshotError, SnapshotFormat};

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a calculator session.
///
/// # Example
///
/// ```rust
/// use calc_engine::checkpoint::SessionSnapshot;
/// use calc_engine::core::Action;
/// use calc_engine::machine::CalculatorStateMachine;
///
/// let mut machine = CalculatorStateMachine::default();
/// machine.apply_all([Action::append("7"), Action::append("×"), Action::append("6")]);
/// machine.apply(Action::Calculate);
///
/// let json = SessionSnapshot::capture(&machine).to_json().unwrap();
/// let restored = SessionSnapshot::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored.state().display(), "42");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Engine settings in effect
    pub config: EngineConfig,

    /// Calculator state at capture time
    pub state: CalculatorState,
}

impl SessionSnapshot {
    /// Capture the machine's current state.
    pub fn capture(machine: &CalculatorStateMachine) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            config: *machine.config(),
            state: machine.state().clone(),
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::encode(SnapshotFormat::Json, e))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::decode(SnapshotFormat::Json, e))
    }

    /// Encode in the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::encode(SnapshotFormat::Binary, e))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::decode(SnapshotFormat::Binary, e))
    }

    /// Check the version, the stored settings and the state invariants.
    ///
    /// Settings go through the same checks as [`EngineBuilder::config`].
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        EngineBuilder::from_config(self.config).config()?;

        let capacity = self.state.history().capacity();
        if capacity != self.config.history_capacity {
            return Err(SnapshotError::CapacityMismatch {
                state: capacity,
                config: self.config.history_capacity,
            });
        }
        self.state.check_invariants()?;
        Ok(())
    }

    /// Validate and rebuild a machine from the snapshot.
    pub fn restore(self) -> Result<CalculatorStateMachine, SnapshotError> {
        self.validate()?;
        tracing::debug!(id = %self.id, taken_at = %self.taken_at, "restoring session");
        Ok(CalculatorStateMachine::with_state(self.state, self.config))
    }
}
