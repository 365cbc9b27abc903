//! Error types for rotation runs
//!
//! Every variant is fatal for the run that raised it. Volumes whose names
//! merely look like snapshots are skipped, never reported here.

use thiserror::Error;

use crate::domain::entities::VolumeRef;
use crate::domain::ports::VolumeManagerError;

/// Result type alias for rotation operations
pub type RotationResult<T> = Result<T, RotationError>;

/// Mutating operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Delete,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::Create => write!(f, "create snapshot"),
            MutationKind::Delete => write!(f, "remove snapshot"),
        }
    }
}

/// Main error type for rotation runs
#[derive(Error, Debug)]
pub enum RotationError {
    /// Existing volumes could not be listed
    #[error("could not list volumes in group '{group}'")]
    Discovery {
        group: String,
        #[source]
        source: VolumeManagerError,
    },

    /// The volume to snapshot does not exist
    #[error("Could not find LV {volume}")]
    SourceMissing { volume: VolumeRef },

    /// A create or delete call failed
    #[error("failed to {kind} {volume}")]
    Mutation {
        kind: MutationKind,
        volume: VolumeRef,
        #[source]
        source: VolumeManagerError,
    },
}
