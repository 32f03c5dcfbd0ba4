//! Model-edit error types.

use pw_core::{PwError, SegmentId};
use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors raised by `Pipeway` edit operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Pipe segment not found (id={id})")]
    NotFound { id: SegmentId },

    #[error("Segment name already used: {name}")]
    DuplicateName { name: String },

    #[error("Segment {id} references itself as predecessor")]
    SelfReference { id: SegmentId },

    #[error("Segment {id} names predecessor {predecessor}, which is not in the pipeway")]
    PredecessorNotFound {
        id: SegmentId,
        predecessor: SegmentId,
    },

    #[error("Segment {id} is another segment's predecessor and cannot be deleted")]
    PredecessorInUse { id: SegmentId },

    #[error("Edit would create a predecessor cycle through segment {id}")]
    PredecessorCycle { id: SegmentId },
}

impl From<NetworkError> for PwError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::NotFound { id } => PwError::NotFound {
                what: "pipe segment",
                id: id.get(),
            },
            NetworkError::DuplicateName { name } => PwError::DuplicateName { name },
            NetworkError::SelfReference { id } => PwError::SelfReference { id: id.get() },
            NetworkError::PredecessorNotFound { predecessor, .. } => PwError::NotFound {
                what: "predecessor segment",
                id: predecessor.get(),
            },
            NetworkError::PredecessorInUse { id } => PwError::PredecessorInUse { id: id.get() },
            NetworkError::PredecessorCycle { id } => PwError::PredecessorCycle { id: id.get() },
        }
    }
}
