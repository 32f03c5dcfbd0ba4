//! Engine error types.

use pw_core::{PwError, SegmentId};
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the calculation engines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Pipe segment not found (id={id})")]
    SegmentNotFound { id: SegmentId },

    #[error("Predecessor chain of segment {id} contains a cycle")]
    PredecessorCycle { id: SegmentId },

    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<EngineError> for PwError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::SegmentNotFound { id } => PwError::NotFound {
                what: "pipe segment",
                id: id.get(),
            },
            EngineError::PredecessorCycle { id } => PwError::PredecessorCycle { id: id.get() },
            EngineError::InvalidParameter { what } => PwError::InvalidParameter {
                what: what.to_string(),
            },
            EngineError::NonFinite { what, value } => PwError::NonFinite { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_to_root_error() {
        let id = SegmentId::new(9).unwrap();
        let err: PwError = EngineError::SegmentNotFound { id }.into();
        assert!(matches!(err, PwError::NotFound { id: 9, .. }));
    }

    #[test]
    fn non_finite_conversion_keeps_the_value() {
        let err: PwError = EngineError::NonFinite {
            what: "segment length",
            value: f64::INFINITY,
        }
        .into();
        assert!(matches!(
            err,
            PwError::NonFinite {
                what: "segment length",
                value: f64::INFINITY,
            }
        ));
    }
}
