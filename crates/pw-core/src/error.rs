use thiserror::Error;

pub type PwResult<T> = Result<T, PwError>;

/// Root error taxonomy shared across the workspace.
///
/// Crate-level errors (network, engine, project) convert into these
/// variants at the boundary; all operations fail fast with no partial
/// success.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PwError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} not found (id={id})")]
    NotFound { what: &'static str, id: u64 },

    #[error("Segment name already used: {name}")]
    DuplicateName { name: String },

    #[error("Segment {id} references itself as predecessor")]
    SelfReference { id: u64 },

    #[error("Segment {id} is another segment's predecessor and cannot be deleted")]
    PredecessorInUse { id: u64 },

    #[error("Predecessor chain of segment {id} contains a cycle")]
    PredecessorCycle { id: u64 },

    #[error("Required value missing: {field}")]
    EmptyInput { field: &'static str },
}
