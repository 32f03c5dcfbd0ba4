//! pw-project: pipeway document persistence.
//!
//! Reads and writes pipeway project files (JSON), validates them, and
//! converts between the document shape ([`schema`]) and the runtime model
//! (`pw_network::Pipeway`).

pub mod schema;
pub mod validate;

mod convert;

pub use convert::{from_model, to_model};
pub use schema::{PipeSegmentDoc, PipewayDoc, PumpingDoc, PumpingSegmentDoc};
pub use validate::{ValidationError, validate_document};

use pw_network::Pipeway;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed project file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid project file: {0}")]
    Validation(#[from] ValidationError),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Parse a JSON string into a validated pipeway.
pub fn from_json_str(json: &str) -> ProjectResult<Pipeway> {
    let doc: PipewayDoc = serde_json::from_str(json)?;
    Ok(to_model(&doc)?)
}

/// Serialize a pipeway as pretty-printed JSON.
pub fn to_json_string(pipeway: &Pipeway) -> ProjectResult<String> {
    Ok(serde_json::to_string_pretty(&from_model(pipeway))?)
}

/// Load and validate a project file.
pub fn load_json(path: impl AsRef<Path>) -> ProjectResult<Pipeway> {
    from_json_str(&fs::read_to_string(path)?)
}

/// Write a project file, pretty-printed with a trailing newline.
pub fn save_json(path: impl AsRef<Path>, pipeway: &Pipeway) -> ProjectResult<()> {
    let mut json = to_json_string(pipeway)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
