//! pw-core: stable foundation for pipeway.
//!
//! Contains:
//! - ids (stable segment identifiers with a root sentinel mapping)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error taxonomy)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PwError, PwResult};
pub use ids::*;
pub use numeric::*;
