//! pw-network: in-memory pipe network model.
//!
//! Provides:
//! - `Pipeway`, the aggregate root owning all pipe segments and the
//!   optional pumping segment
//! - `PipeSegment`, `PumpingSegment`, `FittingTally` value types
//! - invariant-preserving edit operations (duplicate-name, self-reference,
//!   dangling-predecessor, cycle and predecessor-in-use guards)
//!
//! Hydraulic results are never stored here; the engines recompute them on
//! demand from the current model state.

pub mod error;
pub mod pipeway;
pub mod segment;

pub use error::{NetworkError, NetworkResult};
pub use pipeway::Pipeway;
pub use segment::{BranchSide, FittingTally, PipeSegment, PumpingSegment};
