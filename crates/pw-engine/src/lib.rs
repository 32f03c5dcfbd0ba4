//! pw-engine: hydraulic calculation engines.
//!
//! Provides:
//! - the pressure engine: flow, velocity, losses and end pressure for one
//!   segment, folding in every ancestor along the predecessor chain
//! - a memoized full-table pass for recomputing every segment at once
//! - the pumping engine: manometric height, pump power and adequacy checks
//! - a bill-of-materials summary (straight length per diameter)
//!
//! Both engines are pure functions over the model; nothing here mutates
//! shared state, so read-only recomputation can run freely.

pub mod error;
pub mod hydraulics;
pub mod pressure;
pub mod pumping;
pub mod summary;

pub use error::{EngineError, EngineResult};
pub use pressure::{PressureResult, calculate_pressure, pressure_table};
pub use pumping::{PumpingResult, calculate_pumping};
pub use summary::length_by_diameter;
