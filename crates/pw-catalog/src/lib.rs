//! pw-catalog: immutable NBR 5626 lookup tables and membership validators.
//!
//! Provides:
//! - pressure units, conversion factors and safety limits
//! - pipe materials and their friction-loss parameters
//! - nominal diameters (label ↔ millimeters)
//! - fitting kinds with equivalent-length tables (material × diameter)
//! - hydrometer ratings and their pressure-loss formula
//! - fixture flow-rate weights
//!
//! All tables are `const` data; nothing here allocates or mutates.

pub mod diameter;
pub mod fitting;
pub mod fixtures;
pub mod hydrometer;
pub mod material;
pub mod units;
pub mod validate;

pub use diameter::NominalDiameter;
pub use fitting::FittingKind;
pub use fixtures::FixtureKind;
pub use hydrometer::HydrometerRating;
pub use material::{FrictionParams, Material};
pub use units::PressureUnit;
