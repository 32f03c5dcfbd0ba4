//! Semantic validation of a parsed pipeway document.
//!
//! serde already guarantees the key-set and the value types; this pass
//! checks everything the schema cannot express: catalog membership,
//! numeric ranges, id/name uniqueness and predecessor-chain integrity.
//! Field names in errors use the document's camelCase spelling so messages
//! point at the file the user wrote.

use crate::schema::{PipeSegmentDoc, PipewayDoc, PumpingSegmentDoc};
use pw_catalog::{FittingKind, HydrometerRating, Material, NominalDiameter, PressureUnit};
use pw_core::{PwError, ensure_filled};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("unknown {field} label: {value:?}")]
    UnknownLabel { field: &'static str, value: String },

    #[error("{field} is not a finite number: {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} out of range ({value}): {reason}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("segment id 0 is reserved for the predecessor sentinel")]
    ZeroId,

    #[error("duplicate segment id: {id}")]
    DuplicateId { id: u64 },

    #[error("duplicate segment name: {name:?}")]
    DuplicateName { name: String },

    #[error("segment {id} names itself as predecessor")]
    SelfReference { id: u64 },

    #[error("segment {id} names unknown predecessor {predecessor}")]
    UnknownPredecessor { id: u64, predecessor: u64 },

    #[error("predecessor chain of segment {id} contains a cycle")]
    PredecessorCycle { id: u64 },
}

impl From<ValidationError> for PwError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownLabel { field, value } => PwError::InvalidParameter {
                what: format!("{field}: unknown label {value:?}"),
            },
            // A required numeric arriving as NaN/∞ is a blank field at this
            // boundary, not a computation overflow.
            ValidationError::NotFinite { field, .. } => PwError::EmptyInput { field },
            ValidationError::OutOfRange {
                field,
                value,
                reason,
            } => PwError::InvalidParameter {
                what: format!("{field} = {value}: {reason}"),
            },
            ValidationError::ZeroId => PwError::InvalidParameter {
                what: "segment id must be non-zero".to_owned(),
            },
            ValidationError::DuplicateId { id } => PwError::InvalidParameter {
                what: format!("duplicate segment id {id}"),
            },
            ValidationError::DuplicateName { name } => PwError::DuplicateName { name },
            ValidationError::SelfReference { id } => PwError::SelfReference { id },
            ValidationError::UnknownPredecessor { id, .. } => PwError::NotFound {
                what: "predecessor segment",
                id,
            },
            ValidationError::PredecessorCycle { id } => PwError::PredecessorCycle { id },
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_document(doc: &PipewayDoc) -> ValidationResult {
    if PressureUnit::from_label(&doc.unit).is_none() {
        return Err(ValidationError::UnknownLabel {
            field: "unit",
            value: doc.unit.clone(),
        });
    }
    if Material::from_label(&doc.material).is_none() {
        return Err(ValidationError::UnknownLabel {
            field: "material",
            value: doc.material.clone(),
        });
    }

    if let Some(pumping) = doc.pumping_segment_data.as_present() {
        validate_pumping(pumping)?;
    }

    let mut ids = HashSet::new();
    let mut names_upper = HashSet::new();
    for segment in &doc.list_of_pipe_segment_data {
        validate_segment(segment)?;
        if !ids.insert(segment.id) {
            return Err(ValidationError::DuplicateId { id: segment.id });
        }
        if !names_upper.insert(segment.name.to_uppercase()) {
            return Err(ValidationError::DuplicateName {
                name: segment.name.clone(),
            });
        }
    }

    validate_predecessors(&doc.list_of_pipe_segment_data)
}

fn validate_segment(segment: &PipeSegmentDoc) -> ValidationResult {
    if segment.id == 0 {
        return Err(ValidationError::ZeroId);
    }
    finite("initialPressure", segment.initial_pressure)?;
    non_negative("length", segment.length)?;
    finite("heightVariation", segment.height_variation)?;
    non_negative("flowRateWeights", segment.flow_rate_weights)?;

    if NominalDiameter::from_label(&segment.nominal_diameter).is_none() {
        return Err(ValidationError::UnknownLabel {
            field: "nominalDiameter",
            value: segment.nominal_diameter.clone(),
        });
    }
    if HydrometerRating::from_max_flow(segment.hydrometer_max_flow_rate).is_none() {
        return Err(ValidationError::OutOfRange {
            field: "hydrometerMaxFlowRate",
            value: segment.hydrometer_max_flow_rate,
            reason: "not a rated hydrometer value",
        });
    }
    validate_connections("pipeConnections", &segment.pipe_connections)
}

fn validate_pumping(pumping: &PumpingSegmentDoc) -> ValidationResult {
    non_negative("dailyConsumption", pumping.daily_consumption)?;
    finite("pumpYield", pumping.pump_yield)?;
    if !(pumping.pump_yield > 0.0 && pumping.pump_yield < 100.0) {
        return Err(ValidationError::OutOfRange {
            field: "pumpYield",
            value: pumping.pump_yield,
            reason: "must be strictly between 0 and 100 percent",
        });
    }
    finite("pumpingTime", pumping.pumping_time)?;
    if !(pumping.pumping_time > 0.0 && pumping.pumping_time <= 24.0) {
        return Err(ValidationError::OutOfRange {
            field: "pumpingTime",
            value: pumping.pumping_time,
            reason: "must be in (0, 24] hours",
        });
    }
    non_negative("suctionLength", pumping.suction_length)?;
    finite("suctionManometricHeight", pumping.suction_manometric_height)?;
    non_negative("pumpingLength", pumping.pumping_length)?;
    finite("pumpingManometricHeight", pumping.pumping_manometric_height)?;

    for (field, label) in [
        ("suctionNominalDiameter", &pumping.suction_nominal_diameter),
        ("pumpingNominalDiameter", &pumping.pumping_nominal_diameter),
    ] {
        if NominalDiameter::from_label(label).is_none() {
            return Err(ValidationError::UnknownLabel {
                field,
                value: label.clone(),
            });
        }
    }
    validate_connections("suctionPipeConnections", &pumping.suction_pipe_connections)?;
    validate_connections("pumpingPipeConnections", &pumping.pumping_pipe_connections)
}

fn validate_connections(
    field: &'static str,
    connections: &std::collections::BTreeMap<String, u32>,
) -> ValidationResult {
    for acronym in connections.keys() {
        if FittingKind::from_acronym(acronym).is_none() {
            return Err(ValidationError::UnknownLabel {
                field,
                value: acronym.clone(),
            });
        }
    }
    Ok(())
}

/// Predecessors must name another segment in the document and the chains
/// must be acyclic. A visited set bounds each walk.
fn validate_predecessors(segments: &[PipeSegmentDoc]) -> ValidationResult {
    let by_id: HashMap<u64, u64> = segments
        .iter()
        .map(|s| (s.id, s.predecessor_pipe_segment_id))
        .collect();

    for segment in segments {
        let pred = segment.predecessor_pipe_segment_id;
        if pred == 0 {
            continue;
        }
        if pred == segment.id {
            return Err(ValidationError::SelfReference { id: segment.id });
        }
        if !by_id.contains_key(&pred) {
            return Err(ValidationError::UnknownPredecessor {
                id: segment.id,
                predecessor: pred,
            });
        }

        let mut visited = HashSet::new();
        let mut current = segment.id;
        loop {
            if !visited.insert(current) {
                return Err(ValidationError::PredecessorCycle { id: segment.id });
            }
            match by_id.get(&current) {
                Some(&next) if next != 0 => current = next,
                _ => break,
            }
        }
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> ValidationResult {
    ensure_filled(Some(value), field)
        .map(|_| ())
        .map_err(|_| ValidationError::NotFinite { field, value })
}

fn non_negative(field: &'static str, value: f64) -> ValidationResult {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}
