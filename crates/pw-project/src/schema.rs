//! Pipeway document schema.
//!
//! The on-disk project format: camelCase keys, raw `0` for "no
//! predecessor", and an empty object standing in for "no pumping segment".
//! The key-set is strict in both directions: unknown fields are rejected
//! and required fields must be present, so the model layer never sees a
//! malformed record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PipewayDoc {
    pub unit: String,
    pub material: String,
    pub pumping_segment_data: PumpingDoc,
    pub list_of_pipe_segment_data: Vec<PipeSegmentDoc>,
}

/// Either a full pumping record or the `{}` sentinel for "none".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PumpingDoc {
    Present(PumpingSegmentDoc),
    Absent(EmptyDoc),
}

impl PumpingDoc {
    pub fn as_present(&self) -> Option<&PumpingSegmentDoc> {
        match self {
            PumpingDoc::Present(doc) => Some(doc),
            PumpingDoc::Absent(_) => None,
        }
    }

    pub fn absent() -> Self {
        PumpingDoc::Absent(EmptyDoc {})
    }
}

/// Matches exactly the empty object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EmptyDoc {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PipeSegmentDoc {
    pub id: u64,
    pub name: String,
    pub initial_pressure: f64,
    pub length: f64,
    pub height_variation: f64,
    /// 0 encodes a root segment.
    pub predecessor_pipe_segment_id: u64,
    pub nominal_diameter: String,
    /// Rated hydrometer max flow in m³/h; 0 means no hydrometer.
    pub hydrometer_max_flow_rate: f64,
    pub flow_rate_weights: f64,
    /// Fitting acronym → count; absent acronyms count zero.
    pub pipe_connections: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PumpingSegmentDoc {
    pub daily_consumption: f64,
    pub pump_yield: f64,
    pub pumping_time: f64,
    pub suction_length: f64,
    pub suction_manometric_height: f64,
    pub suction_nominal_diameter: String,
    pub suction_pipe_connections: BTreeMap<String, u32>,
    pub pumping_length: f64,
    pub pumping_manometric_height: f64,
    pub pumping_nominal_diameter: String,
    pub pumping_pipe_connections: BTreeMap<String, u32>,
}
