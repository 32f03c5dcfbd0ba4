//! Document ⇄ model conversion.
//!
//! `to_model` validates first, so the lookups below cannot fail on a
//! document that passed; they still return errors instead of panicking so
//! the conversion stays total. The round trip is lossless: zero fitting
//! counts are dropped on the way in and never written on the way out.

use crate::schema::{PipeSegmentDoc, PipewayDoc, PumpingDoc, PumpingSegmentDoc};
use crate::validate::{ValidationError, validate_document};
use pw_catalog::{FittingKind, HydrometerRating, Material, NominalDiameter, PressureUnit};
use pw_core::SegmentId;
use pw_network::{BranchSide, FittingTally, PipeSegment, Pipeway, PumpingSegment};
use std::collections::BTreeMap;

pub fn to_model(doc: &PipewayDoc) -> Result<Pipeway, ValidationError> {
    validate_document(doc)?;

    let unit = PressureUnit::from_label(&doc.unit).ok_or_else(|| ValidationError::UnknownLabel {
        field: "unit",
        value: doc.unit.clone(),
    })?;
    let material =
        Material::from_label(&doc.material).ok_or_else(|| ValidationError::UnknownLabel {
            field: "material",
            value: doc.material.clone(),
        })?;

    let pumping = doc
        .pumping_segment_data
        .as_present()
        .map(pumping_to_model)
        .transpose()?;

    let segments = doc
        .list_of_pipe_segment_data
        .iter()
        .map(segment_to_model)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Pipeway::from_parts(unit, material, pumping, segments))
}

pub fn from_model(pipeway: &Pipeway) -> PipewayDoc {
    PipewayDoc {
        unit: pipeway.unit().label().to_owned(),
        material: pipeway.material().label().to_owned(),
        pumping_segment_data: match pipeway.pumping() {
            Some(pumping) => PumpingDoc::Present(pumping_from_model(pumping)),
            None => PumpingDoc::absent(),
        },
        list_of_pipe_segment_data: pipeway.segments().iter().map(segment_from_model).collect(),
    }
}

fn segment_to_model(doc: &PipeSegmentDoc) -> Result<PipeSegment, ValidationError> {
    let id = SegmentId::new(doc.id).ok_or(ValidationError::ZeroId)?;
    Ok(PipeSegment {
        id,
        name: doc.name.clone(),
        initial_pressure: doc.initial_pressure,
        length_m: doc.length,
        height_variation_m: doc.height_variation,
        predecessor: SegmentId::from_raw_predecessor(doc.predecessor_pipe_segment_id),
        nominal_diameter: diameter(doc.nominal_diameter.as_str(), "nominalDiameter")?,
        hydrometer: HydrometerRating::from_max_flow(doc.hydrometer_max_flow_rate).ok_or(
            ValidationError::OutOfRange {
                field: "hydrometerMaxFlowRate",
                value: doc.hydrometer_max_flow_rate,
                reason: "not a rated hydrometer value",
            },
        )?,
        flow_rate_weights: doc.flow_rate_weights,
        fittings: tally_to_model(&doc.pipe_connections, "pipeConnections")?,
    })
}

fn segment_from_model(segment: &PipeSegment) -> PipeSegmentDoc {
    PipeSegmentDoc {
        id: segment.id.get(),
        name: segment.name.clone(),
        initial_pressure: segment.initial_pressure,
        length: segment.length_m,
        height_variation: segment.height_variation_m,
        predecessor_pipe_segment_id: SegmentId::to_raw_predecessor(segment.predecessor),
        nominal_diameter: segment.nominal_diameter.label().to_owned(),
        hydrometer_max_flow_rate: segment.hydrometer.max_flow_m3_h(),
        flow_rate_weights: segment.flow_rate_weights,
        pipe_connections: tally_from_model(&segment.fittings),
    }
}

fn pumping_to_model(doc: &PumpingSegmentDoc) -> Result<PumpingSegment, ValidationError> {
    Ok(PumpingSegment {
        daily_consumption_m3: doc.daily_consumption,
        pump_yield_pct: doc.pump_yield,
        pumping_time_h: doc.pumping_time,
        suction: BranchSide {
            length_m: doc.suction_length,
            manometric_height_m: doc.suction_manometric_height,
            nominal_diameter: diameter(
                doc.suction_nominal_diameter.as_str(),
                "suctionNominalDiameter",
            )?,
            fittings: tally_to_model(&doc.suction_pipe_connections, "suctionPipeConnections")?,
        },
        discharge: BranchSide {
            length_m: doc.pumping_length,
            manometric_height_m: doc.pumping_manometric_height,
            nominal_diameter: diameter(
                doc.pumping_nominal_diameter.as_str(),
                "pumpingNominalDiameter",
            )?,
            fittings: tally_to_model(&doc.pumping_pipe_connections, "pumpingPipeConnections")?,
        },
    })
}

fn pumping_from_model(pumping: &PumpingSegment) -> PumpingSegmentDoc {
    PumpingSegmentDoc {
        daily_consumption: pumping.daily_consumption_m3,
        pump_yield: pumping.pump_yield_pct,
        pumping_time: pumping.pumping_time_h,
        suction_length: pumping.suction.length_m,
        suction_manometric_height: pumping.suction.manometric_height_m,
        suction_nominal_diameter: pumping.suction.nominal_diameter.label().to_owned(),
        suction_pipe_connections: tally_from_model(&pumping.suction.fittings),
        pumping_length: pumping.discharge.length_m,
        pumping_manometric_height: pumping.discharge.manometric_height_m,
        pumping_nominal_diameter: pumping.discharge.nominal_diameter.label().to_owned(),
        pumping_pipe_connections: tally_from_model(&pumping.discharge.fittings),
    }
}

fn diameter(label: &str, field: &'static str) -> Result<NominalDiameter, ValidationError> {
    NominalDiameter::from_label(label).ok_or_else(|| ValidationError::UnknownLabel {
        field,
        value: label.to_owned(),
    })
}

fn tally_to_model(
    connections: &BTreeMap<String, u32>,
    field: &'static str,
) -> Result<FittingTally, ValidationError> {
    let mut tally = FittingTally::new();
    for (acronym, &count) in connections {
        let fitting =
            FittingKind::from_acronym(acronym).ok_or_else(|| ValidationError::UnknownLabel {
                field,
                value: acronym.clone(),
            })?;
        tally.set(fitting, count);
    }
    Ok(tally)
}

fn tally_from_model(tally: &FittingTally) -> BTreeMap<String, u32> {
    tally
        .iter()
        .map(|(fitting, count)| (fitting.acronym().to_owned(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trips_through_the_model() {
        let mut pipeway = Pipeway::new();
        let mut seg = PipeSegment::new(SegmentId::new(1).unwrap(), "Barrilete");
        seg.initial_pressure = 20.0;
        seg.length_m = 8.0;
        seg.flow_rate_weights = 12.0;
        seg.hydrometer = HydrometerRating::Q3;
        seg.fittings.set(FittingKind::J90, 2);
        pipeway.add_or_replace(seg, true).unwrap();

        let mut child = PipeSegment::new(SegmentId::new(2).unwrap(), "Coluna");
        child.predecessor = SegmentId::new(1);
        child.nominal_diameter = NominalDiameter::Dn50;
        pipeway.add_or_replace(child, true).unwrap();
        pipeway.set_pumping(PumpingSegment::default());

        let doc = from_model(&pipeway);
        assert_eq!(doc.list_of_pipe_segment_data[0].hydrometer_max_flow_rate, 3.0);
        assert_eq!(doc.list_of_pipe_segment_data[1].predecessor_pipe_segment_id, 1);

        let back = to_model(&doc).unwrap();
        assert_eq!(back, pipeway);
    }

    #[test]
    fn zero_fitting_counts_are_not_persisted() {
        let mut pipeway = Pipeway::new();
        let mut seg = PipeSegment::new(SegmentId::new(1).unwrap(), "A");
        seg.fittings.set(FittingKind::Rga, 1);
        seg.fittings.set(FittingKind::Rga, 0);
        pipeway.add_or_replace(seg, true).unwrap();

        let doc = from_model(&pipeway);
        assert!(doc.list_of_pipe_segment_data[0].pipe_connections.is_empty());
    }

    #[test]
    fn to_model_rejects_invalid_documents() {
        let mut pipeway = Pipeway::new();
        pipeway
            .add_or_replace(PipeSegment::new(SegmentId::new(1).unwrap(), "A"), true)
            .unwrap();
        let mut doc = from_model(&pipeway);
        doc.list_of_pipe_segment_data[0].nominal_diameter = "DN15".to_owned();
        assert!(matches!(
            to_model(&doc),
            Err(ValidationError::UnknownLabel {
                field: "nominalDiameter",
                ..
            })
        ));
    }
}
