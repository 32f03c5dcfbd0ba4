//! Pressure propagation along the predecessor chain.

use crate::error::{EngineError, EngineResult};
use crate::hydraulics;
use pw_catalog::units::{self, labels};
use pw_core::{Real, SegmentId, ensure_finite};
use pw_network::{PipeSegment, Pipeway};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Everything the pressure engine derives for one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureResult {
    pub flow_rate_l_s: Real,
    pub velocity_m_s: Real,
    /// Distributed loss per meter, in the pipeway's active pressure unit.
    pub unitary_pressure_loss: Real,
    pub equivalent_length_m: Real,
    /// Distributed + localized + hydrometer loss over the whole segment.
    pub pressure_loss: Real,
    /// Pressure at the segment end, ancestors folded in.
    pub pressure: Real,
    pub velocity_warning: bool,
    pub pressure_min_warning: bool,
    pub pressure_max_warning: bool,
    pub flow_rate_unit: &'static str,
    pub velocity_unit: &'static str,
    pub pressure_unit: &'static str,
    pub unitary_pressure_loss_unit: String,
    pub equivalent_length_unit: &'static str,
}

/// Per-segment terms before ancestors are folded in.
struct LocalTerms {
    flow_rate_l_s: Real,
    velocity_m_s: Real,
    unitary_loss: Real,
    equivalent_length_m: Real,
    loss: Real,
    /// Initial pressure plus the height-variation column of water.
    local_pressure: Real,
}

fn finite(v: Real, what: &'static str) -> EngineResult<Real> {
    ensure_finite(v, what).map_err(|_| EngineError::NonFinite { what, value: v })
}

fn local_terms(pipeway: &Pipeway, segment: &PipeSegment) -> EngineResult<LocalTerms> {
    let initial_pressure = finite(segment.initial_pressure, "initial pressure")?;
    let length_m = finite(segment.length_m, "segment length")?;
    let height_variation_m = finite(segment.height_variation_m, "height variation")?;
    let weights = finite(segment.flow_rate_weights, "flow rate weights")?;
    if weights < 0.0 {
        return Err(EngineError::InvalidParameter {
            what: "flow rate weights must be non-negative",
        });
    }
    if length_m < 0.0 {
        return Err(EngineError::InvalidParameter {
            what: "segment length must be non-negative",
        });
    }

    // The loss correlations yield kPa; fold into the active unit here.
    let unit_factor = pipeway.unit().factor_from_kpa();
    let diameter_mm = segment.nominal_diameter.mm();

    let flow_rate_l_s = hydraulics::flow_rate_l_s(weights);
    let velocity_m_s = hydraulics::velocity_m_s(flow_rate_l_s, diameter_mm);
    let unitary_loss =
        hydraulics::unitary_loss_kpa_m(pipeway.material(), flow_rate_l_s, diameter_mm)
            * unit_factor;
    let hydrometer_loss = segment.hydrometer.pressure_loss_kpa(flow_rate_l_s) * unit_factor;
    let equivalent_length_m = hydraulics::equivalent_length_m(
        &segment.fittings,
        pipeway.material(),
        segment.nominal_diameter,
    );

    let loss = (equivalent_length_m + length_m) * unitary_loss + hydrometer_loss;
    let local_pressure = initial_pressure
        + height_variation_m * units::SPECIFIC_WATER_WEIGHT_KN_M3 * unit_factor;

    Ok(LocalTerms {
        flow_rate_l_s,
        velocity_m_s,
        unitary_loss,
        equivalent_length_m,
        loss,
        local_pressure,
    })
}

/// End pressure of `segment`, walking toward the root iteratively.
///
/// The walk stops at a root or at the first memoized ancestor, then folds
/// pressures back down, memoizing every segment it touched. The visited
/// set turns a corrupted cyclic chain into an error instead of a hang.
fn end_pressure(
    pipeway: &Pipeway,
    segment: &PipeSegment,
    memo: &mut HashMap<SegmentId, Real>,
) -> EngineResult<Real> {
    if let Some(p) = memo.get(&segment.id) {
        return Ok(*p);
    }

    let mut chain: Vec<&PipeSegment> = Vec::new();
    let mut visited: HashSet<SegmentId> = HashSet::new();
    let mut current = segment;
    loop {
        if !visited.insert(current.id) {
            return Err(EngineError::PredecessorCycle { id: segment.id });
        }
        chain.push(current);
        match current.predecessor {
            None => break,
            Some(pred_id) => {
                if memo.contains_key(&pred_id) {
                    break;
                }
                current = pipeway
                    .find_by_id(pred_id)
                    .ok_or(EngineError::SegmentNotFound { id: pred_id })?;
            }
        }
    }

    let mut upstream = match chain.last().and_then(|s| s.predecessor) {
        Some(pred_id) => memo.get(&pred_id).copied().unwrap_or(0.0),
        None => 0.0,
    };
    while let Some(s) = chain.pop() {
        let terms = local_terms(pipeway, s)?;
        let pressure = terms.local_pressure + upstream - terms.loss;
        memo.insert(s.id, pressure);
        upstream = pressure;
    }

    Ok(upstream)
}

fn build_result(
    pipeway: &Pipeway,
    segment: &PipeSegment,
    pressure: Real,
) -> EngineResult<PressureResult> {
    let terms = local_terms(pipeway, segment)?;
    let unit = pipeway.unit();
    Ok(PressureResult {
        flow_rate_l_s: terms.flow_rate_l_s,
        velocity_m_s: terms.velocity_m_s,
        unitary_pressure_loss: terms.unitary_loss,
        equivalent_length_m: terms.equivalent_length_m,
        pressure_loss: terms.loss,
        pressure,
        velocity_warning: terms.velocity_m_s > units::VELOCITY_LIMIT_M_S,
        pressure_min_warning: pressure < unit.min_pressure(),
        pressure_max_warning: pressure > unit.max_pressure(),
        flow_rate_unit: labels::L_S,
        velocity_unit: labels::M_S,
        pressure_unit: unit.label(),
        unitary_pressure_loss_unit: format!("{} / {}", unit.label(), labels::M),
        equivalent_length_unit: labels::M,
    })
}

/// Flow, velocity, losses and end pressure for one segment, folding in
/// every ancestor along the predecessor chain.
pub fn calculate_pressure(pipeway: &Pipeway, id: SegmentId) -> EngineResult<PressureResult> {
    let segment = pipeway
        .find_by_id(id)
        .ok_or(EngineError::SegmentNotFound { id })?;
    let mut memo = HashMap::new();
    let pressure = end_pressure(pipeway, segment, &mut memo)?;
    build_result(pipeway, segment, pressure)
}

/// Recompute every segment in one pass.
///
/// Ancestor pressures are memoized across the pass, so the cost is linear
/// in the segment count; each entry is identical to a standalone
/// `calculate_pressure` call.
pub fn pressure_table(pipeway: &Pipeway) -> EngineResult<Vec<(SegmentId, PressureResult)>> {
    debug!(segments = pipeway.segments().len(), "recomputing pressure table");
    let mut memo = HashMap::new();
    let mut table = Vec::with_capacity(pipeway.segments().len());
    for segment in pipeway.segments() {
        let pressure = end_pressure(pipeway, segment, &mut memo)?;
        table.push((segment.id, build_result(pipeway, segment, pressure)?));
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_catalog::{FittingKind, HydrometerRating, Material, PressureUnit, units::KPA_TO_MCA};
    use pw_network::FittingTally;

    fn id(raw: u64) -> SegmentId {
        SegmentId::new(raw).unwrap()
    }

    fn root_segment() -> PipeSegment {
        let mut seg = PipeSegment::new(id(1), "Barrilete");
        seg.initial_pressure = 20.0;
        seg.length_m = 10.0;
        seg.flow_rate_weights = 1.0;
        seg
    }

    fn kpa_pipeway(segments: Vec<PipeSegment>) -> Pipeway {
        Pipeway::from_parts(PressureUnit::Kpa, Material::Smooth, None, segments)
    }

    #[test]
    fn single_root_segment_exact_values() {
        // DN20 (17.0 mm), smooth, weights 1.0, length 10 m, no fittings,
        // no hydrometer, no height variation, 20 kPa at the start.
        let pipeway = kpa_pipeway(vec![root_segment()]);
        let result = calculate_pressure(&pipeway, id(1)).unwrap();

        let expected_unitary = 20.2e6 * 0.3_f64.powf(1.88) * 17.0_f64.powf(-4.88);
        assert_eq!(result.flow_rate_l_s, 0.3);
        assert!((result.velocity_m_s - 1.3217).abs() < 1e-4);
        assert!((result.unitary_pressure_loss - expected_unitary).abs() < 1e-12);
        assert_eq!(result.equivalent_length_m, 0.0);
        assert!((result.pressure_loss - 10.0 * expected_unitary).abs() < 1e-12);
        assert!((result.pressure - (20.0 - 10.0 * expected_unitary)).abs() < 1e-12);
        assert!(!result.velocity_warning);
        assert_eq!(result.pressure_unit, "kPa");
        assert_eq!(result.unitary_pressure_loss_unit, "kPa / m");
    }

    #[test]
    fn mca_unit_scales_losses() {
        let mut pipeway = kpa_pipeway(vec![root_segment()]);
        let in_kpa = calculate_pressure(&pipeway, id(1)).unwrap();
        pipeway.set_unit(PressureUnit::Mca);
        let in_mca = calculate_pressure(&pipeway, id(1)).unwrap();

        assert!(
            (in_mca.unitary_pressure_loss - in_kpa.unitary_pressure_loss * KPA_TO_MCA).abs()
                < 1e-12
        );
        assert_eq!(in_mca.pressure_unit, "mca");
        // Velocity is unit independent.
        assert_eq!(in_mca.velocity_m_s, in_kpa.velocity_m_s);
    }

    #[test]
    fn child_pressure_composes_with_parent() {
        let mut child = PipeSegment::new(id(2), "Coluna");
        child.initial_pressure = 5.0;
        child.length_m = 4.0;
        child.height_variation_m = 3.0;
        child.flow_rate_weights = 0.5;
        child.predecessor = Some(id(1));

        let pipeway = kpa_pipeway(vec![root_segment(), child]);
        let parent = calculate_pressure(&pipeway, id(1)).unwrap();
        let child = calculate_pressure(&pipeway, id(2)).unwrap();

        // child.pressure = parent.pressure + child.local − child.loss
        let child_local = 5.0 + 3.0 * 10.0; // kPa: factor 1
        assert!(
            (child.pressure - (parent.pressure + child_local - child.pressure_loss)).abs() < 1e-12
        );
    }

    #[test]
    fn height_variation_uses_converted_water_weight_in_mca() {
        let mut seg = root_segment();
        seg.flow_rate_weights = 0.0;
        seg.length_m = 0.0;
        seg.height_variation_m = 2.0;
        seg.initial_pressure = 1.0;
        let pipeway =
            Pipeway::from_parts(PressureUnit::Mca, Material::Smooth, None, vec![seg]);

        let result = calculate_pressure(&pipeway, id(1)).unwrap();
        assert!((result.pressure - (1.0 + 2.0 * 10.0 * KPA_TO_MCA)).abs() < 1e-12);
    }

    #[test]
    fn hydrometer_loss_is_added() {
        let mut with_meter = root_segment();
        with_meter.hydrometer = HydrometerRating::Q1_5;
        let plain = kpa_pipeway(vec![root_segment()]);
        let metered = kpa_pipeway(vec![with_meter]);

        let p_plain = calculate_pressure(&plain, id(1)).unwrap();
        let p_metered = calculate_pressure(&metered, id(1)).unwrap();

        let expected = (36.0 * 0.3 / 1.5_f64).powi(2);
        assert!(
            (p_metered.pressure_loss - p_plain.pressure_loss - expected).abs() < 1e-9
        );
    }

    #[test]
    fn fittings_extend_equivalent_length() {
        let mut seg = root_segment();
        seg.fittings = [(FittingKind::J90, 2), (FittingKind::Rga, 1)]
            .into_iter()
            .collect();
        let pipeway = kpa_pipeway(vec![seg]);
        let result = calculate_pressure(&pipeway, id(1)).unwrap();
        assert!((result.equivalent_length_m - (2.0 * 1.1 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn velocity_warning_on_fast_narrow_pipe() {
        let mut seg = root_segment();
        seg.flow_rate_weights = 16.0; // flow 1.2 L/s in DN20 → ~5.3 m/s
        let pipeway = kpa_pipeway(vec![seg]);
        let result = calculate_pressure(&pipeway, id(1)).unwrap();
        assert!(result.velocity_warning);
    }

    #[test]
    fn pressure_limit_warnings_follow_unit() {
        let mut low = root_segment();
        low.initial_pressure = 5.0; // below the 10 kPa floor after losses
        let pipeway = kpa_pipeway(vec![low]);
        let result = calculate_pressure(&pipeway, id(1)).unwrap();
        assert!(result.pressure_min_warning);
        assert!(!result.pressure_max_warning);

        let mut high = root_segment();
        high.initial_pressure = 500.0;
        let pipeway = kpa_pipeway(vec![high]);
        let result = calculate_pressure(&pipeway, id(1)).unwrap();
        assert!(result.pressure_max_warning);
    }

    #[test]
    fn missing_segment_and_dangling_predecessor_fail() {
        let pipeway = kpa_pipeway(vec![root_segment()]);
        let err = calculate_pressure(&pipeway, id(9)).unwrap_err();
        assert!(matches!(err, EngineError::SegmentNotFound { .. }));

        let mut orphan = PipeSegment::new(id(2), "Orphan");
        orphan.predecessor = Some(id(7));
        let pipeway = kpa_pipeway(vec![orphan]);
        let err = calculate_pressure(&pipeway, id(2)).unwrap_err();
        assert!(matches!(err, EngineError::SegmentNotFound { .. }));
    }

    #[test]
    fn cyclic_chain_fails_instead_of_hanging() {
        // Corrupted data constructed directly from parts; the model's edit
        // operations would have rejected it.
        let mut a = PipeSegment::new(id(1), "A");
        a.predecessor = Some(id(2));
        let mut b = PipeSegment::new(id(2), "B");
        b.predecessor = Some(id(1));
        let pipeway = kpa_pipeway(vec![a, b]);

        let err = calculate_pressure(&pipeway, id(1)).unwrap_err();
        assert!(matches!(err, EngineError::PredecessorCycle { .. }));
    }

    #[test]
    fn non_finite_input_rejected() {
        let mut seg = root_segment();
        seg.length_m = f64::NAN;
        let pipeway = kpa_pipeway(vec![seg]);
        let err = calculate_pressure(&pipeway, id(1)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::NonFinite {
                what: "segment length",
                value,
            } if value.is_nan()
        ));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let mut child = PipeSegment::new(id(2), "Coluna");
        child.predecessor = Some(id(1));
        child.flow_rate_weights = 2.0;
        child.length_m = 7.0;
        let pipeway = kpa_pipeway(vec![root_segment(), child]);

        let first = calculate_pressure(&pipeway, id(2)).unwrap();
        let second = calculate_pressure(&pipeway, id(2)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn table_matches_standalone_calls() {
        let mut b = PipeSegment::new(id(2), "B");
        b.predecessor = Some(id(1));
        b.flow_rate_weights = 2.0;
        b.length_m = 7.0;
        let mut c = PipeSegment::new(id(3), "C");
        c.predecessor = Some(id(2));
        c.flow_rate_weights = 1.5;
        c.length_m = 3.0;
        let pipeway = kpa_pipeway(vec![root_segment(), b, c]);

        let table = pressure_table(&pipeway).unwrap();
        assert_eq!(table.len(), 3);
        for (seg_id, entry) in &table {
            let standalone = calculate_pressure(&pipeway, *seg_id).unwrap();
            assert_eq!(*entry, standalone);
        }
    }
}
