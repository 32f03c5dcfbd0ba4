//! Pump sizing for the pumping segment.

use crate::error::{EngineError, EngineResult};
use crate::hydraulics;
use pw_catalog::units::{self, labels};
use pw_core::{Real, ensure_finite};
use pw_network::{BranchSide, Pipeway, PumpingSegment};
use tracing::debug;

/// Everything the pumping engine derives for a pumping segment.
///
/// Friction losses are always expressed in mca here, regardless of the
/// pipeway's configured pressure unit, because the manometric height is a
/// head in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpingResult {
    pub flow_rate_m3_h: Real,
    /// Flow below the 15%-of-consumption floor.
    pub flow_rate_warning: bool,
    pub suction_velocity_m_s: Real,
    pub discharge_velocity_m_s: Real,
    pub velocity_warning: bool,
    pub manometric_height_m: Real,
    pub suction_equivalent_length_m: Real,
    pub discharge_equivalent_length_m: Real,
    pub suction_unitary_loss_mca_m: Real,
    pub discharge_unitary_loss_mca_m: Real,
    pub calculated_pump_power_cv: Real,
    pub selected_pump_power_cv: Real,
    /// Either side under the minimum pumping diameter, or suction not
    /// strictly wider than discharge.
    pub inadequate_diameters_warning: bool,
    pub flow_rate_unit: &'static str,
    pub manometric_height_unit: &'static str,
    pub equivalent_length_unit: &'static str,
    pub unitary_pressure_loss_unit: &'static str,
    pub power_unit: &'static str,
}

/// Commercial safety margin over the calculated power, tiered by power.
fn margin_factor(calculated_power_cv: Real) -> Real {
    if calculated_power_cv <= 2.0 {
        1.50
    } else if calculated_power_cv <= 5.0 {
        1.30
    } else if calculated_power_cv <= 10.0 {
        1.20
    } else if calculated_power_cv <= 20.0 {
        1.15
    } else {
        1.10
    }
}

fn finite(v: Real, what: &'static str) -> EngineResult<Real> {
    ensure_finite(v, what).map_err(|_| EngineError::NonFinite { what, value: v })
}

struct SideTerms {
    velocity_m_s: Real,
    equivalent_length_m: Real,
    unitary_loss_mca_m: Real,
}

fn side_terms(pipeway: &Pipeway, side: &BranchSide, flow_l_s: Real) -> EngineResult<SideTerms> {
    finite(side.length_m, "branch length")?;
    finite(side.manometric_height_m, "branch manometric height")?;
    let diameter_mm = side.nominal_diameter.mm();
    Ok(SideTerms {
        velocity_m_s: hydraulics::velocity_m_s(flow_l_s, diameter_mm),
        equivalent_length_m: hydraulics::equivalent_length_m(
            &side.fittings,
            pipeway.material(),
            side.nominal_diameter,
        ),
        unitary_loss_mca_m: hydraulics::unitary_loss_kpa_m(
            pipeway.material(),
            flow_l_s,
            diameter_mm,
        ) * units::KPA_TO_MCA,
    })
}

/// Suction/discharge hydraulics, total manometric height, required and
/// selected pump power, and adequacy warnings.
pub fn calculate_pumping(
    pipeway: &Pipeway,
    pumping: &PumpingSegment,
) -> EngineResult<PumpingResult> {
    let consumption = finite(pumping.daily_consumption_m3, "daily consumption")?;
    let pumping_time = finite(pumping.pumping_time_h, "pumping time")?;
    let pump_yield = finite(pumping.pump_yield_pct, "pump yield")?;
    if consumption < 0.0 {
        return Err(EngineError::InvalidParameter {
            what: "daily consumption must be non-negative",
        });
    }
    if !(pumping_time > 0.0 && pumping_time <= 24.0) {
        return Err(EngineError::InvalidParameter {
            what: "pumping time must be in (0, 24] hours",
        });
    }
    if !(pump_yield > 0.0 && pump_yield < 100.0) {
        return Err(EngineError::InvalidParameter {
            what: "pump yield must be in (0, 100) percent",
        });
    }

    let flow_rate_m3_h = consumption / pumping_time;
    let min_flow_rate_m3_h = 0.15 * consumption;

    // Forchheimer economic diameter, in mm.
    let daily_fraction = pumping_time / 24.0;
    let min_diameter_mm =
        (1300.0 / 60.0) * flow_rate_m3_h.sqrt() * daily_fraction.sqrt().sqrt();

    let flow_l_s = flow_rate_m3_h * units::M3_H_TO_L_S;
    let suction = side_terms(pipeway, &pumping.suction, flow_l_s)?;
    let discharge = side_terms(pipeway, &pumping.discharge, flow_l_s)?;

    let manometric_height_m = pumping.suction.manometric_height_m
        + pumping.discharge.manometric_height_m
        + (pumping.discharge.length_m + discharge.equivalent_length_m)
            * discharge.unitary_loss_mca_m
        + (pumping.suction.length_m + suction.equivalent_length_m) * suction.unitary_loss_mca_m;

    let calculated_pump_power_cv = (units::SPECIFIC_WATER_WEIGHT_KGF_M3
        * flow_rate_m3_h
        * units::M3_H_TO_M3_S
        * manometric_height_m)
        / (75.0 * (pump_yield / 100.0));
    let selected_pump_power_cv = calculated_pump_power_cv * margin_factor(calculated_pump_power_cv);

    let suction_mm = pumping.suction.nominal_diameter.mm();
    let discharge_mm = pumping.discharge.nominal_diameter.mm();
    debug!(
        flow_rate_m3_h,
        manometric_height_m, calculated_pump_power_cv, "pump sizing computed"
    );

    Ok(PumpingResult {
        flow_rate_m3_h,
        flow_rate_warning: flow_rate_m3_h < min_flow_rate_m3_h,
        suction_velocity_m_s: suction.velocity_m_s,
        discharge_velocity_m_s: discharge.velocity_m_s,
        velocity_warning: suction.velocity_m_s > units::VELOCITY_LIMIT_M_S
            || discharge.velocity_m_s > units::VELOCITY_LIMIT_M_S,
        manometric_height_m,
        suction_equivalent_length_m: suction.equivalent_length_m,
        discharge_equivalent_length_m: discharge.equivalent_length_m,
        suction_unitary_loss_mca_m: suction.unitary_loss_mca_m,
        discharge_unitary_loss_mca_m: discharge.unitary_loss_mca_m,
        calculated_pump_power_cv,
        selected_pump_power_cv,
        inadequate_diameters_warning: discharge_mm < min_diameter_mm
            || suction_mm < min_diameter_mm
            || suction_mm <= discharge_mm,
        flow_rate_unit: labels::M3_H,
        manometric_height_unit: labels::M,
        equivalent_length_unit: labels::M,
        unitary_pressure_loss_unit: "mca/m",
        power_unit: labels::CV,
    })
}
