//! Shared NBR 5626 hydraulic formulas.
//!
//! Empirical correlations in fixed tabulated units: flow in L/s, diameter
//! in mm, losses in kPa per meter of pipe. Unit conversion into the
//! pipeway's active pressure unit happens in the engines.

use pw_catalog::{Material, NominalDiameter};
use pw_core::Real;
use pw_network::FittingTally;

/// Probable simultaneous demand via the square-root (fixture unit) method.
pub fn flow_rate_l_s(sum_of_flow_weights: Real) -> Real {
    0.3 * sum_of_flow_weights.sqrt()
}

/// Mean flow velocity in m/s for a flow in L/s through a diameter in mm.
pub fn velocity_m_s(flow_rate_l_s: Real, diameter_mm: Real) -> Real {
    4.0e3 * flow_rate_l_s / (diameter_mm.powi(2) * std::f64::consts::PI)
}

/// Distributed pressure loss per meter of pipe, in kPa/m.
pub fn unitary_loss_kpa_m(material: Material, flow_rate_l_s: Real, diameter_mm: Real) -> Real {
    let p = material.friction_params();
    p.coefficient * flow_rate_l_s.powf(p.flow_exp) * diameter_mm.powf(p.diameter_exp)
}

/// Total equivalent straight-pipe length of a fitting tally, in meters.
///
/// Linear in the counts: each fitting contributes `count × table value`.
pub fn equivalent_length_m(
    fittings: &FittingTally,
    material: Material,
    diameter: NominalDiameter,
) -> Real {
    fittings
        .iter()
        .map(|(fitting, count)| Real::from(count) * fitting.equivalent_length_m(material, diameter))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_catalog::FittingKind;
    use pw_core::{Tolerances, nearly_equal};

    #[test]
    fn flow_rate_square_root_method() {
        let tol = Tolerances::default();
        assert!(nearly_equal(flow_rate_l_s(1.0), 0.3, tol));
        assert!(nearly_equal(flow_rate_l_s(4.0), 0.6, tol));
        assert_eq!(flow_rate_l_s(0.0), 0.0);
    }

    #[test]
    fn velocity_formula() {
        // 4000·0.3 / (π·17²) ≈ 1.3217 m/s
        let v = velocity_m_s(0.3, 17.0);
        assert!((v - 1.3217).abs() < 1e-4);
    }

    #[test]
    fn unitary_loss_matches_material_correlations() {
        let smooth = unitary_loss_kpa_m(Material::Smooth, 0.3, 17.0);
        let rough = unitary_loss_kpa_m(Material::Rough, 0.3, 17.0);
        let tol = Tolerances::default();
        assert!(nearly_equal(
            smooth,
            20.2e6 * 0.3_f64.powf(1.88) * 17.0_f64.powf(-4.88),
            tol
        ));
        assert!(nearly_equal(
            rough,
            8.69e6 * 0.3_f64.powf(1.75) * 17.0_f64.powf(-4.75),
            tol
        ));
        assert_ne!(smooth, rough);
    }

    #[test]
    fn zero_flow_has_zero_loss() {
        assert_eq!(unitary_loss_kpa_m(Material::Smooth, 0.0, 17.0), 0.0);
    }

    #[test]
    fn equivalent_length_is_linear_in_counts() {
        let single: FittingTally = [(FittingKind::J90, 1)].into_iter().collect();
        let triple: FittingTally = [(FittingKind::J90, 3)].into_iter().collect();
        let el1 = equivalent_length_m(&single, Material::Smooth, NominalDiameter::Dn20);
        let el3 = equivalent_length_m(&triple, Material::Smooth, NominalDiameter::Dn20);
        let tol = Tolerances::default();
        assert!(nearly_equal(el3, 3.0 * el1, tol));
        assert_eq!(el1, 1.1);
    }

    #[test]
    fn equivalent_length_sums_across_kinds() {
        let tally: FittingTally = [(FittingKind::J90, 2), (FittingKind::Rga, 1)]
            .into_iter()
            .collect();
        let el = equivalent_length_m(&tally, Material::Smooth, NominalDiameter::Dn20);
        let tol = Tolerances::default();
        assert!(nearly_equal(el, 2.0 * 1.1 + 0.1, tol));
    }
}
