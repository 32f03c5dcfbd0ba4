//! Membership validators over the catalog value sets.
//!
//! These are pure predicates; callers decide whether non-membership is an
//! error and raise `PwError::InvalidParameter` themselves.

use crate::{FittingKind, HydrometerRating, Material, NominalDiameter, PressureUnit};
use pw_core::Real;

pub fn is_valid_unit(label: &str) -> bool {
    PressureUnit::from_label(label).is_some()
}

pub fn is_valid_material(label: &str) -> bool {
    Material::from_label(label).is_some()
}

pub fn is_valid_diameter_label(label: &str) -> bool {
    NominalDiameter::from_label(label).is_some()
}

pub fn is_valid_diameter_mm(mm: Real) -> bool {
    NominalDiameter::from_mm(mm).is_some()
}

pub fn is_valid_fitting(acronym: &str) -> bool {
    FittingKind::from_acronym(acronym).is_some()
}

pub fn is_valid_hydrometer_rating(max_flow_m3_h: Real) -> bool {
    HydrometerRating::from_max_flow(max_flow_m3_h).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_are_valid() {
        assert!(is_valid_unit("mca"));
        assert!(is_valid_unit("kPa"));
        assert!(is_valid_material("ROUGH"));
        assert!(is_valid_diameter_label("DN50"));
        assert!(is_valid_diameter_mm(44.0));
        assert!(is_valid_fitting("TPBL"));
        assert!(is_valid_hydrometer_rating(1.5));
        assert!(is_valid_hydrometer_rating(0.0));
    }

    #[test]
    fn non_members_are_rejected() {
        assert!(!is_valid_unit("bar"));
        assert!(!is_valid_material("PEX"));
        assert!(!is_valid_diameter_label("DN200"));
        assert!(!is_valid_diameter_mm(18.0));
        assert!(!is_valid_fitting("ELBOW"));
        assert!(!is_valid_hydrometer_rating(2.0));
    }
}
