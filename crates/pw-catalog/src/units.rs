//! Pressure units, conversion factors and safety limits.

use pw_core::Real;

/// Specific weight of water, used for height-to-pressure conversion.
pub const SPECIFIC_WATER_WEIGHT_KN_M3: Real = 10.0;
/// Specific weight of water in kgf/m³, used in the pump power formula.
pub const SPECIFIC_WATER_WEIGHT_KGF_M3: Real = 1000.0;

/// Maximum admissible flow velocity in any pipe segment.
pub const VELOCITY_LIMIT_M_S: Real = 3.0;

pub const KPA_TO_MCA: Real = 0.101974;
pub const MCA_TO_KPA: Real = 9.806421;
pub const M3_H_TO_L_S: Real = 0.277778;
pub const M3_H_TO_M3_S: Real = 1.0 / 3600.0;

/// Unit labels echoed in result records.
pub mod labels {
    pub const L_S: &str = "L/s";
    pub const M3_H: &str = "m³/h";
    pub const M_S: &str = "m/s";
    pub const MM: &str = "mm";
    pub const M: &str = "m";
    pub const CV: &str = "CV";
    pub const W: &str = "W";
    pub const M3: &str = "m³";
    pub const H: &str = "h";
}

/// Pressure unit a pipeway is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressureUnit {
    Kpa,
    #[default]
    Mca,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 2] = [PressureUnit::Kpa, PressureUnit::Mca];

    pub fn label(self) -> &'static str {
        match self {
            PressureUnit::Kpa => "kPa",
            PressureUnit::Mca => "mca",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }

    /// Factor that converts a pressure expressed in kPa into this unit.
    ///
    /// The friction and hydrometer loss formulas natively yield kPa.
    pub fn factor_from_kpa(self) -> Real {
        match self {
            PressureUnit::Kpa => 1.0,
            PressureUnit::Mca => KPA_TO_MCA,
        }
    }

    /// Factor that converts a pressure in this unit into `target`.
    pub fn factor_to(self, target: PressureUnit) -> Real {
        match (self, target) {
            (PressureUnit::Kpa, PressureUnit::Mca) => KPA_TO_MCA,
            (PressureUnit::Mca, PressureUnit::Kpa) => MCA_TO_KPA,
            _ => 1.0,
        }
    }

    /// Minimum admissible service pressure in this unit.
    pub fn min_pressure(self) -> Real {
        match self {
            PressureUnit::Kpa => 10.0,
            PressureUnit::Mca => 1.0,
        }
    }

    /// Maximum admissible service pressure in this unit.
    pub fn max_pressure(self) -> Real {
        match self {
            PressureUnit::Kpa => 400.0,
            PressureUnit::Mca => 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::{Tolerances, nearly_equal};

    #[test]
    fn labels_round_trip() {
        for unit in PressureUnit::ALL {
            assert_eq!(PressureUnit::from_label(unit.label()), Some(unit));
        }
        assert_eq!(PressureUnit::from_label("psi"), None);
    }

    #[test]
    fn conversion_factors_nearly_invert() {
        // Tabulated factors, not exact inverses; they agree to ~1e-6.
        let tol = Tolerances {
            abs: 1e-6,
            rel: 1e-6,
        };
        assert!(nearly_equal(KPA_TO_MCA * MCA_TO_KPA, 1.0, tol));
    }

    #[test]
    fn same_unit_factor_is_one() {
        for unit in PressureUnit::ALL {
            assert_eq!(unit.factor_to(unit), 1.0);
        }
    }

    #[test]
    fn limits_match_standard() {
        assert_eq!(PressureUnit::Kpa.min_pressure(), 10.0);
        assert_eq!(PressureUnit::Kpa.max_pressure(), 400.0);
        assert_eq!(PressureUnit::Mca.min_pressure(), 1.0);
        assert_eq!(PressureUnit::Mca.max_pressure(), 40.0);
    }
}
