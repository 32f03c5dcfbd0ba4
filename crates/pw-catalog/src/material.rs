//! Pipe materials and their friction-loss parameters.

use pw_core::Real;

/// Pipe material class; selects the friction-loss parameter set and the
/// equivalent-length table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    #[default]
    Smooth,
    Rough,
}

/// Parameters of the unitary pressure loss correlation
/// `J = c · Q^flow_exp · d^diameter_exp` (Q in L/s, d in mm, J in kPa/m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionParams {
    pub coefficient: Real,
    pub flow_exp: Real,
    pub diameter_exp: Real,
}

impl Material {
    pub const ALL: [Material; 2] = [Material::Smooth, Material::Rough];

    pub fn label(self) -> &'static str {
        match self {
            Material::Smooth => "SMOOTH",
            Material::Rough => "ROUGH",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    pub fn friction_params(self) -> FrictionParams {
        match self {
            Material::Smooth => FrictionParams {
                coefficient: 20.2e6,
                flow_exp: 1.88,
                diameter_exp: -4.88,
            },
            Material::Rough => FrictionParams {
                coefficient: 8.69e6,
                flow_exp: 1.75,
                diameter_exp: -4.75,
            },
        }
    }

    /// Row index into the equivalent-length tables.
    pub(crate) fn table_row(self) -> usize {
        match self {
            Material::Smooth => 0,
            Material::Rough => 1,
        }
    }
}
