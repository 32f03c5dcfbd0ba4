//! Nominal diameters (DN labels) and their internal diameters.

use pw_core::Real;

/// Labeled pipe size mapped to an internal diameter in millimeters.
///
/// The variant order matches the column order of the equivalent-length
/// tables, so `table_column` is just the position in `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum NominalDiameter {
    #[default]
    Dn20,
    Dn25,
    Dn32,
    Dn40,
    Dn50,
    Dn60,
    Dn75,
    Dn85,
    Dn110,
}

impl NominalDiameter {
    pub const ALL: [NominalDiameter; 9] = [
        NominalDiameter::Dn20,
        NominalDiameter::Dn25,
        NominalDiameter::Dn32,
        NominalDiameter::Dn40,
        NominalDiameter::Dn50,
        NominalDiameter::Dn60,
        NominalDiameter::Dn75,
        NominalDiameter::Dn85,
        NominalDiameter::Dn110,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NominalDiameter::Dn20 => "DN20",
            NominalDiameter::Dn25 => "DN25",
            NominalDiameter::Dn32 => "DN32",
            NominalDiameter::Dn40 => "DN40",
            NominalDiameter::Dn50 => "DN50",
            NominalDiameter::Dn60 => "DN60",
            NominalDiameter::Dn75 => "DN75",
            NominalDiameter::Dn85 => "DN85",
            NominalDiameter::Dn110 => "DN110",
        }
    }

    /// Internal diameter in millimeters.
    pub fn mm(self) -> Real {
        match self {
            NominalDiameter::Dn20 => 17.0,
            NominalDiameter::Dn25 => 21.6,
            NominalDiameter::Dn32 => 27.8,
            NominalDiameter::Dn40 => 35.2,
            NominalDiameter::Dn50 => 44.0,
            NominalDiameter::Dn60 => 53.5,
            NominalDiameter::Dn75 => 66.6,
            NominalDiameter::Dn85 => 75.6,
            NominalDiameter::Dn110 => 97.8,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    /// Reverse lookup by exact internal diameter value.
    pub fn from_mm(mm: Real) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.mm() == mm)
    }

    /// Column index into the equivalent-length tables.
    pub(crate) fn table_column(self) -> usize {
        Self::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }
}
