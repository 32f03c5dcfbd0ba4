//! Fixture (sanitary appliance) flow-rate weights.
//!
//! Weights feed the probable-demand square-root method; callers sum the
//! weights of the fixtures served by a segment.

use pw_core::Real;

/// Sanitary fixture kind, identified by its standard acronym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    /// Toilet bowl with flush tank
    Bsc,
    /// Toilet bowl with flush valve
    Bsv,
    /// Drinking fountain
    Bh,
    /// Bidet (spray)
    Be,
    /// Bidet
    Bi,
    /// Shower head
    Chd,
    /// Electric shower
    Ch,
    /// Washbasin with multiple taps
    Lvrp,
    /// Washbasin
    Lv,
    /// Washing machine (clothes)
    Mcc,
    /// Washing machine with valve
    Mcv,
    /// Kitchen sink
    Pi,
    /// Kitchen sink with electric tap
    Pite,
    /// Laundry tank
    Tq,
    /// Garden tap
    Tjl,
}

impl FixtureKind {
    pub const ALL: [FixtureKind; 15] = [
        FixtureKind::Bsc,
        FixtureKind::Bsv,
        FixtureKind::Bh,
        FixtureKind::Be,
        FixtureKind::Bi,
        FixtureKind::Chd,
        FixtureKind::Ch,
        FixtureKind::Lvrp,
        FixtureKind::Lv,
        FixtureKind::Mcc,
        FixtureKind::Mcv,
        FixtureKind::Pi,
        FixtureKind::Pite,
        FixtureKind::Tq,
        FixtureKind::Tjl,
    ];

    pub fn acronym(self) -> &'static str {
        match self {
            FixtureKind::Bsc => "BSC",
            FixtureKind::Bsv => "BSV",
            FixtureKind::Bh => "BH",
            FixtureKind::Be => "BE",
            FixtureKind::Bi => "BI",
            FixtureKind::Chd => "CHD",
            FixtureKind::Ch => "CH",
            FixtureKind::Lvrp => "LVRP",
            FixtureKind::Lv => "LV",
            FixtureKind::Mcc => "MCC",
            FixtureKind::Mcv => "MCV",
            FixtureKind::Pi => "PI",
            FixtureKind::Pite => "PITE",
            FixtureKind::Tq => "TQ",
            FixtureKind::Tjl => "TJL",
        }
    }

    pub fn from_acronym(acronym: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.acronym() == acronym)
    }

    /// Flow-rate weight (fixture unit) of this appliance.
    pub fn flow_weight(self) -> Real {
        match self {
            FixtureKind::Bsc => 0.3,
            FixtureKind::Bsv => 32.0,
            FixtureKind::Bh => 1.0,
            FixtureKind::Be => 0.1,
            FixtureKind::Bi => 0.1,
            FixtureKind::Chd => 0.4,
            FixtureKind::Ch => 0.1,
            FixtureKind::Lvrp => 1.0,
            FixtureKind::Lv => 0.3,
            FixtureKind::Mcc => 0.3,
            FixtureKind::Mcv => 2.8,
            FixtureKind::Pi => 0.7,
            FixtureKind::Pite => 0.1,
            FixtureKind::Tq => 0.7,
            FixtureKind::Tjl => 0.4,
        }
    }
}
