//! Fitting kinds and their equivalent-length tables.
//!
//! Each fitting carries a 2×9 table of equivalent straight-pipe lengths in
//! meters, indexed by material row (smooth, rough) and nominal-diameter
//! column (DN20..DN110).

use crate::diameter::NominalDiameter;
use crate::material::Material;
use pw_core::Real;

type ElTable = [[Real; 9]; 2];

const J90: ElTable = [
    [1.1, 1.2, 1.5, 2.0, 3.3, 3.4, 3.7, 3.9, 4.3],
    [0.5, 0.7, 0.9, 1.2, 1.4, 1.9, 2.4, 2.8, 3.8],
];
const J45: ElTable = [
    [0.4, 0.5, 0.7, 1.0, 1.0, 1.3, 1.7, 1.8, 1.9],
    [0.2, 0.3, 0.4, 0.5, 0.6, 0.9, 1.1, 1.3, 1.7],
];
const C90: ElTable = [
    [0.4, 0.5, 0.6, 0.7, 1.2, 1.3, 1.4, 1.5, 1.6],
    [0.3, 0.5, 0.7, 0.8, 1.0, 1.4, 1.7, 2.0, 2.7],
];
const C45: ElTable = [
    [0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
    [0.2, 0.3, 0.4, 0.5, 0.6, 0.8, 1.0, 1.2, 1.5],
];
const TPD: ElTable = [
    [0.7, 0.8, 0.9, 1.5, 2.2, 2.3, 2.4, 2.5, 2.6],
    [0.1, 0.1, 0.2, 0.2, 0.2, 0.3, 0.4, 0.5, 0.7],
];
const TPL: ElTable = [
    [2.3, 2.4, 3.1, 4.6, 7.3, 7.6, 7.8, 8.0, 8.3],
    [0.7, 1.0, 1.4, 1.7, 2.1, 2.7, 3.4, 4.1, 5.5],
];
const TPBL: ElTable = [
    [2.3, 2.4, 3.1, 4.6, 7.3, 7.6, 7.8, 8.0, 8.3],
    [0.7, 1.0, 1.4, 1.7, 2.1, 2.7, 3.4, 4.1, 5.5],
];
const SC: ElTable = [
    [0.8, 0.9, 1.3, 1.4, 3.2, 3.3, 3.5, 3.7, 3.9],
    [0.4, 0.5, 0.7, 0.9, 1.0, 1.5, 1.9, 2.2, 3.2],
];
const EN: ElTable = [
    [0.3, 0.4, 0.5, 0.6, 1.0, 1.5, 1.6, 2.0, 2.2],
    [0.2, 0.2, 0.3, 0.4, 0.5, 0.7, 0.9, 1.1, 1.6],
];
const EB: ElTable = [
    [0.9, 1.0, 1.2, 1.8, 2.3, 2.8, 3.3, 3.7, 4.0],
    [0.4, 0.5, 0.7, 0.9, 1.0, 1.5, 1.9, 2.2, 3.3],
];
const RGA: ElTable = [
    [0.1, 0.2, 0.3, 0.4, 0.7, 0.8, 0.9, 0.9, 1.0],
    [0.1, 0.1, 0.2, 0.2, 0.3, 0.4, 0.4, 0.5, 0.7],
];
const RGL: ElTable = [
    [11.1, 11.4, 15.0, 22.0, 35.8, 37.9, 38.0, 40.0, 42.3],
    [4.9, 6.7, 8.2, 11.3, 13.4, 17.4, 21.0, 26.0, 34.0],
];
const RAN: ElTable = [
    [5.9, 6.2, 8.4, 10.5, 17.0, 18.5, 19.0, 20.0, 22.1],
    [2.6, 3.6, 4.6, 5.6, 6.7, 8.5, 10.0, 13.0, 17.0],
];
const VPC: ElTable = [
    [8.1, 9.5, 13.3, 15.5, 18.3, 23.7, 25.0, 26.8, 28.6],
    [3.6, 5.6, 7.3, 10.0, 11.6, 14.0, 17.0, 20.0, 23.0],
];
const VRL: ElTable = [
    [2.5, 2.7, 3.8, 4.9, 6.8, 7.1, 8.2, 9.3, 10.4],
    [1.1, 1.6, 2.1, 2.7, 3.2, 4.2, 5.2, 6.3, 8.4],
];
const VRP: ElTable = [
    [3.6, 4.1, 5.8, 7.4, 9.1, 10.8, 12.5, 14.2, 16.0],
    [1.6, 2.4, 3.2, 4.0, 4.8, 6.4, 8.1, 9.7, 12.9],
];

/// Pipe connection (fitting) kind, identified by its standard acronym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FittingKind {
    /// 90° elbow
    J90,
    /// 45° elbow
    J45,
    /// 90° bend
    C90,
    /// 45° bend
    C45,
    /// Tee, straight run
    Tpd,
    /// Tee, side outlet
    Tpl,
    /// Tee, double side outlet
    Tpbl,
    /// Pipe exit
    Sc,
    /// Flush entrance
    En,
    /// Re-entrant (borda) entrance
    Eb,
    /// Gate valve, open
    Rga,
    /// Globe valve, open
    Rgl,
    /// Angle valve, open
    Ran,
    /// Foot valve with strainer
    Vpc,
    /// Swing check valve (light)
    Vrl,
    /// Lift check valve (heavy)
    Vrp,
}

impl FittingKind {
    pub const ALL: [FittingKind; 16] = [
        FittingKind::J90,
        FittingKind::J45,
        FittingKind::C90,
        FittingKind::C45,
        FittingKind::Tpd,
        FittingKind::Tpl,
        FittingKind::Tpbl,
        FittingKind::Sc,
        FittingKind::En,
        FittingKind::Eb,
        FittingKind::Rga,
        FittingKind::Rgl,
        FittingKind::Ran,
        FittingKind::Vpc,
        FittingKind::Vrl,
        FittingKind::Vrp,
    ];

    pub fn acronym(self) -> &'static str {
        match self {
            FittingKind::J90 => "J90",
            FittingKind::J45 => "J45",
            FittingKind::C90 => "C90",
            FittingKind::C45 => "C45",
            FittingKind::Tpd => "TPD",
            FittingKind::Tpl => "TPL",
            FittingKind::Tpbl => "TPBL",
            FittingKind::Sc => "SC",
            FittingKind::En => "EN",
            FittingKind::Eb => "EB",
            FittingKind::Rga => "RGA",
            FittingKind::Rgl => "RGL",
            FittingKind::Ran => "RAN",
            FittingKind::Vpc => "VPC",
            FittingKind::Vrl => "VRL",
            FittingKind::Vrp => "VRP",
        }
    }

    pub fn from_acronym(acronym: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.acronym() == acronym)
    }

    fn table(self) -> &'static ElTable {
        match self {
            FittingKind::J90 => &J90,
            FittingKind::J45 => &J45,
            FittingKind::C90 => &C90,
            FittingKind::C45 => &C45,
            FittingKind::Tpd => &TPD,
            FittingKind::Tpl => &TPL,
            FittingKind::Tpbl => &TPBL,
            FittingKind::Sc => &SC,
            FittingKind::En => &EN,
            FittingKind::Eb => &EB,
            FittingKind::Rga => &RGA,
            FittingKind::Rgl => &RGL,
            FittingKind::Ran => &RAN,
            FittingKind::Vpc => &VPC,
            FittingKind::Vrl => &VRL,
            FittingKind::Vrp => &VRP,
        }
    }

    /// Equivalent straight-pipe length in meters for this fitting.
    pub fn equivalent_length_m(self, material: Material, diameter: NominalDiameter) -> Real {
        self.table()[material.table_row()][diameter.table_column()]
    }
}
