//! Pipe segment and pumping segment value types.

use pw_catalog::{FittingKind, HydrometerRating, NominalDiameter};
use pw_core::{Real, SegmentId};
use std::collections::BTreeMap;

/// Counts of fittings installed on a stretch of pipe.
///
/// Zero counts are equivalent to absence and are not stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FittingTally {
    counts: BTreeMap<FittingKind, u32>,
}

impl FittingTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a fitting kind; a zero count removes the entry.
    pub fn set(&mut self, fitting: FittingKind, count: u32) {
        if count == 0 {
            self.counts.remove(&fitting);
        } else {
            self.counts.insert(fitting, count);
        }
    }

    pub fn count(&self, fitting: FittingKind) -> u32 {
        self.counts.get(&fitting).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over fittings with non-zero counts, in acronym-table order.
    pub fn iter(&self) -> impl Iterator<Item = (FittingKind, u32)> + '_ {
        self.counts.iter().map(|(f, c)| (*f, *c))
    }
}

impl FromIterator<(FittingKind, u32)> for FittingTally {
    fn from_iter<T: IntoIterator<Item = (FittingKind, u32)>>(iter: T) -> Self {
        let mut tally = Self::new();
        for (fitting, count) in iter {
            // Accumulate so repeated kinds sum up.
            tally.set(fitting, tally.count(fitting) + count);
        }
        tally
    }
}

/// One stretch of pipe between two points of the network.
///
/// `predecessor` is `None` for a root segment (fed directly by the
/// reservoir); otherwise it names the upstream segment whose end pressure
/// feeds this one.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSegment {
    pub id: SegmentId,
    pub name: String,
    /// Pressure at the segment start, in the pipeway's active unit.
    pub initial_pressure: Real,
    pub length_m: Real,
    /// Signed height change along the segment; positive means descending
    /// (gains pressure).
    pub height_variation_m: Real,
    pub predecessor: Option<SegmentId>,
    pub nominal_diameter: NominalDiameter,
    pub hydrometer: HydrometerRating,
    /// Sum of fixture flow-rate weights served by the segment.
    pub flow_rate_weights: Real,
    pub fittings: FittingTally,
}

impl PipeSegment {
    /// New segment with the standard defaults for a blank form.
    pub fn new(id: SegmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            initial_pressure: 0.0,
            length_m: 0.0,
            height_variation_m: 0.0,
            predecessor: None,
            nominal_diameter: NominalDiameter::Dn20,
            hydrometer: HydrometerRating::None,
            flow_rate_weights: 0.0,
            fittings: FittingTally::new(),
        }
    }
}

/// One side (suction or discharge) of the pumping installation.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchSide {
    pub length_m: Real,
    pub manometric_height_m: Real,
    pub nominal_diameter: NominalDiameter,
    pub fittings: FittingTally,
}

impl BranchSide {
    pub fn new(nominal_diameter: NominalDiameter) -> Self {
        Self {
            length_m: 0.0,
            manometric_height_m: 0.0,
            nominal_diameter,
            fittings: FittingTally::new(),
        }
    }
}

/// The pumping installation of a pipeway (at most one).
#[derive(Debug, Clone, PartialEq)]
pub struct PumpingSegment {
    pub daily_consumption_m3: Real,
    /// Pump efficiency in percent, 0 < yield < 100.
    pub pump_yield_pct: Real,
    /// Daily pumping time in hours, 0 < t ≤ 24.
    pub pumping_time_h: Real,
    pub suction: BranchSide,
    pub discharge: BranchSide,
}

impl Default for PumpingSegment {
    /// Standard defaults for a blank form: 60% yield, 6 h/day, DN50
    /// suction, DN60 discharge.
    fn default() -> Self {
        Self {
            daily_consumption_m3: 0.0,
            pump_yield_pct: 60.0,
            pumping_time_h: 6.0,
            suction: BranchSide::new(NominalDiameter::Dn50),
            discharge: BranchSide::new(NominalDiameter::Dn60),
        }
    }
}
