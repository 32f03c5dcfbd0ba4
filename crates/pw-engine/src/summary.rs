//! Bill-of-materials style summaries over a pipeway.

use pw_catalog::NominalDiameter;
use pw_core::Real;
use pw_network::Pipeway;
use std::collections::BTreeMap;

/// Total straight pipe length grouped by nominal diameter, in meters.
///
/// Diameters with no segments are omitted; iteration order follows the
/// catalog's size order.
pub fn length_by_diameter(pipeway: &Pipeway) -> BTreeMap<NominalDiameter, Real> {
    let mut totals = BTreeMap::new();
    for segment in pipeway.segments() {
        *totals.entry(segment.nominal_diameter).or_insert(0.0) += segment.length_m;
    }
    totals
}
