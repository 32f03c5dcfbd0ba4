//! The pipeway aggregate and its invariant-preserving operations.

use crate::error::{NetworkError, NetworkResult};
use crate::segment::{PipeSegment, PumpingSegment};
use pw_catalog::{Material, PressureUnit};
use pw_core::SegmentId;
use std::collections::HashSet;

/// A whole cold-water installation: its pressure unit, pipe material, the
/// optional pumping segment, and the pipe segments forming a forest linked
/// by predecessor ids.
///
/// Edits go through the methods below so that the structural invariants
/// hold at all times:
/// - names are unique case-insensitively on creation
/// - no segment is its own predecessor
/// - every predecessor id names another segment in the same pipeway
/// - predecessor chains are acyclic
/// - segments referenced as a predecessor cannot be deleted
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeway {
    unit: PressureUnit,
    material: Material,
    pumping: Option<PumpingSegment>,
    segments: Vec<PipeSegment>,
}

impl Default for Pipeway {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeway {
    /// Empty pipeway with the standard defaults (mca, smooth material).
    pub fn new() -> Self {
        Self {
            unit: PressureUnit::Mca,
            material: Material::Smooth,
            pumping: None,
            segments: Vec::new(),
        }
    }

    pub fn unit(&self) -> PressureUnit {
        self.unit
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn pumping(&self) -> Option<&PumpingSegment> {
        self.pumping.as_ref()
    }

    pub fn segments(&self) -> &[PipeSegment] {
        &self.segments
    }

    pub fn find_by_id(&self, id: SegmentId) -> Option<&PipeSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&PipeSegment> {
        self.segments.iter().find(|s| s.name == name)
    }

    pub fn index_of(&self, id: SegmentId) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    /// (id, name) pairs in insertion order, for list views.
    pub fn summaries(&self) -> Vec<(SegmentId, &str)> {
        self.segments
            .iter()
            .map(|s| (s.id, s.name.as_str()))
            .collect()
    }

    /// Add a new segment or replace the one sharing its id.
    ///
    /// `is_new` additionally enforces case-insensitive name uniqueness;
    /// edits of an existing segment keep their name reservation.
    pub fn add_or_replace(&mut self, segment: PipeSegment, is_new: bool) -> NetworkResult<()> {
        if is_new {
            let name_upper = segment.name.to_uppercase();
            if self
                .segments
                .iter()
                .any(|s| s.name.to_uppercase() == name_upper)
            {
                return Err(NetworkError::DuplicateName {
                    name: segment.name.clone(),
                });
            }
        }

        if segment.predecessor == Some(segment.id) {
            return Err(NetworkError::SelfReference { id: segment.id });
        }

        if let Some(pred) = segment.predecessor {
            if self.find_by_id(pred).is_none() {
                return Err(NetworkError::PredecessorNotFound {
                    id: segment.id,
                    predecessor: pred,
                });
            }
            self.check_no_cycle(segment.id, pred)?;
        }

        match self.index_of(segment.id) {
            Some(index) => self.segments[index] = segment,
            None => self.segments.push(segment),
        }
        Ok(())
    }

    /// Delete a segment; fails while any other segment references it.
    pub fn delete(&mut self, id: SegmentId) -> NetworkResult<()> {
        let index = self
            .index_of(id)
            .ok_or(NetworkError::NotFound { id })?;
        if self
            .segments
            .iter()
            .any(|s| s.id != id && s.predecessor == Some(id))
        {
            return Err(NetworkError::PredecessorInUse { id });
        }
        self.segments.remove(index);
        Ok(())
    }

    pub fn set_pumping(&mut self, pumping: PumpingSegment) {
        self.pumping = Some(pumping);
    }

    pub fn clear_pumping(&mut self) {
        self.pumping = None;
    }

    /// Switch the active pressure unit, rewriting every segment's initial
    /// pressure through the conversion factor.
    ///
    /// Setting the already-active unit is a no-op so repeated calls cannot
    /// drift stored pressures.
    pub fn set_unit(&mut self, unit: PressureUnit) {
        if unit == self.unit {
            return;
        }
        let factor = self.unit.factor_to(unit);
        for segment in &mut self.segments {
            segment.initial_pressure *= factor;
        }
        self.unit = unit;
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Rebuild a pipeway from already-validated parts (persistence layer).
    pub fn from_parts(
        unit: PressureUnit,
        material: Material,
        pumping: Option<PumpingSegment>,
        segments: Vec<PipeSegment>,
    ) -> Self {
        Self {
            unit,
            material,
            pumping,
            segments,
        }
    }

    /// Walking from `start` toward the root must not reach `edited`;
    /// otherwise the pending edit would close a cycle. A visited set guards
    /// against pre-existing corrupt chains.
    fn check_no_cycle(&self, edited: SegmentId, start: SegmentId) -> NetworkResult<()> {
        let mut visited = HashSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if id == edited || !visited.insert(id) {
                return Err(NetworkError::PredecessorCycle { id: edited });
            }
            current = self.find_by_id(id).and_then(|s| s.predecessor);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> SegmentId {
        SegmentId::new(raw).unwrap()
    }

    fn segment(raw_id: u64, name: &str, predecessor: Option<u64>) -> PipeSegment {
        let mut seg = PipeSegment::new(id(raw_id), name);
        seg.predecessor = predecessor.map(id);
        seg
    }

    #[test]
    fn new_pipeway_defaults() {
        let pipeway = Pipeway::new();
        assert_eq!(pipeway.unit(), PressureUnit::Mca);
        assert_eq!(pipeway.material(), Material::Smooth);
        assert!(pipeway.pumping().is_none());
        assert!(pipeway.segments().is_empty());
    }

    #[test]
    fn add_then_replace_in_place() {
        let mut pipeway = Pipeway::new();
        pipeway.add_or_replace(segment(1, "Barrilete", None), true).unwrap();
        pipeway.add_or_replace(segment(2, "Coluna", Some(1)), true).unwrap();

        let mut edited = segment(1, "Barrilete", None);
        edited.length_m = 12.0;
        pipeway.add_or_replace(edited, false).unwrap();

        assert_eq!(pipeway.segments().len(), 2);
        assert_eq!(pipeway.index_of(id(1)), Some(0));
        assert_eq!(pipeway.find_by_id(id(1)).unwrap().length_m, 12.0);
    }

    #[test]
    fn duplicate_name_is_case_insensitive() {
        let mut pipeway = Pipeway::new();
        pipeway.add_or_replace(segment(1, "Coluna", None), true).unwrap();
        let err = pipeway
            .add_or_replace(segment(2, "COLUNA", None), true)
            .unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateName { .. }));
        // An edit of the existing segment keeps its own name.
        pipeway.add_or_replace(segment(1, "Coluna", None), false).unwrap();
    }

    #[test]
    fn self_reference_rejected() {
        let mut pipeway = Pipeway::new();
        let err = pipeway
            .add_or_replace(segment(1, "A", Some(1)), true)
            .unwrap_err();
        assert!(matches!(err, NetworkError::SelfReference { .. }));
    }

    #[test]
    fn dangling_predecessor_rejected() {
        let mut pipeway = Pipeway::new();
        let err = pipeway
            .add_or_replace(segment(1, "A", Some(99)), true)
            .unwrap_err();
        assert!(matches!(err, NetworkError::PredecessorNotFound { .. }));
    }

    #[test]
    fn cycle_rejected_at_write_time() {
        let mut pipeway = Pipeway::new();
        pipeway.add_or_replace(segment(1, "A", None), true).unwrap();
        pipeway.add_or_replace(segment(2, "B", Some(1)), true).unwrap();
        pipeway.add_or_replace(segment(3, "C", Some(2)), true).unwrap();

        // Re-pointing A below C would close A -> B -> C -> A.
        let err = pipeway
            .add_or_replace(segment(1, "A", Some(3)), false)
            .unwrap_err();
        assert!(matches!(err, NetworkError::PredecessorCycle { .. }));
    }

    #[test]
    fn delete_guards_predecessors() {
        let mut pipeway = Pipeway::new();
        pipeway.add_or_replace(segment(1, "A", None), true).unwrap();
        pipeway.add_or_replace(segment(2, "B", Some(1)), true).unwrap();

        let err = pipeway.delete(id(1)).unwrap_err();
        assert!(matches!(err, NetworkError::PredecessorInUse { .. }));

        pipeway.delete(id(2)).unwrap();
        pipeway.delete(id(1)).unwrap();
        assert!(pipeway.segments().is_empty());

        let err = pipeway.delete(id(1)).unwrap_err();
        assert!(matches!(err, NetworkError::NotFound { .. }));
    }

    #[test]
    fn set_unit_rewrites_pressures_once() {
        let mut pipeway = Pipeway::new();
        let mut seg = segment(1, "A", None);
        seg.initial_pressure = 20.0;
        pipeway.add_or_replace(seg, true).unwrap();

        pipeway.set_unit(PressureUnit::Kpa);
        let converted = pipeway.find_by_id(id(1)).unwrap().initial_pressure;
        assert!((converted - 20.0 * 9.806421).abs() < 1e-9);

        // Idempotent: setting the same unit again must not re-multiply.
        pipeway.set_unit(PressureUnit::Kpa);
        assert_eq!(pipeway.find_by_id(id(1)).unwrap().initial_pressure, converted);
    }

    #[test]
    fn unit_round_trip_within_tolerance() {
        let mut pipeway = Pipeway::new();
        let mut seg = segment(1, "A", None);
        seg.initial_pressure = 15.0;
        pipeway.add_or_replace(seg, true).unwrap();

        pipeway.set_unit(PressureUnit::Kpa);
        pipeway.set_unit(PressureUnit::Mca);
        let back = pipeway.find_by_id(id(1)).unwrap().initial_pressure;
        assert!((back - 15.0).abs() / 15.0 < 1e-4);
    }

    #[test]
    fn pumping_segment_lifecycle() {
        let mut pipeway = Pipeway::new();
        pipeway.set_pumping(PumpingSegment::default());
        assert!(pipeway.pumping().is_some());
        pipeway.clear_pumping();
        assert!(pipeway.pumping().is_none());
    }

    #[test]
    fn lookup_and_summaries() {
        let mut pipeway = Pipeway::new();
        pipeway.add_or_replace(segment(1, "A", None), true).unwrap();
        pipeway.add_or_replace(segment(2, "B", Some(1)), true).unwrap();

        assert_eq!(pipeway.find_by_name("B").unwrap().id, id(2));
        assert!(pipeway.find_by_name("b").is_none());
        assert_eq!(
            pipeway.summaries(),
            vec![(id(1), "A"), (id(2), "B")]
        );
    }
}
