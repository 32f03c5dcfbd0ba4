use core::fmt;
use core::num::NonZeroU64;

/// Compact, stable identifier for a pipe segment.
///
/// - `NonZero` enables `Option<SegmentId>` to be pointer-optimized
/// - the persisted document encodes "no predecessor" as a raw `0`, which
///   maps to `None` here, so a self-referencing root is unrepresentable
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(NonZeroU64);

impl SegmentId {
    /// Create an id from a raw non-zero value. Returns `None` for 0.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Recover the raw value.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Decode the persisted predecessor encoding (0 = root).
    pub fn from_raw_predecessor(raw: u64) -> Option<Self> {
        Self::new(raw)
    }

    /// Encode a predecessor for persistence (None = 0).
    pub fn to_raw_predecessor(pred: Option<Self>) -> u64 {
        pred.map_or(0, Self::get)
    }
}

impl fmt::Debug for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentId({})", self.0.get())
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.get())
    }
}
