//! Measure-pass constraints passed from a parent to its children.

/// One axis of a parent's size constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The child must be exactly this size.
    Exact(u32),
    /// The child may be any size up to this bound.
    AtMost(u32),
    /// The parent imposes no constraint.
    Unbounded,
}

impl MeasureSpec {
    /// Resolve a child's desired size against this constraint.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            Self::Exact(v) => v,
            Self::AtMost(v) => desired.min(v),
            Self::Unbounded => desired,
        }
    }
}
