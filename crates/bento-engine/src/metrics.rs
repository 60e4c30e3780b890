//! Work counters for a single compaction pass.
//!
//! [`CompactMetrics`] is returned by
//! [`compact_with_metrics`](crate::compact_with_metrics) and surfaced on
//! [`LayoutReport`](crate::LayoutReport) for profiling and diagnostics.

/// Counters collected during one call to
/// [`compact_with_metrics`](crate::compact_with_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompactMetrics {
    /// Single-direction sweeps run, including the final no-op sweeps.
    pub sweeps: u64,
    /// Item relocations: one per item per sweep in which it moved.
    pub relocations: u64,
    /// Total one-cell steps taken by all items.
    pub steps: u64,
    /// Whether the sweep cap was reached before the layout settled.
    pub hit_iteration_cap: bool,
}

impl CompactMetrics {
    /// `true` if at least one item moved.
    pub fn changed(&self) -> bool {
        self.relocations > 0
    }
}
