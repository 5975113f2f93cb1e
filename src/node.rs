use crate::index::NodeIndex;
use crate::interval::Interval;

/// Node of the augmented interval tree.
///
/// A node owns the intervals whose span includes its `median`, stored twice
/// under two sort orders so queries can scan a prefix of one list or a suffix
/// of the other. Intervals entirely left or right of the median live in the
/// child subtrees. `interval_min`/`interval_max` are the tightest bounds over
/// everything reachable from this node and drive subtree pruning.
#[derive(Debug)]
pub(crate) struct Node<T, Ix> {
    /// Split point, computed once from `interval_min`/`interval_max`
    pub(crate) median: T,
    /// Smallest start reachable from this node
    pub(crate) interval_min: T,
    /// Largest end reachable from this node
    pub(crate) interval_max: T,
    /// Intervals straddling `median`, by (start asc, end asc).
    /// `None` together with `overlapping_by_end` when no interval straddles.
    pub(crate) overlapping_by_start: Option<Vec<Interval<T>>>,
    /// The same intervals, by (end asc, start asc)
    pub(crate) overlapping_by_end: Option<Vec<Interval<T>>>,
    /// Subtree of intervals entirely left of `median`
    pub(crate) left: Option<NodeIndex<Ix>>,
    /// Subtree of intervals entirely right of `median`
    pub(crate) right: Option<NodeIndex<Ix>>,
}

impl<T, Ix> Node<T, Ix> {
    /// First start of the overlapping set, or `median` when the set is empty.
    /// The fallback makes an absent set behave as an empty interval sitting
    /// exactly on the median, which range-pruning checks rely on.
    pub(crate) fn overlapping_min(&self) -> &T {
        self.overlapping_by_start
            .as_ref()
            .and_then(|by_start| by_start.first())
            .map_or(&self.median, |iv| &iv.start)
    }

    /// Last end of the overlapping set, or `median` when the set is empty.
    pub(crate) fn overlapping_max(&self) -> &T {
        self.overlapping_by_end
            .as_ref()
            .and_then(|by_end| by_end.last())
            .map_or(&self.median, |iv| &iv.end)
    }
}
