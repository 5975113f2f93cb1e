//! The `Interval` stored in [`SortedIntervalIndex`](crate::SortedIntervalIndex)
//! and [`AugmentedIntervalTree`](crate::AugmentedIntervalTree), representing the
//! closed interval [start, end].
//!
//! Intervals order lexicographically by `(start, end)`. For instance, with
//! intervals of type `Interval<u32>`:
//! - [1,4] < [2,5], because 1 < 2
//! - [1,4] < [1,5], because 4 < 5
//!
//! Both bounds are inclusive: an interval ending exactly where the query
//! starts still counts as overlapping.

/// A closed interval [start, end] over a totally ordered point type.
///
/// `start <= end` is assumed by every structure in this crate but is never
/// checked; an inverted interval yields well-defined comparisons and
/// undefined query results.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    /// The lower bound (inclusive)
    pub start: T,
    /// The upper bound (inclusive)
    pub end: T,
}

impl<T: Ord> Interval<T> {
    /// Create a new `Interval`
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Checks if self lies fully within [start, end]
    #[inline]
    pub fn is_between(&self, start: &T, end: &T) -> bool {
        self.start >= *start && self.end <= *end
    }

    /// Checks if self overlaps with [start, end], shared endpoints included
    #[inline]
    pub fn is_overlapping(&self, start: &T, end: &T) -> bool {
        self.start <= *end && self.end >= *start
    }

    /// Checks if self fully contains [start, end]
    #[inline]
    pub fn is_enclosing(&self, start: &T, end: &T) -> bool {
        self.start <= *start && self.end >= *end
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn predicates_include_shared_endpoints() {
        let interval = Interval::new(2, 5);
        assert!(interval.is_between(&2, &5));
        assert!(!interval.is_between(&3, &5));
        assert!(interval.is_overlapping(&5, &9));
        assert!(interval.is_overlapping(&0, &2));
        assert!(!interval.is_overlapping(&6, &9));
        assert!(interval.is_enclosing(&2, &5));
        assert!(!interval.is_enclosing(&1, &5));
    }

    #[test]
    fn intervals_order_by_start_then_end() {
        assert!(Interval::new(1, 4) < Interval::new(2, 5));
        assert!(Interval::new(1, 4) < Interval::new(1, 5));
        assert_eq!(Interval::new(3, 3), Interval::new(3, 3));
    }
}
