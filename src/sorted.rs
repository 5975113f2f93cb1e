use std::cmp::Ordering;
use std::ops::Index;
use std::slice;

use crate::interval::Interval;

/// A flat, mutable index over sequenced interval data (number ranges, time
/// ranges, ...). Allows for very fast querying of intervals contained within,
/// overlapping or enclosing a given interval.
///
/// The backing store is a single vector kept sorted by (start asc, end asc).
/// Every query binary-searches for any one match, then widens to the
/// contiguous run of matches around it, so lookups cost O(log n + k).
///
/// NOT SUPPORTED: intervals which fully enclose other intervals. Every
/// stored interval n must have
/// `start >= intervals[n-1].start && end >= intervals[n-1].end`:
///
/// ```text
/// [0] |------|
/// [1] |--------|      <- OK
/// [2]   |------|      <- OK
/// [3]    |----|       <- NOT OK
/// ```
///
/// Nested intervals break the contiguity of match runs and produce silently
/// wrong query results, never a panic. The invariant is intentionally not
/// checked on insertion (a check would cost every `add` what the contiguity
/// trick saves on every query); debug builds assert it against the new
/// element's neighbors. If you cannot rule out nesting, use
/// [`AugmentedIntervalTree`](crate::AugmentedIntervalTree) instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortedIntervalIndex<T> {
    /// Intervals sorted by (start asc, end asc)
    intervals: Vec<Interval<T>>,
}

impl<T: Ord> SortedIntervalIndex<T> {
    /// Create an empty `SortedIntervalIndex`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Create a `SortedIntervalIndex` from intervals already sorted by
    /// (start asc, end asc). The order is trusted, not verified; an unsorted
    /// input yields undefined query results.
    ///
    /// # Example
    /// ```rust
    /// use interval_index::{Interval, SortedIntervalIndex};
    ///
    /// let index = SortedIntervalIndex::from_ordered(vec![
    ///     Interval::new(0, 2),
    ///     Interval::new(3, 5),
    /// ]);
    /// assert_eq!(index.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_ordered(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }

    /// Create a `SortedIntervalIndex` from intervals in any order. The input
    /// is stably sorted by (start asc, end asc), so exact duplicates keep
    /// their relative order.
    ///
    /// # Example
    /// ```rust
    /// use interval_index::{Interval, SortedIntervalIndex};
    ///
    /// let index = SortedIntervalIndex::from_unordered(vec![
    ///     Interval::new(3, 5),
    ///     Interval::new(0, 2),
    /// ]);
    /// assert_eq!(index[0], Interval::new(0, 2));
    /// ```
    #[inline]
    #[must_use]
    pub fn from_unordered(mut intervals: Vec<Interval<T>>) -> Self {
        intervals.sort();
        Self { intervals }
    }

    /// Insert an interval at its sort position.
    ///
    /// # Example
    /// ```rust
    /// use interval_index::{Interval, SortedIntervalIndex};
    ///
    /// let mut index = SortedIntervalIndex::new();
    /// index.add(Interval::new(3, 5));
    /// index.add(Interval::new(0, 2));
    /// assert_eq!(index[0], Interval::new(0, 2));
    /// ```
    #[inline]
    pub fn add(&mut self, interval: Interval<T>) {
        let index = match self
            .intervals
            .binary_search_by(|iv| Self::insert_position(iv, &interval.start, &interval.end))
        {
            Ok(index) | Err(index) => index,
        };
        debug_assert!(
            index == 0 || self.intervals[index - 1].end <= interval.end,
            "nested interval violates the no-nesting invariant"
        );
        debug_assert!(
            index == self.intervals.len() || self.intervals[index].end >= interval.end,
            "nested interval violates the no-nesting invariant"
        );
        self.intervals.insert(index, interval);
    }

    /// Insert every interval of `intervals` at its sort position.
    #[inline]
    pub fn add_range(&mut self, intervals: impl IntoIterator<Item = Interval<T>>) {
        for interval in intervals {
            self.add(interval);
        }
    }

    /// Remove an interval matching both bounds exactly, returning whether one
    /// was found. At most one instance is removed per call; duplicates keep
    /// their remaining multiplicity.
    ///
    /// # Example
    /// ```rust
    /// use interval_index::{Interval, SortedIntervalIndex};
    ///
    /// let mut index = SortedIntervalIndex::new();
    /// index.add(Interval::new(0, 2));
    /// assert!(index.remove(&Interval::new(0, 2)));
    /// assert!(!index.remove(&Interval::new(0, 2)));
    /// ```
    #[inline]
    pub fn remove(&mut self, interval: &Interval<T>) -> bool {
        match self.intervals.binary_search(interval) {
            Ok(index) => {
                let _removed = self.intervals.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove all intervals from the index.
    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Check whether an interval matching both bounds exactly is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, interval: &Interval<T>) -> bool {
        self.intervals.binary_search(interval).is_ok()
    }

    /// Return the number of intervals in the index.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Return `true` if the index contains no intervals.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Return a reference to the interval at `index` in sort order.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Interval<T>> {
        self.intervals.get(index)
    }

    /// Get an iterator over the intervals, in sort order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }
}

impl<T: Ord + Clone> SortedIntervalIndex<T> {
    /// Retrieve all intervals which lie fully within the search interval.
    ///
    /// Given the intervals [0]-[4] and the search interval [x]:
    ///
    /// ```text
    /// [0] |-------|
    /// [1]     |-----|
    /// [2]        |----|
    /// [3]          |----|
    /// [4]           |-------|
    /// [x]     |---------|
    /// ```
    ///
    /// [1], [2], [3] are included in the result set. [0], [4] are not.
    ///
    /// # Example
    /// ```rust
    /// use interval_index::{Interval, SortedIntervalIndex};
    ///
    /// let index = SortedIntervalIndex::from_unordered(vec![
    ///     Interval::new(3, 5),
    ///     Interval::new(0, 2),
    ///     Interval::new(6, 8),
    ///     Interval::new(0, 4),
    /// ]);
    /// let within = index.between(&0, &4);
    /// assert_eq!(within.len(), 2);
    /// assert_eq!(within[0], Interval::new(0, 2));
    /// assert_eq!(within[1], Interval::new(0, 4));
    /// ```
    #[inline]
    #[must_use]
    pub fn between(&self, start: &T, end: &T) -> Self {
        self.find_run(|iv| Self::between_position(iv, start, end))
    }

    /// Retrieve all intervals which overlap with the search interval,
    /// including ones just touching its start or end point.
    ///
    /// Given the intervals [0]-[6] and the search interval [x]:
    ///
    /// ```text
    /// [0] |--|
    /// [1]  |--|
    /// [2]   |----|
    /// [3]       |----|
    /// [4]           |-------|
    /// [5]               |----|
    /// [6]                |-----|
    /// [x]     |---------|
    /// ```
    ///
    /// [1], [2], [3], [4], [5] are included in the result set. [0], [6] are not.
    #[inline]
    #[must_use]
    pub fn overlapping(&self, start: &T, end: &T) -> Self {
        self.find_run(|iv| Self::overlapping_position(iv, start, end))
    }

    /// Retrieve all intervals which enclose the search interval.
    ///
    /// Given the intervals [0]-[4] and the search interval [x]:
    ///
    /// ```text
    /// [0] |--------|
    /// [1]  |----------------|
    /// [2]     |---------|
    /// [3]       |----|
    /// [4]           |-------|
    /// [x]     |---------|
    /// ```
    ///
    /// [1], [2] are included in the result set. [0], [3], [4] are not.
    #[inline]
    #[must_use]
    pub fn enclosing(&self, start: &T, end: &T) -> Self {
        self.find_run(|iv| Self::enclosing_position(iv, start, end))
    }

    /// Binary-search for any index where `position` reports a match, then
    /// widen left and right over the contiguous run of matches. Sortedness
    /// plus the no-nesting invariant guarantee every match set is contiguous.
    fn find_run(&self, position: impl Fn(&Interval<T>) -> Ordering) -> Self {
        let Ok(index) = self.intervals.binary_search_by(|iv| position(iv)) else {
            return Self::new();
        };

        let mut from = index;
        while from > 0 && position(&self.intervals[from - 1]) == Ordering::Equal {
            from -= 1;
        }
        let mut to = index + 1;
        while to < self.intervals.len() && position(&self.intervals[to]) == Ordering::Equal {
            to += 1;
        }

        Self::from_ordered(self.intervals[from..to].to_vec())
    }
}

// Query comparators. Each orders an element against the search bounds the way
// `slice::binary_search_by` expects: `Less` when the element sorts before
// every possible match, `Greater` when it sorts after, `Equal` on a match.
// The sorted store is partitioned into exactly those three zones as long as
// the no-nesting invariant holds.
impl<T: Ord> SortedIntervalIndex<T> {
    /// Total order used by `add`: (start, end) lexicographic.
    fn insert_position(interval: &Interval<T>, start: &T, end: &T) -> Ordering {
        interval
            .start
            .cmp(start)
            .then_with(|| interval.end.cmp(end))
    }

    /// Match iff the element lies fully within [start, end].
    fn between_position(interval: &Interval<T>, start: &T, end: &T) -> Ordering {
        if interval.start < *start {
            Ordering::Less
        } else if interval.end > *end {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Match iff the element touches or crosses [start, end].
    fn overlapping_position(interval: &Interval<T>, start: &T, end: &T) -> Ordering {
        if interval.end < *start {
            Ordering::Less
        } else if interval.start > *end {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Match iff the element fully contains [start, end].
    fn enclosing_position(interval: &Interval<T>, start: &T, end: &T) -> Ordering {
        if interval.start <= *start && interval.end >= *end {
            Ordering::Equal
        } else if interval.end <= *end {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl<T: Ord> Default for SortedIntervalIndex<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Index<usize> for SortedIntervalIndex<T> {
    type Output = Interval<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.intervals[index]
    }
}

impl<T: Ord> IntoIterator for SortedIntervalIndex<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedIntervalIndex<T> {
    type Item = &'a Interval<T>;
    type IntoIter = slice::Iter<'a, Interval<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T: Ord> FromIterator<Interval<T>> for SortedIntervalIndex<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_unordered(iter.into_iter().collect())
    }
}
