//! `interval-index` stores sequenced interval data (number ranges, time
//! ranges, ...) and answers three kinds of range query: intervals contained
//! *between* the query bounds, intervals *overlapping* the query, and
//! intervals *enclosing* it.
//!
//! Two structures answer the same queries with different trade-offs:
//!
//! - [`SortedIntervalIndex`] keeps a flat sorted vector and answers queries
//!   with a binary search followed by a contiguous scan, in O(log n + k). It
//!   supports incremental `add`/`remove` but requires that no stored interval
//!   fully encloses another.
//! - [`AugmentedIntervalTree`] is built once from a batch and is immutable
//!   afterwards. It handles arbitrarily nested intervals at roughly a tenth
//!   of the flat index's throughput, storing its nodes in a flat arena with
//!   index-based children.
//!
//! # Example
//!
//! ```rust
//! use interval_index::{median, AugmentedIntervalTree, Interval, SortedIntervalIndex};
//!
//! let mut index = SortedIntervalIndex::new();
//! index.add(Interval::new(0, 2));
//! index.add(Interval::new(1, 4));
//! assert_eq!(index.overlapping(&2, &3).len(), 2);
//!
//! let tree = AugmentedIntervalTree::new(
//!     vec![Interval::new(0, 9), Interval::new(2, 3)],
//!     median::i32_median,
//! );
//! assert_eq!(tree.enclosing(&2, &3).len(), 2);
//! ```

mod index;
mod interval;
pub mod median;
mod node;
mod sorted;
mod tree;


pub use index::{DefaultIx, IndexType, NodeIndex};
pub use interval::Interval;
pub use sorted::SortedIntervalIndex;
pub use tree::AugmentedIntervalTree;
