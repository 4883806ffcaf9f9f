#![forbid(unsafe_code)]

//! Per-algorithm step machines.
//!
//! Each machine owns the cursors it needs to resume and advances by one
//! observable step per `step` call. They are unified behind
//! [`crate::SortState`]; use the individual types directly when a test needs
//! to look at a machine's internal phase.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleState;
pub use heap::{HeapState, is_max_heap, sift_down};
pub use insertion::InsertionState;
pub use merge::{MergeState, MergeTask, merge_adjacent};
pub use quick::{QuickState, partition};
pub use selection::SelectionState;
