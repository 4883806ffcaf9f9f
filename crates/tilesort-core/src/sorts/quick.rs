#![forbid(unsafe_code)]

//! Quick sort driven by an explicit stack of ranges, one partition per tick.

use std::ops::Range;

use crate::sequence::Sequence;
use crate::step::StepResult;

/// Work-stack state for quick sort. Ranges are half-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickState {
    stack: Vec<Range<usize>>,
}

impl QuickState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            stack: vec![0..len],
        }
    }

    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Ranges still to partition, top of stack last.
    pub fn pending(&self) -> &[Range<usize>] {
        &self.stack
    }

    /// Pop one range and partition it if it holds two or more tiles.
    ///
    /// Ranges of length zero or one still cost a tick. The tick that empties
    /// the stack reports `done`.
    pub fn step(&mut self, seq: &mut Sequence) -> StepResult {
        let Some(range) = self.stack.pop() else {
            return StepResult::DONE;
        };
        let mut dirty = false;
        if range.len() >= 2 {
            let p = partition(seq, range.start, range.end - 1);
            dirty = true;
            self.stack.push(p + 1..range.end);
            self.stack.push(range.start..p);
        }
        StepResult::new(self.stack.is_empty(), dirty)
    }
}

/// Lomuto partition of `seq[low..=high]` around the tile at `high`.
///
/// Returns the pivot's final index `p`: everything in `low..p` has a key
/// strictly below the pivot's and everything in `p+1..=high` a key at least
/// as large.
///
/// # Panics
///
/// Panics if `high` is out of range or `low > high`.
pub fn partition(seq: &mut Sequence, low: usize, high: usize) -> usize {
    assert!(low <= high, "partition range is empty: {low}..={high}");
    let pivot = seq.key(high);
    // `store` is one past the last slot known to hold a key below the pivot.
    let mut store = low;
    for j in low..high {
        if seq.key(j) < pivot {
            seq.swap(store, j);
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}
