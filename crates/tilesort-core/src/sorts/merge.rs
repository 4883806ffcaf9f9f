#![forbid(unsafe_code)]

//! Merge sort driven by an explicit work stack.
//!
//! Work items are either a range to split or two adjacent sorted runs to
//! merge. Splitting a non-trivial range ends the tick without a redraw;
//! merging ends the tick with one. Single-element ranges are drained within
//! the same tick, so a tick never idles on bookkeeping alone.

use crate::sequence::Sequence;
use crate::step::StepResult;
use crate::tile::Tile;

/// One unit of pending merge-sort work. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTask {
    Split { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Work-stack state for merge sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeState {
    stack: Vec<MergeTask>,
    scratch: Vec<Tile>,
}

impl MergeState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut stack = Vec::new();
        if len > 0 {
            stack.push(MergeTask::Split { lo: 0, hi: len - 1 });
        }
        Self {
            stack,
            scratch: Vec::with_capacity(len),
        }
    }

    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pending work, top of stack last.
    pub fn pending(&self) -> &[MergeTask] {
        &self.stack
    }

    /// Drain work items until a split is queued, a merge is performed, or
    /// the stack runs dry.
    pub fn step(&mut self, seq: &mut Sequence) -> StepResult {
        while let Some(task) = self.stack.pop() {
            match task {
                MergeTask::Split { lo, hi } if lo < hi => {
                    let mid = lo + (hi - lo) / 2;
                    // LIFO: the left half is split first, the merge runs last.
                    self.stack.push(MergeTask::Merge { lo, mid, hi });
                    self.stack.push(MergeTask::Split { lo: mid + 1, hi });
                    self.stack.push(MergeTask::Split { lo, hi: mid });
                    return StepResult::pending(false);
                }
                MergeTask::Split { .. } => continue,
                MergeTask::Merge { lo, mid, hi } => {
                    merge_adjacent(seq, lo, mid, hi, &mut self.scratch);
                    return StepResult::new(self.stack.is_empty(), true);
                }
            }
        }
        StepResult::DONE
    }
}

/// Stable merge of the sorted runs `seq[lo..=mid]` and `seq[mid+1..=hi]`.
///
/// On ties the left run wins, preserving relative order. `scratch` is reused
/// as the temporary buffer.
///
/// # Panics
///
/// Panics if `hi` is out of range or `mid` is not within `lo..=hi`.
pub fn merge_adjacent(seq: &mut Sequence, lo: usize, mid: usize, hi: usize, scratch: &mut Vec<Tile>) {
    assert!(lo <= mid && mid <= hi, "merge bounds out of order: {lo}/{mid}/{hi}");
    scratch.clear();
    let (mut i, mut j) = (lo, mid + 1);
    while i <= mid && j <= hi {
        if seq.key(i) <= seq.key(j) {
            scratch.push(seq[i]);
            i += 1;
        } else {
            scratch.push(seq[j]);
            j += 1;
        }
    }
    scratch.extend_from_slice(&seq.as_slice()[i..=mid]);
    if j <= hi {
        scratch.extend_from_slice(&seq.as_slice()[j..=hi]);
    }
    for (offset, tile) in scratch.iter().enumerate() {
        seq.set(lo + offset, *tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_then_merge_pacing() {
        let mut seq = Sequence::from_keys([2, 1]);
        let mut state = MergeState::new(2);
        // Split [0,1]
        assert_eq!(state.step(&mut seq), StepResult::pending(false));
        assert_eq!(
            state.pending(),
            &[
                MergeTask::Merge { lo: 0, mid: 0, hi: 1 },
                MergeTask::Split { lo: 1, hi: 1 },
                MergeTask::Split { lo: 0, hi: 0 },
            ]
        );
        // Two trivial splits drained, then the merge; stack is empty afterwards.
        assert_eq!(state.step(&mut seq), StepResult::new(true, true));
        assert_eq!(seq.keys(), vec![1, 2]);
        assert_eq!(state.step(&mut seq), StepResult::DONE);
    }

    #[test]
    fn one_merge_per_tick() {
        let mut seq = Sequence::from_keys([4, 3, 2, 1]);
        let mut state = MergeState::new(4);
        let mut merges = 0;
        let mut splits = 0;
        loop {
            let before = state.pending().len();
            let r = state.step(&mut seq);
            if r.dirty {
                merges += 1;
            } else if state.pending().len() > before {
                splits += 1;
            }
            if r.done {
                break;
            }
        }
        assert_eq!(merges, 3);
        assert_eq!(splits, 3);
        assert_eq!(seq.keys(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn merge_adjacent_is_stable() {
        let mut seq = Sequence::from_tiles(vec![
            Tile::new(0, 1),
            Tile::new(1, 3),
            Tile::new(2, 1),
            Tile::new(3, 3),
        ]);
        let mut scratch = Vec::new();
        merge_adjacent(&mut seq, 0, 1, 3, &mut scratch);
        let ids: Vec<usize> = seq.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 2, 1, 3]);
    }

    #[test]
    fn merge_adjacent_leaves_outside_untouched() {
        let mut seq = Sequence::from_keys([9, 3, 5, 2, 4, 0]);
        let mut scratch = Vec::new();
        merge_adjacent(&mut seq, 1, 2, 4, &mut scratch);
        assert_eq!(seq.keys(), vec![9, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn empty_has_no_work() {
        let state = MergeState::new(0);
        assert!(state.is_done());
    }
}
