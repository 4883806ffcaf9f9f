#![forbid(unsafe_code)]

//! Heap sort: a build phase and an extraction phase, one sift per tick.

use crate::sequence::Sequence;
use crate::step::StepResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Sift down every internal node, last first. `next` is one past the
    /// node handled by the coming tick.
    Build { next: usize },
    /// Move the root behind the heap of size `k`, then restore the heap.
    Extract { k: usize },
    Done,
}

/// Two-phase heap sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapState {
    len: usize,
    phase: Phase,
}

impl HeapState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut state = Self {
            len,
            phase: Phase::Build { next: len / 2 },
        };
        state.settle_phase();
        state
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Whether the build-heap phase is still running.
    pub fn is_building(&self) -> bool {
        matches!(self.phase, Phase::Build { .. })
    }

    /// One `sift_down` (preceded by a root swap during extraction).
    pub fn step(&mut self, seq: &mut Sequence) -> StepResult {
        match self.phase {
            Phase::Done => return StepResult::DONE,
            Phase::Build { next } => {
                sift_down(seq, self.len, next - 1);
                self.phase = Phase::Build { next: next - 1 };
            }
            Phase::Extract { k } => {
                seq.swap(0, k);
                sift_down(seq, k, 0);
                self.phase = Phase::Extract { k: k - 1 };
            }
        }
        self.settle_phase();
        StepResult::pending(true)
    }

    /// Move past exhausted phases so `phase` always names real work or `Done`.
    fn settle_phase(&mut self) {
        if self.phase == (Phase::Build { next: 0 }) {
            self.phase = Phase::Extract {
                k: self.len.saturating_sub(1),
            };
        }
        if self.phase == (Phase::Extract { k: 0 }) {
            self.phase = Phase::Done;
        }
    }
}

/// Restore the max-heap property below `root` within the first `heap_size`
/// tiles. Recursive; its net effect is one observable step.
pub fn sift_down(seq: &mut Sequence, heap_size: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    if left < heap_size && seq.key(left) > seq.key(largest) {
        largest = left;
    }
    if right < heap_size && seq.key(right) > seq.key(largest) {
        largest = right;
    }
    if largest != root {
        seq.swap(root, largest);
        sift_down(seq, heap_size, largest);
    }
}

/// Whether the first `heap_size` tiles form a max-heap.
pub fn is_max_heap(seq: &Sequence, heap_size: usize) -> bool {
    (1..heap_size).all(|i| seq.key((i - 1) / 2) >= seq.key(i))
}
