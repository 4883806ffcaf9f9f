#![forbid(unsafe_code)]

//! Selection sort, one comparison per tick.

use crate::sequence::Sequence;
use crate::step::StepResult;

/// Cursor state for selection sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    len: usize,
    i: usize,
    j: usize,
    min_idx: usize,
}

impl SelectionState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            i: 0,
            j: 1,
            min_idx: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.i + 1 >= self.len
    }

    /// Scan one candidate, or place the minimum found by a finished scan.
    pub fn step(&mut self, seq: &mut Sequence) -> StepResult {
        if self.is_done() {
            return StepResult::DONE;
        }
        if self.j < self.len {
            if seq.key(self.j) < seq.key(self.min_idx) {
                self.min_idx = self.j;
            }
            self.j += 1;
            return StepResult::pending(false);
        }
        let swapped = self.min_idx != self.i;
        if swapped {
            seq.swap(self.i, self.min_idx);
        }
        self.i += 1;
        self.j = self.i + 1;
        self.min_idx = self.i;
        StepResult::pending(swapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_counts_ticks() {
        let mut seq = Sequence::from_keys([5, 3, 4, 1, 2]);
        let mut state = SelectionState::new(seq.len());
        let mut ticks = 0;
        while !state.step(&mut seq).done {
            ticks += 1;
        }
        // 4 + 3 + 2 + 1 scans, plus one placement per pass
        assert_eq!(ticks, 10 + 4);
        assert_eq!(seq.keys(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn only_placements_are_dirty() {
        let mut seq = Sequence::from_keys([2, 1]);
        let mut state = SelectionState::new(2);
        assert_eq!(state.step(&mut seq), StepResult::pending(false));
        assert_eq!(state.step(&mut seq), StepResult::pending(true));
        assert_eq!(state.step(&mut seq), StepResult::DONE);
        assert_eq!(seq.keys(), vec![1, 2]);
    }

    #[test]
    fn already_minimal_is_not_swapped() {
        let mut seq = Sequence::from_keys([1, 2]);
        let mut state = SelectionState::new(2);
        state.step(&mut seq);
        assert_eq!(state.step(&mut seq), StepResult::pending(false));
    }
}
