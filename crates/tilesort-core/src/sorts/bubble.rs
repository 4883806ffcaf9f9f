#![forbid(unsafe_code)]

//! Bubble sort, one comparison per tick.

use crate::sequence::Sequence;
use crate::step::StepResult;

/// Cursor state for bubble sort.
///
/// `pass` counts completed passes (the sorted tail length), `j` is the left
/// index of the next adjacent pair to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleState {
    len: usize,
    pass: usize,
    j: usize,
}

impl BubbleState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, pass: 0, j: 0 }
    }

    pub fn is_done(&self) -> bool {
        self.pass + 1 >= self.len
    }

    /// Either compare-and-maybe-swap one pair, or close the current pass.
    pub fn step(&mut self, seq: &mut Sequence) -> StepResult {
        if self.is_done() {
            return StepResult::DONE;
        }
        if self.j + 1 < self.len - self.pass {
            let swapped = seq.key(self.j) > seq.key(self.j + 1);
            if swapped {
                seq.swap(self.j, self.j + 1);
            }
            self.j += 1;
            StepResult::pending(swapped)
        } else {
            self.j = 0;
            self.pass += 1;
            StepResult::pending(false)
        }
    }
}
