#![forbid(unsafe_code)]

//! Insertion sort, one shift per tick.
//!
//! The tile being inserted travels left by adjacent swaps, so the row never
//! holds a duplicated tile between ticks. Once it stops, it already sits in
//! its slot and the next tick picks up the following tile.

use crate::sequence::Sequence;
use crate::step::StepResult;

/// Cursor state for insertion sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionState {
    len: usize,
    /// Index of the next tile to pick up once the current one is placed.
    i: usize,
    /// Current index of the tile being inserted.
    pos: usize,
    /// Key of the tile being inserted.
    key: u32,
}

impl InsertionState {
    #[must_use]
    pub fn new(seq: &Sequence) -> Self {
        let len = seq.len();
        Self {
            len,
            i: 1,
            pos: 1,
            key: seq.get(1).map_or(0, |t| t.key),
        }
    }

    pub fn is_done(&self) -> bool {
        self.i >= self.len
    }

    /// Shift the carried tile one slot left, or settle it and pick up the next.
    ///
    /// Every working tick is dirty, settling included.
    pub fn step(&mut self, seq: &mut Sequence) -> StepResult {
        if self.is_done() {
            return StepResult::DONE;
        }
        if self.pos > 0 && seq.key(self.pos - 1) > self.key {
            seq.swap(self.pos - 1, self.pos);
            self.pos -= 1;
        } else {
            self.i += 1;
            if self.i < self.len {
                self.key = seq.key(self.i);
                self.pos = self.i;
            }
        }
        StepResult::pending(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn sorts_with_one_tick_per_shift_or_settle() {
        let mut seq = Sequence::from_keys([5, 3, 4, 1, 2]);
        let mut state = InsertionState::new(&seq);
        let mut ticks = 0;
        while !state.step(&mut seq).done {
            ticks += 1;
        }
        // shifts: 3->1, 4->1, 1->3, 2->3 = 8; settles: 4
        assert_eq!(ticks, 12);
        assert_eq!(seq.keys(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_working_tick_is_dirty() {
        let mut seq = Sequence::from_keys([1, 2, 3]);
        let mut state = InsertionState::new(&seq);
        assert_eq!(state.step(&mut seq), StepResult::pending(true));
        assert_eq!(state.step(&mut seq), StepResult::pending(true));
        assert_eq!(state.step(&mut seq), StepResult::DONE);
        assert_eq!(seq.keys(), vec![1, 2, 3]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let mut seq = Sequence::from_tiles(vec![
            Tile::new(0, 2),
            Tile::new(1, 1),
            Tile::new(2, 2),
            Tile::new(3, 1),
        ]);
        let mut state = InsertionState::new(&seq);
        while !state.step(&mut seq).done {}
        let ids: Vec<usize> = seq.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 0, 2]);
    }

    #[test]
    fn row_stays_a_permutation_between_ticks() {
        let original = Sequence::from_keys([4, 3, 2, 1]);
        let mut seq = original.clone();
        let mut state = InsertionState::new(&seq);
        while !state.step(&mut seq).done {
            assert!(seq.is_permutation_of(&original));
        }
    }
}
