#![forbid(unsafe_code)]

//! The tagged union of all sort machines.

use crate::algorithm::Algorithm;
use crate::sequence::Sequence;
use crate::sorts::{
    BubbleState, HeapState, InsertionState, MergeState, QuickState, SelectionState,
};
use crate::step::StepResult;

/// Resumable progress of one sort run.
///
/// Created when a run starts and dropped when it completes or is abandoned.
/// Each [`step`](Self::step) performs at most one observable mutation of the
/// sequence and reports whether to redraw and whether the run is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortState {
    Bubble(BubbleState),
    Selection(SelectionState),
    Insertion(InsertionState),
    Merge(MergeState),
    Quick(QuickState),
    Heap(HeapState),
}

impl SortState {
    /// Fresh state for sorting `seq` with `algorithm`.
    ///
    /// The sequence length must not change for the lifetime of the state.
    #[must_use]
    pub fn new(algorithm: Algorithm, seq: &Sequence) -> Self {
        let len = seq.len();
        crate::debug!(algorithm = algorithm.slug(), len, "sort state created");
        match algorithm {
            Algorithm::Bubble => Self::Bubble(BubbleState::new(len)),
            Algorithm::Selection => Self::Selection(SelectionState::new(len)),
            Algorithm::Insertion => Self::Insertion(InsertionState::new(seq)),
            Algorithm::Merge => Self::Merge(MergeState::new(len)),
            Algorithm::Quick => Self::Quick(QuickState::new(len)),
            Algorithm::Heap => Self::Heap(HeapState::new(len)),
        }
    }

    /// Which algorithm this state runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bubble(_) => Algorithm::Bubble,
            Self::Selection(_) => Algorithm::Selection,
            Self::Insertion(_) => Algorithm::Insertion,
            Self::Merge(_) => Algorithm::Merge,
            Self::Quick(_) => Algorithm::Quick,
            Self::Heap(_) => Algorithm::Heap,
        }
    }

    /// Whether no work remains. Stepping a finished state is a no-op.
    pub fn is_done(&self) -> bool {
        match self {
            Self::Bubble(s) => s.is_done(),
            Self::Selection(s) => s.is_done(),
            Self::Insertion(s) => s.is_done(),
            Self::Merge(s) => s.is_done(),
            Self::Quick(s) => s.is_done(),
            Self::Heap(s) => s.is_done(),
        }
    }

    /// Advance by one tick.
    pub fn step(&mut self, seq: &mut Sequence) -> StepResult {
        let result = match self {
            Self::Bubble(s) => s.step(seq),
            Self::Selection(s) => s.step(seq),
            Self::Insertion(s) => s.step(seq),
            Self::Merge(s) => s.step(seq),
            Self::Quick(s) => s.step(seq),
            Self::Heap(s) => s.step(seq),
        };
        crate::trace!(
            algorithm = self.algorithm().slug(),
            done = result.done,
            dirty = result.dirty,
            "sort step"
        );
        result
    }

    /// Step until done; returns the number of ticks that reported more work.
    pub fn run_to_end(&mut self, seq: &mut Sequence) -> usize {
        let mut ticks = 0;
        while !self.step(seq).done {
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_algorithm_sorts_the_scenario() {
        for alg in Algorithm::ALL {
            let mut seq = Sequence::from_keys([5, 3, 4, 1, 2]);
            let original = seq.clone();
            let mut state = SortState::new(alg, &seq);
            assert_eq!(state.algorithm(), alg);
            state.run_to_end(&mut seq);
            assert_eq!(seq.keys(), vec![1, 2, 3, 4, 5], "{alg}");
            assert!(seq.is_permutation_of(&original), "{alg}");
            assert!(state.is_done());
        }
    }

    #[test]
    fn bubble_scenario_tick_count() {
        let mut seq = Sequence::from_keys([5, 3, 4, 1, 2]);
        let mut state = SortState::new(Algorithm::Bubble, &seq);
        assert_eq!(state.run_to_end(&mut seq), 14);
    }

    #[test]
    fn trivial_sequences_finish_immediately() {
        for alg in Algorithm::ALL {
            for keys in [vec![], vec![42]] {
                let mut seq = Sequence::from_keys(keys.clone());
                let mut state = SortState::new(alg, &seq);
                assert_eq!(state.step(&mut seq), StepResult::DONE, "{alg} on {keys:?}");
                assert_eq!(seq.keys(), keys);
            }
        }
    }

    #[test]
    fn stepping_after_done_is_inert() {
        for alg in Algorithm::ALL {
            let mut seq = Sequence::from_keys([3, 1, 2, 5, 4]);
            let mut state = SortState::new(alg, &seq);
            state.run_to_end(&mut seq);
            let snapshot = seq.clone();
            for _ in 0..3 {
                assert_eq!(state.step(&mut seq), StepResult::DONE, "{alg}");
            }
            assert_eq!(seq, snapshot);
        }
    }
}
