#![forbid(unsafe_code)]

//! Core: tiles, the tile sequence, and stepwise sorting state machines.
//!
//! Every sorting algorithm here is expressed as an explicit state value that
//! advances by exactly one observable step per call to [`SortState::step`].
//! Nothing in this crate knows about time or rendering; a host (see
//! `tilesort-runtime`) decides when to call `step` and what to do with a
//! [`StepResult`] that asks for a redraw.
//!
//! ```
//! use tilesort_core::{Algorithm, Sequence, SortState};
//!
//! let mut seq = Sequence::from_keys([5, 3, 4, 1, 2]);
//! let mut state = SortState::new(Algorithm::Bubble, &seq);
//! while !state.step(&mut seq).done {}
//! assert_eq!(seq.keys(), vec![1, 2, 3, 4, 5]);
//! ```

pub mod algorithm;
pub mod logging;
pub mod sequence;
pub mod shuffle;
pub mod sorts;
pub mod state;
pub mod step;
pub mod tile;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use sequence::Sequence;
pub use shuffle::Xorshift64;
pub use state::SortState;
pub use step::StepResult;
pub use tile::Tile;

#[cfg(feature = "tracing")]
pub use logging::{debug, trace};
