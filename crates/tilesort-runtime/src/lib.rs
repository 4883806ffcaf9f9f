#![forbid(unsafe_code)]

//! Tilesort Runtime
//!
//! Turns the stepwise machines of `tilesort-core` into paced animations.
//!
//! # Key Components
//!
//! - [`Scheduler`] - Deterministic timer queue that re-invokes step functions
//! - [`RunToken`] - Identity of one animation run; retired runs go quiet
//! - [`Renderer`] - Callback that redraws the tile row
//! - [`Visualizer`] - Start / Reset controller owning sequence, renderer and scheduler
//! - [`VisualizerConfig`] - Tile keys, shuffle seed and per-algorithm pacing
//!
//! # How it fits together
//!
//! The host owns time. It calls [`Visualizer::advance`] (or
//! [`Visualizer::advance_to`]) with the elapsed time; the scheduler fires
//! every step that came due, each step mutates the sequence at most once and
//! asks the renderer to redraw when it did. Nothing blocks and nothing runs
//! on another thread.

pub mod config;
pub mod render;
pub mod scheduler;
pub mod token;
pub mod visualizer;

pub use config::{ConfigError, Pacing, VisualizerConfig};
pub use render::{FrameRecorder, Renderer};
pub use scheduler::{MIN_DELAY, Scheduler, TickReport};
pub use token::{RunRegistry, RunToken};
pub use visualizer::{RunStats, Visualizer};

pub use tilesort_core::{Algorithm, Sequence, SortState, StepResult, Tile};
