#![forbid(unsafe_code)]

//! Outcome of a single step.

/// What one tick of a sort state machine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// The run has nothing left to do; do not schedule another tick.
    pub done: bool,
    /// The sequence should be redrawn.
    pub dirty: bool,
}

impl StepResult {
    /// Finished, nothing to redraw.
    pub const DONE: Self = Self {
        done: true,
        dirty: false,
    };

    /// More work remains.
    #[inline]
    #[must_use]
    pub const fn pending(dirty: bool) -> Self {
        Self { done: false, dirty }
    }

    /// Build a result from both flags.
    #[inline]
    #[must_use]
    pub const fn new(done: bool, dirty: bool) -> Self {
        Self { done, dirty }
    }
}
