#![forbid(unsafe_code)]

//! Log macros for the sort machines.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it they
//! expand to nothing, so stepping a sort costs no formatting work and the
//! crate has no dependencies.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Expands to nothing; enable the `tracing` feature to emit.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; enable the `tracing` feature to emit.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}
