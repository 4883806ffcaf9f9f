#![forbid(unsafe_code)]

//! Run identity.
//!
//! At most one run is active. Starting a new run retires the previous token,
//! so anything still queued on behalf of the old run can recognise itself as
//! stale and do nothing.

use std::fmt;

/// Identity of one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunToken(u64);

impl RunToken {
    /// Raw generation number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// Hands out tokens and remembers which one is active.
#[derive(Debug, Default)]
pub struct RunRegistry {
    next: u64,
    active: Option<RunToken>,
}

impl RunRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token and make it the active one, retiring any other.
    ///
    /// Returns the new token and the one it replaced, if any.
    pub fn begin(&mut self) -> (RunToken, Option<RunToken>) {
        self.next += 1;
        let token = RunToken(self.next);
        let previous = self.active.replace(token);
        (token, previous)
    }

    /// Retire `token` if it is the active one. Returns whether it was.
    pub fn finish(&mut self, token: RunToken) -> bool {
        if self.active == Some(token) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Retire whatever is active.
    pub fn cancel(&mut self) -> Option<RunToken> {
        self.active.take()
    }

    /// Whether `token` is the active run.
    pub fn is_active(&self, token: RunToken) -> bool {
        self.active == Some(token)
    }

    /// The active run, if any.
    pub fn active(&self) -> Option<RunToken> {
        self.active
    }
}
