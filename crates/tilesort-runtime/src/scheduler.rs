#![forbid(unsafe_code)]

//! Cooperative, timer-driven step scheduler.
//!
//! A step function is started with a delay; the scheduler calls it once the
//! delay has elapsed and, while it reports more work, again one delay after
//! each call. There are no threads and no sleeping: the host advances a
//! virtual monotonic clock and every step that came due fires inside that
//! call, in due order.
//!
//! Step functions receive the shared context `C` by `&mut` on every call
//! instead of capturing it, so the sequence and renderer stay owned by the
//! caller.
//!
//! # Single active run
//!
//! [`Scheduler::start`] retires the previously active run. A retired run's
//! queued tick is not removed; when it comes due it is dropped without
//! calling its step function and counted as stale.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tilesort_runtime::{Scheduler, StepResult};
//!
//! let mut sched: Scheduler<u32> = Scheduler::new();
//! let mut calls = 0;
//! sched.start(Duration::from_millis(100), |count: &mut u32| {
//!     *count += 1;
//!     StepResult::new(*count == 3, true)
//! });
//!
//! sched.advance(Duration::from_millis(99), &mut calls);
//! assert_eq!(calls, 0);
//! sched.advance(Duration::from_millis(250), &mut calls);
//! assert_eq!(calls, 3);
//! assert!(sched.is_idle());
//! ```

use std::time::Duration;

use tilesort_core::StepResult;
use tracing::{debug, trace};

use crate::token::{RunRegistry, RunToken};

/// Shortest pause between two ticks of the same run.
pub const MIN_DELAY: Duration = Duration::from_millis(1);

type StepFn<C> = Box<dyn FnMut(&mut C) -> StepResult>;

struct Pending<C> {
    due: Duration,
    order: u64,
    token: RunToken,
    delay: Duration,
    step: StepFn<C>,
}

/// What happened during one [`Scheduler::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Step functions invoked.
    pub fired: u32,
    /// Invocations that asked for a redraw.
    pub dirty: u32,
    /// Queued ticks of retired runs that came due and were dropped.
    pub stale: u32,
    /// Runs that reported completion.
    pub completed: u32,
}

impl TickReport {
    /// Whether anything came due at all.
    pub fn is_empty(&self) -> bool {
        self.fired == 0 && self.stale == 0
    }

    fn merge(&mut self, other: TickReport) {
        self.fired += other.fired;
        self.dirty += other.dirty;
        self.stale += other.stale;
        self.completed += other.completed;
    }
}

/// Deterministic timer queue for stepwise runs.
pub struct Scheduler<C> {
    now: Duration,
    queue: Vec<Pending<C>>,
    next_order: u64,
    runs: RunRegistry,
}

impl<C> Scheduler<C> {
    /// Empty scheduler with its clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            queue: Vec::new(),
            next_order: 0,
            runs: RunRegistry::new(),
        }
    }

    /// Start a run: `step` first fires after `delay`, then every `delay`
    /// until it reports done. Retires whatever run was active before.
    ///
    /// Delays shorter than [`MIN_DELAY`] are raised to it.
    pub fn start<F>(&mut self, delay: Duration, step: F) -> RunToken
    where
        F: FnMut(&mut C) -> StepResult + 'static,
    {
        let delay = delay.max(MIN_DELAY);
        let (token, previous) = self.runs.begin();
        if let Some(previous) = previous {
            debug!(%previous, %token, "retiring active run");
        }
        debug!(%token, delay_ms = delay.as_millis() as u64, "run scheduled");
        let due = self.now + delay;
        self.push(Pending {
            due,
            order: 0,
            token,
            delay,
            step: Box::new(step),
        });
        token
    }

    /// Retire the active run without starting another.
    pub fn cancel(&mut self) -> Option<RunToken> {
        let cancelled = self.runs.cancel();
        if let Some(token) = cancelled {
            debug!(%token, "run cancelled");
        }
        cancelled
    }

    /// Move the clock forward by `dt`, firing everything that comes due.
    pub fn advance(&mut self, dt: Duration, ctx: &mut C) -> TickReport {
        let target = self.now + dt;
        self.advance_to(target, ctx)
    }

    /// Move the clock to `now`, firing everything due at or before it.
    ///
    /// A `now` earlier than the current clock fires nothing.
    pub fn advance_to(&mut self, now: Duration, ctx: &mut C) -> TickReport {
        let target = now.max(self.now);
        let mut report = TickReport::default();
        while let Some(index) = self.next_due(target) {
            let task = self.queue.swap_remove(index);
            self.now = task.due;
            report.merge(self.fire(task, ctx));
        }
        self.now = target;
        report
    }

    /// Time until the earliest queued tick, stale ones included.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .iter()
            .map(|p| p.due.saturating_sub(self.now))
            .min()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// The active run, if any.
    pub fn active(&self) -> Option<RunToken> {
        self.runs.active()
    }

    /// Whether no run is active. Stale ticks may still be queued.
    pub fn is_idle(&self) -> bool {
        self.runs.active().is_none()
    }

    /// Number of queued ticks, stale ones included.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    fn fire(&mut self, mut task: Pending<C>, ctx: &mut C) -> TickReport {
        let mut report = TickReport::default();
        if !self.runs.is_active(task.token) {
            debug!(token = %task.token, "dropping tick of retired run");
            report.stale = 1;
            return report;
        }
        let result = (task.step)(ctx);
        report.fired = 1;
        report.dirty = u32::from(result.dirty);
        trace!(
            token = %task.token,
            now_ms = self.now.as_millis() as u64,
            done = result.done,
            dirty = result.dirty,
            "tick"
        );
        if result.done {
            self.runs.finish(task.token);
            report.completed = 1;
            debug!(token = %task.token, "run complete");
        } else {
            task.due += task.delay;
            self.push(task);
        }
        report
    }

    fn push(&mut self, mut task: Pending<C>) {
        task.order = self.next_order;
        self.next_order += 1;
        self.queue.push(task);
    }

    /// Index of the earliest task due at or before `target`; FIFO on ties.
    fn next_due(&self, target: Duration) -> Option<usize> {
        self.queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.order))
            .map(|(i, _)| i)
    }
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("queued", &self.queue.len())
            .field("active", &self.runs.active())
            .finish()
    }
}
