#![forbid(unsafe_code)]

//! Start / Reset controller.
//!
//! [`Visualizer`] owns the tile row, the renderer and the scheduler. The host
//! issues commands ([`start`](Visualizer::start), [`reset`](Visualizer::reset))
//! and feeds time ([`advance`](Visualizer::advance)); the visualizer keeps at
//! most one sort run alive.
//!
//! # Restart semantics
//!
//! Starting a sort while another is animating retires the running one: its
//! already-queued tick fires as a no-op and the new run sorts the row in
//! whatever order it is in at that moment. Reset retires the running sort
//! too, then reshuffles.

use std::time::Duration;

use tilesort_core::{Algorithm, Sequence, SortState, Xorshift64};
use tracing::{debug, info};

use crate::config::VisualizerConfig;
use crate::render::Renderer;
use crate::scheduler::{Scheduler, TickReport};
use crate::token::RunToken;

/// Counters over the visualizer's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub runs_started: u64,
    pub runs_completed: u64,
    /// Runs retired by a restart or reset before finishing.
    pub runs_retired: u64,
    /// Step invocations.
    pub ticks: u64,
    /// Renderer calls, including the ones made by reset and construction.
    pub renders: u64,
    /// Ticks of retired runs that came due and were dropped.
    pub stale_ticks: u64,
}

/// What step functions get to touch.
struct Stage<R> {
    sequence: Sequence,
    renderer: R,
    renders: u64,
}

impl<R: Renderer> Stage<R> {
    fn render(&mut self) {
        self.renders += 1;
        self.renderer.render(&self.sequence);
    }
}

/// Animated sorting of a row of tiles.
pub struct Visualizer<R> {
    stage: Stage<R>,
    scheduler: Scheduler<Stage<R>>,
    config: VisualizerConfig,
    rng: Xorshift64,
    current: Option<(RunToken, Algorithm)>,
    stats: RunStats,
}

impl<R: Renderer + 'static> Visualizer<R> {
    /// Build the row from `config.keys`, shuffle it and draw it once.
    pub fn new(config: VisualizerConfig, renderer: R) -> Self {
        let sequence = Sequence::from_keys(config.keys.iter().copied());
        let mut vis = Self::with_sequence(sequence, config, renderer);
        vis.rng.shuffle(&mut vis.stage.sequence);
        vis.stage.render();
        vis
    }

    /// Use `sequence` as is (no initial shuffle, no initial render).
    pub fn with_sequence(sequence: Sequence, config: VisualizerConfig, renderer: R) -> Self {
        let rng = Xorshift64::new(config.seed);
        Self {
            stage: Stage {
                sequence,
                renderer,
                renders: 0,
            },
            scheduler: Scheduler::new(),
            config,
            rng,
            current: None,
            stats: RunStats::default(),
        }
    }

    /// Start animating `algorithm` over the current order.
    ///
    /// The first step runs one pacing delay from now. Any running sort is
    /// retired first.
    pub fn start(&mut self, algorithm: Algorithm) -> RunToken {
        if self.is_running() {
            self.stats.runs_retired += 1;
        }
        let mut state = SortState::new(algorithm, &self.stage.sequence);
        let delay = self.config.pacing.delay(algorithm);
        let token = self.scheduler.start(delay, move |stage: &mut Stage<R>| {
            let result = state.step(&mut stage.sequence);
            if result.dirty {
                stage.render();
            }
            result
        });
        self.current = Some((token, algorithm));
        self.stats.runs_started += 1;
        info!(
            %token,
            algorithm = algorithm.slug(),
            tiles = self.stage.sequence.len(),
            "sort started"
        );
        token
    }

    /// Retire any running sort, reshuffle the row and redraw it.
    pub fn reset(&mut self) {
        self.cancel();
        self.rng.shuffle(&mut self.stage.sequence);
        self.stage.render();
        debug!(tiles = self.stage.sequence.len(), "row reshuffled");
    }

    /// Retire the running sort, leaving the row as it is.
    /// Returns whether a sort was running.
    pub fn cancel(&mut self) -> bool {
        if self.scheduler.cancel().is_some() {
            self.stats.runs_retired += 1;
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Draw the row as it is, e.g. after the output surface changed size.
    pub fn redraw(&mut self) {
        self.stage.render();
    }

    /// Advance time by `dt` and run every step that came due.
    pub fn advance(&mut self, dt: Duration) -> TickReport {
        let report = self.scheduler.advance(dt, &mut self.stage);
        self.absorb(report);
        report
    }

    /// Advance time to `now` (measured from construction).
    pub fn advance_to(&mut self, now: Duration) -> TickReport {
        let report = self.scheduler.advance_to(now, &mut self.stage);
        self.absorb(report);
        report
    }

    /// Jump from deadline to deadline until nothing is queued.
    ///
    /// Returns the number of steps executed.
    pub fn run_to_completion(&mut self) -> u64 {
        let mut ticks = 0;
        while let Some(wait) = self.scheduler.time_until_next() {
            ticks += u64::from(self.advance(wait).fired);
        }
        ticks
    }

    /// Time until the next queued tick, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }

    /// Whether a sort is animating.
    pub fn is_running(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Algorithm of the running sort.
    pub fn active_algorithm(&self) -> Option<Algorithm> {
        let active = self.scheduler.active()?;
        self.current
            .filter(|(token, _)| *token == active)
            .map(|(_, algorithm)| algorithm)
    }

    pub fn sequence(&self) -> &Sequence {
        &self.stage.sequence
    }

    pub fn renderer(&self) -> &R {
        &self.stage.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.stage.renderer
    }

    /// Give the renderer back, dropping any queued ticks.
    pub fn into_renderer(self) -> R {
        self.stage.renderer
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            renders: self.stage.renders,
            ..self.stats
        }
    }

    fn absorb(&mut self, report: TickReport) {
        self.stats.ticks += u64::from(report.fired);
        self.stats.stale_ticks += u64::from(report.stale);
        self.stats.runs_completed += u64::from(report.completed);
        if report.completed > 0
            && self.scheduler.is_idle()
            && let Some((token, algorithm)) = self.current.take()
        {
            info!(%token, algorithm = algorithm.slug(), "sort finished");
        }
    }
}

impl<R> std::fmt::Debug for Visualizer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visualizer")
            .field("keys", &self.stage.sequence.keys())
            .field("scheduler", &self.scheduler)
            .field("current", &self.current)
            .field("stats", &self.stats)
            .finish()
    }
}
