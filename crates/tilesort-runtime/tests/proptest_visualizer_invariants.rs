//! Property-based tests for paced sort runs.
//!
//! 1. A run started from any shuffle ends sorted, whatever the tick pattern.
//! 2. Every rendered frame is a permutation of the row.
//! 3. Restarting at an arbitrary moment leaves exactly one live run.
//! 4. The renderer is called once per dirty tick.

use std::time::Duration;

use proptest::prelude::*;
use tilesort_runtime::{
    Algorithm, FrameRecorder, Pacing, Sequence, Visualizer, VisualizerConfig,
};

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn visualizer(tiles: usize, seed: u64) -> Visualizer<FrameRecorder> {
    let config = VisualizerConfig::default()
        .with_tile_count(tiles)
        .with_seed(seed)
        .with_pacing(Pacing::uniform(Duration::from_millis(10)));
    Visualizer::new(config, FrameRecorder::new())
}

fn sorted_permutation(frame: &[u32], tiles: usize) -> bool {
    let mut keys = frame.to_vec();
    keys.sort_unstable();
    keys == VisualizerConfig::default().with_tile_count(tiles).keys
}

proptest! {
    #[test]
    fn ends_sorted_under_any_tick_pattern(
        alg in algorithm_strategy(),
        tiles in 0usize..24,
        seed in 1u64..10_000,
        steps in prop::collection::vec(0u64..40, 1..50),
    ) {
        let mut vis = visualizer(tiles, seed);
        vis.start(alg);
        for ms in steps {
            vis.advance(Duration::from_millis(ms));
        }
        vis.run_to_completion();
        prop_assert!(vis.sequence().is_sorted());
        prop_assert!(!vis.is_running());
        for frame in vis.renderer().frames() {
            prop_assert!(sorted_permutation(frame, tiles));
        }
    }
}

proptest! {
    #[test]
    fn restart_mid_run(
        first in algorithm_strategy(),
        second in algorithm_strategy(),
        tiles in 2usize..20,
        seed in 1u64..10_000,
        after_ms in 0u64..300,
    ) {
        let mut vis = visualizer(tiles, seed);
        vis.start(first);
        vis.advance(Duration::from_millis(after_ms));
        let was_running = vis.is_running();
        vis.start(second);
        prop_assert_eq!(vis.active_algorithm(), Some(second));
        vis.run_to_completion();

        let stats = vis.stats();
        prop_assert!(vis.sequence().is_sorted());
        prop_assert_eq!(stats.runs_started, 2);
        prop_assert_eq!(stats.runs_completed + stats.runs_retired, 2);
        prop_assert_eq!(stats.runs_retired, u64::from(was_running));
        prop_assert_eq!(stats.stale_ticks, u64::from(was_running));
    }
}

proptest! {
    #[test]
    fn one_render_per_dirty_tick(alg in algorithm_strategy(), tiles in 0usize..16, seed in 1u64..1000) {
        let config = VisualizerConfig::default()
            .with_tile_count(tiles)
            .with_seed(seed)
            .with_pacing(Pacing::uniform(Duration::from_millis(1)));
        let start = Visualizer::new(config.clone(), FrameRecorder::new()).sequence().clone();
        let mut vis = Visualizer::with_sequence(start, config, FrameRecorder::new());
        vis.start(alg);
        let mut dirty = 0u64;
        while vis.time_until_next().is_some() {
            dirty += u64::from(vis.advance(Duration::from_millis(1)).dirty);
        }
        prop_assert_eq!(vis.renderer().len() as u64, dirty);
        prop_assert_eq!(vis.stats().renders, dirty);
    }
}

#[test]
fn reset_during_merge_sort_stops_it() {
    let mut vis = visualizer(8, 3);
    vis.start(Algorithm::Merge);
    vis.advance(Duration::from_millis(35));
    vis.reset();
    let frozen: Sequence = vis.sequence().clone();
    let report = vis.advance(Duration::from_secs(5));
    assert_eq!(report.fired, 0);
    assert_eq!(vis.sequence(), &frozen);
    assert!(vis.time_until_next().is_none());
}
