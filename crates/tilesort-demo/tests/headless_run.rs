//! Headless runs end to end: shuffle, sort, print.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use tilesort_core::Algorithm;
use tilesort_demo::headless::run_headless;
use tilesort_runtime::{Pacing, VisualizerConfig};

/// Writer the test can read back after handing it away.
#[derive(Clone, Default)]
struct Shared(Rc<RefCell<Vec<u8>>>);

impl Write for Shared {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Shared {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

fn config() -> VisualizerConfig {
    VisualizerConfig::default().with_seed(42)
}

#[test]
fn every_algorithm_prints_a_sorted_last_frame() {
    for alg in Algorithm::ALL {
        let out = Shared::default();
        let stats = run_headless(config(), alg, out.clone()).unwrap();
        assert_eq!(stats.runs_completed, 1, "{alg}");

        let text = out.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len() as u64, stats.renders + 1, "{alg}");

        let last_frame = lines[lines.len() - 2];
        let keys = last_frame.split_once(": ").unwrap().1;
        assert_eq!(keys, "40 80 120 160 200 240 280 320", "{alg}");
        assert!(lines[lines.len() - 1].ends_with("sorted: true"), "{alg}");
    }
}

#[test]
fn summary_reports_animated_time() {
    let out = Shared::default();
    let config = config().with_pacing(Pacing::uniform(std::time::Duration::from_millis(500)));
    let stats = run_headless(config, Algorithm::Heap, out.clone()).unwrap();
    let summary = out.text().lines().last().unwrap().to_string();
    let expected = format!(
        "Heap sort: {} steps, {} frames, {:.1}s animated, sorted: true",
        stats.ticks,
        stats.renders,
        stats.ticks as f64 * 0.5
    );
    assert_eq!(summary, expected);
}

#[test]
fn single_tile_row() {
    let out = Shared::default();
    let config = config().with_tile_count(1);
    let stats = run_headless(config, Algorithm::Merge, out.clone()).unwrap();
    assert_eq!(stats.renders, 1);
    assert!(out.text().starts_with("   0: 40\n"));
}
