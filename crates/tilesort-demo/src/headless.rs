#![forbid(unsafe_code)]

//! Run one sort without a terminal, printing every frame.

use std::io::{self, Write};

use tilesort_core::Algorithm;
use tilesort_runtime::{RunStats, Visualizer, VisualizerConfig};
use tracing::info;

use crate::view::TextRenderer;

/// Shuffle, sort with `algorithm` on a virtual clock and print each frame to
/// `out`, followed by a summary line.
pub fn run_headless<W: Write + 'static>(
    config: VisualizerConfig,
    algorithm: Algorithm,
    out: W,
) -> io::Result<RunStats> {
    let mut vis = Visualizer::new(config, TextRenderer::new(out));
    vis.start(algorithm);
    let ticks = vis.run_to_completion();
    let elapsed = vis.now();
    let stats = vis.stats();
    if let Some(err) = vis.renderer_mut().take_error() {
        return Err(err);
    }
    let sorted = vis.sequence().is_sorted();
    let mut out = vis.into_renderer().into_inner();
    writeln!(
        out,
        "{algorithm}: {ticks} steps, {} frames, {:.1}s animated, sorted: {sorted}",
        stats.renders,
        elapsed.as_secs_f64()
    )?;
    out.flush()?;
    info!(algorithm = algorithm.slug(), ticks, "headless run finished");
    Ok(stats)
}
