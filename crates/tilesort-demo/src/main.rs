#![forbid(unsafe_code)]

//! Tilesort demo binary entry point.

use std::io;

use tilesort_demo::cli;
use tilesort_demo::headless::run_headless;
use tilesort_demo::logging::{self, LogSettings};
use tilesort_demo::terminal::run_interactive;
use tilesort_runtime::VisualizerConfig;

fn main() {
    let opts = cli::Opts::parse();

    if let Some(settings) = LogSettings::from_env()
        && let Err(e) = logging::init(&settings)
    {
        eprintln!("Logging disabled: {e}");
    }

    let base = match VisualizerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let config = opts.apply(base);

    let result = if opts.headless {
        run_headless(config, opts.algorithm, io::stdout().lock())
    } else {
        run_interactive(config, opts.algorithm, opts.autostart)
    };
    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
