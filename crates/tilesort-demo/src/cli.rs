#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args by hand (no external dependencies) and supports environment
//! variable defaults via the `TILESORT_DEMO_*` prefix. Explicit flags win
//! over environment variables.

use std::env;
use std::fmt;
use std::process;
use std::time::Duration;

use tilesort_core::Algorithm;
use tilesort_runtime::config::parse_tiles;
use tilesort_runtime::{ConfigError, Pacing, VisualizerConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Tilesort Demo | animated sorting of a row of tiles

USAGE:
    tilesort-demo [OPTIONS]

OPTIONS:
    --algorithm=NAME     Initially selected algorithm (default: bubble)
    --tiles=N|K1,K2,..   Tile count, or explicit comma-separated keys (default: 8)
    --seed=N             Shuffle seed
    --delay-ms=N         Pause between steps for every algorithm
    --autostart          Start sorting immediately
    --headless           Print frames to stdout instead of drawing (implies --autostart)
    --help, -h           Show this help message
    --version, -V        Show version

ALGORITHMS:
    bubble      Bubble sort      one comparison per step
    selection   Selection sort   one comparison per step
    insertion   Insertion sort   one shift per step
    merge       Merge sort       one split or merge per step
    quick       Quick sort       one partition per step
    heap        Heap sort        one sift per step

KEYBINDINGS:
    Up / Down, 1-6  Select algorithm
    Enter / s       Sort
    r               Reset (shuffle)
    q / Esc         Quit

ENVIRONMENT VARIABLES:
    TILESORT_SEED, TILESORT_TILES, TILESORT_DELAY_MS   Visualizer defaults
    TILESORT_DEMO_ALGORITHM   Override --algorithm
    TILESORT_DEMO_HEADLESS    Set to 1 for --headless
    TILESORT_LOG              Log filter (e.g. debug); enables logging
    TILESORT_LOG_FILE         Log destination (default: tilesort.log)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Tile keys, when overridden.
    pub keys: Option<Vec<u32>>,
    /// Shuffle seed, when overridden.
    pub seed: Option<u64>,
    /// Uniform step delay, when overridden.
    pub delay_ms: Option<u64>,
    /// Start sorting without waiting for a key.
    pub autostart: bool,
    /// Print frames instead of using the terminal.
    pub headless: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            keys: None,
            seed: None,
            delay_ms: None,
            autostart: false,
            headless: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    Unknown(String),
    InvalidValue { flag: &'static str, value: String },
    Config(ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(arg) => write!(f, "Unknown argument: {arg}"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl Opts {
    /// Parse the process arguments and environment; prints help/version or
    /// an error and exits when appropriate.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args, |name| env::var(name).ok()) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("tilesort-demo {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` (without the program name) on top of defaults taken
    /// from `lookup`.
    pub fn parse_from(
        args: &[String],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, CliError> {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = lookup("TILESORT_DEMO_ALGORITHM") {
            opts.algorithm = parse_algorithm("TILESORT_DEMO_ALGORITHM", &val)?;
        }
        if let Some(val) = lookup("TILESORT_DEMO_HEADLESS") {
            opts.headless = matches!(val.trim(), "1" | "true" | "yes");
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                "--autostart" => opts.autostart = true,
                "--headless" => opts.headless = true,
                other => {
                    if let Some(val) = other.strip_prefix("--algorithm=") {
                        opts.algorithm = parse_algorithm("--algorithm", val)?;
                    } else if let Some(val) = other.strip_prefix("--tiles=") {
                        opts.keys = Some(parse_tiles("--tiles", val)?);
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        opts.seed = Some(parse_value("--seed", val)?);
                    } else if let Some(val) = other.strip_prefix("--delay-ms=") {
                        opts.delay_ms = Some(parse_value("--delay-ms", val)?);
                    } else {
                        return Err(CliError::Unknown(other.to_string()));
                    }
                }
            }
        }

        if opts.headless {
            opts.autostart = true;
        }
        Ok(Parsed::Run(opts))
    }

    /// Apply these options on top of a base configuration.
    pub fn apply(&self, mut config: VisualizerConfig) -> VisualizerConfig {
        if let Some(keys) = &self.keys {
            config.keys = keys.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ms) = self.delay_ms {
            config.pacing = Pacing::uniform(Duration::from_millis(ms));
        }
        config
    }
}

fn parse_algorithm(flag: &'static str, value: &str) -> Result<Algorithm, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

fn parse_value<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}
