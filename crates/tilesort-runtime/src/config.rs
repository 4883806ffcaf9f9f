#![forbid(unsafe_code)]

//! Visualizer configuration.
//!
//! Defaults mirror a row of eight picture tiles whose sizes step by 40.
//! [`VisualizerConfig::from_env`] layers `TILESORT_*` environment variables
//! on top of the defaults.
//!
//! | Variable            | Meaning                                          |
//! |---------------------|--------------------------------------------------|
//! | `TILESORT_SEED`     | Shuffle seed (u64)                               |
//! | `TILESORT_TILES`    | Tile count `N`, or comma-separated keys          |
//! | `TILESORT_DELAY_MS` | Pause between ticks for every algorithm          |

use std::env;
use std::fmt;
use std::time::Duration;

use tilesort_core::Algorithm;

/// Key increment between consecutive default tiles.
pub const KEY_STEP: u32 = 40;
/// Number of tiles in the default row.
pub const DEFAULT_TILE_COUNT: usize = 8;
/// Upper bound on the tile count accepted from configuration.
pub const MAX_TILES: usize = 1024;
/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_711E;

/// Pause between ticks, per algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delays: [Duration; 6],
}

impl Pacing {
    /// Same delay for every algorithm.
    pub fn uniform(delay: Duration) -> Self {
        Self { delays: [delay; 6] }
    }

    /// Delay for `algorithm`.
    pub fn delay(&self, algorithm: Algorithm) -> Duration {
        self.delays[algorithm.index()]
    }

    /// Override the delay for one algorithm.
    #[must_use]
    pub fn with(mut self, algorithm: Algorithm, delay: Duration) -> Self {
        self.delays[algorithm.index()] = delay;
        self
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            delays: Algorithm::ALL.map(Algorithm::default_delay),
        }
    }
}

/// Everything a [`crate::Visualizer`] needs to build its row and pace runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Tile keys, in creation order (shuffled before first display).
    pub keys: Vec<u32>,
    /// Seed for the shuffle generator.
    pub seed: u64,
    /// Per-algorithm pause between ticks.
    pub pacing: Pacing,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            keys: default_keys(DEFAULT_TILE_COUNT),
            seed: DEFAULT_SEED,
            pacing: Pacing::default(),
        }
    }
}

impl VisualizerConfig {
    /// Defaults overridden by `TILESORT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup("TILESORT_SEED") {
            config.seed = parse_number("TILESORT_SEED", &value)?;
        }
        if let Some(value) = lookup("TILESORT_TILES") {
            config.keys = parse_tiles("TILESORT_TILES", &value)?;
        }
        if let Some(value) = lookup("TILESORT_DELAY_MS") {
            let ms: u64 = parse_number("TILESORT_DELAY_MS", &value)?;
            config.pacing = Pacing::uniform(Duration::from_millis(ms));
        }
        Ok(config)
    }

    /// Replace the keys with the default progression of `count` tiles,
    /// capped at [`MAX_TILES`].
    #[must_use]
    pub fn with_tile_count(mut self, count: usize) -> Self {
        self.keys = default_keys(count);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }
}

/// `count` keys stepping by [`KEY_STEP`]; at most [`MAX_TILES`] of them.
pub fn default_keys(count: usize) -> Vec<u32> {
    (1..=MAX_TILES.min(count))
        .map(|i| i as u32 * KEY_STEP)
        .collect()
}

/// Parse a tile specification: a bare count, or a comma-separated key list.
pub fn parse_tiles(var: &'static str, value: &str) -> Result<Vec<u32>, ConfigError> {
    let keys = if value.contains(',') {
        value
            .split(',')
            .map(|part| parse_number(var, part))
            .collect::<Result<Vec<u32>, _>>()?
    } else {
        let count: usize = parse_number(var, value)?;
        if count > MAX_TILES {
            return Err(ConfigError::TooManyTiles { count });
        }
        default_keys(count)
    };
    if keys.len() > MAX_TILES {
        return Err(ConfigError::TooManyTiles { count: keys.len() });
    }
    Ok(keys)
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

/// Configuration that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held something that does not parse.
    InvalidValue { var: &'static str, value: String },
    /// More tiles than [`MAX_TILES`].
    TooManyTiles { count: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { var, value } => write!(f, "invalid value for {var}: '{value}'"),
            Self::TooManyTiles { count } => {
                write!(f, "too many tiles: {count} (maximum is {MAX_TILES})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
