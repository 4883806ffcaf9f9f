#![forbid(unsafe_code)]

//! Log output for the demo.
//!
//! The terminal belongs to the animation, so logs go to a file and only when
//! `TILESORT_LOG` holds a filter (`debug`, `tilesort_runtime=trace`, ...).

use std::fmt;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "tilesort.log";

/// Where logs go and what gets through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub file: PathBuf,
}

impl LogSettings {
    /// Read `TILESORT_LOG` / `TILESORT_LOG_FILE`. `None` when logging is off.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let filter = lookup("TILESORT_LOG")?;
        let filter = filter.trim();
        if filter.is_empty() {
            return None;
        }
        let file = lookup("TILESORT_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Some(Self {
            filter: filter.to_string(),
            file: PathBuf::from(file),
        })
    }
}

/// Logging could not be set up.
#[derive(Debug)]
pub enum LogError {
    Filter(ParseError),
    File { path: PathBuf, source: io::Error },
    AlreadyInitialized,
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(err) => write!(f, "invalid TILESORT_LOG filter: {err}"),
            Self::File { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::AlreadyInitialized => f.write_str("a global subscriber is already installed"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Filter(err) => Some(err),
            Self::File { source, .. } => Some(source),
            Self::AlreadyInitialized => None,
        }
    }
}

/// Install a global fmt subscriber writing to `settings.file`.
pub fn init(settings: &LogSettings) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(&settings.filter).map_err(LogError::Filter)?;
    let file = File::create(&settings.file).map_err(|source| LogError::File {
        path: settings.file.clone(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LogError::AlreadyInitialized)?;
    tracing::info!(filter = %settings.filter, "logging started");
    Ok(())
}
