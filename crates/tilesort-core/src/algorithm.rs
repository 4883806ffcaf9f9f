#![forbid(unsafe_code)]

//! The six selectable algorithms.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A selectable sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// All algorithms, in selector order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Human-readable name, as shown in a selector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::Selection => "Selection sort",
            Algorithm::Insertion => "Insertion sort",
            Algorithm::Merge => "Merge sort",
            Algorithm::Quick => "Quick sort",
            Algorithm::Heap => "Heap sort",
        }
    }

    /// Short lowercase identifier used on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Default pause between two ticks.
    ///
    /// Bubble sort does the most ticks per visible change and is slowed down
    /// so individual comparisons can be followed.
    #[must_use]
    pub const fn default_delay(self) -> Duration {
        match self {
            Algorithm::Bubble => Duration::from_millis(700),
            _ => Duration::from_millis(100),
        }
    }

    /// Position in [`Algorithm::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|a| *a == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sorting algorithm '{}' (expected one of: bubble, selection, insertion, merge, quick, heap)",
            self.input
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `quick`, `quick-sort`, `quick_sort`, `Quick sort`, `quicksort`
    /// and so on, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        let stem = normalized.strip_suffix("sort").unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|a| a.slug() == stem)
            .ok_or_else(|| ParseAlgorithmError {
                input: s.to_string(),
            })
    }
}
