use std::fmt;

use mazepath_core::{Coord, GridError};
use thiserror::Error;

/// Convenient result alias for the search crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Why an entry or target coordinate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    EntryOutOfBounds,
    TargetOutOfBounds,
    TargetBlocked,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EntryOutOfBounds => "entry is outside the grid",
            Self::TargetOutOfBounds => "target is outside the grid",
            Self::TargetBlocked => "target is blocked",
        };
        f.write_str(s)
    }
}

/// Errors reported by [`Search`](crate::Search).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Entry or target failed validation at construction.
    #[error("invalid coordinate {coord}: {reason}")]
    InvalidCoordinate { coord: Coord, reason: InvalidReason },

    /// The search has not run, or ran without reaching the target.
    #[error("no path found")]
    NoPathFound,

    /// A move string contained a character outside `R`, `L`, `D`, `U`.
    #[error("invalid move symbol {ch:?} at position {pos}")]
    InvalidMove { ch: char, pos: usize },

    /// The grid itself could not be built.
    #[error(transparent)]
    Grid(#[from] GridError),
}
