use thiserror::Error;

use crate::geom::Coord;

/// Errors raised while building a [`Grid`](crate::Grid).
///
/// Every variant describes a malformed grid: the supplied data does not
/// match the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The row-major matrix has a different number of entries than
    /// `rows * cols`.
    #[error("malformed grid: expected {expected} cells, got {actual}")]
    MalformedGrid { expected: usize, actual: usize },

    /// A dimension was negative.
    #[error("malformed grid: negative dimensions {rows}x{cols}")]
    NegativeDimensions { rows: i32, cols: i32 },

    /// A blocked coordinate lies outside the declared dimensions.
    #[error("malformed grid: blocked cell {coord} is out of bounds")]
    BlockedOutOfBounds { coord: Coord },
}
