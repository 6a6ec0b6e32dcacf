//! The [`Grid`] type — a fixed `rows × cols` maze with blocked cells.
//!
//! A `Grid` is immutable once built, so a single instance can be shared
//! read-only between independent searches.

use crate::error::GridError;
use crate::geom::Coord;

/// A rectangular maze of open and blocked cells.
///
/// Blocked cells are kept in a flat row-major bitmap. A coordinate is
/// traversable iff it lies in `[0, rows) × [0, cols)` and is not blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    rows: i32,
    cols: i32,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a grid with no blocked cells.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn open(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            blocked: vec![false; rows as usize * cols as usize],
        }
    }

    /// Build a grid from a row-major matrix where non-zero entries are
    /// blocked and `0` is open.
    ///
    /// Fails with [`GridError::MalformedGrid`] unless `cells` holds exactly
    /// `rows * cols` entries.
    pub fn from_matrix(rows: i32, cols: i32, cells: &[u8]) -> Result<Self, GridError> {
        Self::from_bitmap(rows, cols, cells.iter().map(|&c| c != 0).collect())
    }

    fn from_bitmap(rows: i32, cols: i32, blocked: Vec<bool>) -> Result<Self, GridError> {
        if rows < 0 || cols < 0 {
            return Err(GridError::NegativeDimensions { rows, cols });
        }
        let expected = rows as usize * cols as usize;
        if blocked.len() != expected {
            return Err(GridError::MalformedGrid {
                expected,
                actual: blocked.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            blocked,
        })
    }

    /// Build a grid from an explicit list of blocked coordinates.
    pub fn from_blocked<I>(rows: i32, cols: i32, blocked: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        if rows < 0 || cols < 0 {
            return Err(GridError::NegativeDimensions { rows, cols });
        }
        let mut grid = Self::open(rows, cols);
        for coord in blocked {
            let Some(i) = grid.index(coord) else {
                return Err(GridError::BlockedOutOfBounds { coord });
            };
            grid.blocked[i] = true;
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether `c` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    /// Whether `c` is an in-bounds blocked cell.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.blocked[i])
    }

    /// Whether `c` can be stepped on: in bounds and not blocked.
    #[inline]
    pub fn is_traversable(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| !self.blocked[i])
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Row-major iterator over blocked coordinates.
    pub fn blocked(&self) -> impl Iterator<Item = Coord> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| self.coord(i))
    }

    /// Convert a coordinate to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }
}

/// Unchecked wire form of a [`Grid`]; deserialized grids go through the
/// same dimension checks as [`Grid::from_matrix`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    blocked: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        Self::from_bitmap(repr.rows, repr.cols, repr.blocked)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_blocked(3, 3, [Coord::new(1, 1)]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn short_bitmap_is_rejected() {
        let json = r#"{"rows":3,"cols":3,"blocked":[false,false]}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("expected 9 cells, got 2"));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let json = r#"{"rows":-1,"cols":2,"blocked":[]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
