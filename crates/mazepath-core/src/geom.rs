//! Geometry primitive: [`Coord`].

use std::fmt;
use std::ops::{Add, Sub};

/// A cell address on the grid. Rows grow downwards, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis-aligned neighbours in generation order:
    /// right, left, down, up.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [
            self.shift(0, 1),
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(-1, 0),
        ]
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
