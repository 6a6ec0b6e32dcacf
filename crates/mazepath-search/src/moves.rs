//! Directional moves and the [`Path`] built from them.

use std::fmt;
use std::str::FromStr;

use mazepath_core::Coord;

use crate::error::SearchError;

/// A unit axis-aligned step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Move {
    Right,
    Left,
    Down,
    Up,
}

impl Move {
    /// All moves, in neighbour generation order.
    pub const ALL: [Move; 4] = [Move::Right, Move::Left, Move::Down, Move::Up];

    /// Coordinate offset applied by this move.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Self::Right => Coord::new(0, 1),
            Self::Left => Coord::new(0, -1),
            Self::Down => Coord::new(1, 0),
            Self::Up => Coord::new(-1, 0),
        }
    }

    /// The move whose offset is `delta`, if any.
    pub fn from_delta(delta: Coord) -> Option<Self> {
        match (delta.row, delta.col) {
            (0, 1) => Some(Self::Right),
            (0, -1) => Some(Self::Left),
            (1, 0) => Some(Self::Down),
            (-1, 0) => Some(Self::Up),
            _ => None,
        }
    }

    /// Single-character symbol: `R`, `L`, `D` or `U`.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Down => 'D',
            Self::Up => 'U',
        }
    }

    /// Parse a single move symbol.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'R' => Some(Self::Right),
            'L' => Some(Self::Left),
            'D' => Some(Self::Down),
            'U' => Some(Self::Up),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A sequence of moves in entry-to-target order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    moves: Vec<Move>,
}

impl Path {
    /// Wrap a move sequence.
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the path has no moves (entry == target).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The moves, in order.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Coordinates reached after each move when starting from `entry`.
    ///
    /// The entry itself is not yielded.
    pub fn walk(&self, entry: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.moves.iter().scan(entry, |pos, m| {
            *pos = *pos + m.delta();
            Some(*pos)
        })
    }

    /// Final coordinate after applying every move to `entry`.
    pub fn destination(&self, entry: Coord) -> Coord {
        self.walk(entry).last().unwrap_or(entry)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.moves {
            write!(f, "{}", m.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(pos, ch)| Move::from_symbol(ch).ok_or(SearchError::InvalidMove { ch, pos }))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl From<Vec<Move>> for Path {
    fn from(moves: Vec<Move>) -> Self {
        Self::new(moves)
    }
}
