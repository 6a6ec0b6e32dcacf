use mazepath_core::Coord;

use crate::distance;

/// Remaining-cost estimate used to order the A* frontier.
///
/// Both variants are admissible on a 4-connected unit-cost grid. Manhattan
/// is exact on an open grid and therefore expands no more nodes than
/// Euclidean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// Straight-line distance, `sqrt(Δrow² + Δcol²)`.
    Euclidean,
    /// Axis-aligned distance, `|Δrow| + |Δcol|`.
    #[default]
    Manhattan,
}

impl Heuristic {
    /// Estimated cost of moving from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> f64 {
        match self {
            Self::Euclidean => distance::euclidean(from, to),
            Self::Manhattan => f64::from(distance::manhattan(from, to)),
        }
    }

    /// Short lowercase name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }
}
