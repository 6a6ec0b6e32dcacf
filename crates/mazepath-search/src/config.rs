use mazepath_core::Coord;

use crate::heuristic::Heuristic;
use crate::search::Strategy;

/// Which exploration algorithm a [`SearchConfig`] selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    #[default]
    AStar,
    IdaStar,
}

/// Everything needed to set up a search besides the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub entry: Coord,
    pub target: Coord,
    pub strategy: StrategyKind,
    /// A* frontier ordering. IDA* always uses Manhattan distance.
    pub heuristic: Heuristic,
    /// Largest IDA* threshold to try. `None` lets IDA* deepen until it
    /// either finds the target or exhausts the reachable area.
    pub max_threshold: Option<i32>,
}

impl SearchConfig {
    /// Config for a search between `entry` and `target` with default options.
    pub fn new(entry: Coord, target: Coord) -> Self {
        Self {
            entry,
            target,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_threshold(mut self, max_threshold: i32) -> Self {
        self.max_threshold = Some(max_threshold);
        self
    }

    /// The concrete strategy this config describes.
    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyKind::AStar => Strategy::AStar(self.heuristic),
            StrategyKind::IdaStar => Strategy::IdaStar {
                max_threshold: self.max_threshold,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.strategy, StrategyKind::AStar);
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert_eq!(cfg.max_threshold, None);
        assert_eq!(cfg.strategy(), Strategy::AStar(Heuristic::Manhattan));
    }

    #[test]
    fn ida_star_ignores_heuristic() {
        let cfg = SearchConfig::new(Coord::new(1, 0), Coord::new(16, 24))
            .with_strategy(StrategyKind::IdaStar)
            .with_heuristic(Heuristic::Euclidean)
            .with_max_threshold(100);
        assert_eq!(
            cfg.strategy(),
            Strategy::IdaStar {
                max_threshold: Some(100)
            }
        );
    }
}
