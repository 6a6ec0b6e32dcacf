use std::fmt;
use std::time::{Duration, Instant};

use log::debug;
use mazepath_core::{Coord, Grid};

use crate::config::SearchConfig;
use crate::error::{InvalidReason, Result, SearchError};
use crate::heuristic::Heuristic;
use crate::moves::{Move, Path};
use crate::node::{NodeArena, NodeId, SearchNode};

/// Exploration algorithm driven by a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Best-first search over a min-priority frontier.
    AStar(Heuristic),
    /// Iterative deepening with a Manhattan cost bound that grows by one per
    /// pass.
    ///
    /// With `max_threshold` set, the search gives up once the bound would
    /// exceed it. Independently of the limit, a pass that prunes nothing has
    /// seen every reachable cell and ends the search.
    IdaStar { max_threshold: Option<i32> },
}

impl Strategy {
    /// Short name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AStar(_) => "a*",
            Self::IdaStar { .. } => "ida*",
        }
    }
}

impl fmt::Display for Strategy {
    /// The strategy name, with the heuristic appended for A*: `a*/manhattan`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AStar(h) => write!(f, "{}/{}", self.name(), h.name()),
            Self::IdaStar { .. } => f.write_str(self.name()),
        }
    }
}

/// How the last run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The target was settled.
    Found,
    /// Every reachable cell was settled without meeting the target.
    Exhausted,
    /// IDA* stopped because the next bound, `threshold`, is above the
    /// configured limit.
    ThresholdExceeded { threshold: i32 },
}

impl Outcome {
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found)
    }
}

/// Results handed to whoever consumes a finished search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Wall-clock search time in seconds.
    pub elapsed_secs: f64,
    /// Move symbols from entry to target; empty when no path was found.
    pub path: String,
    pub path_len: usize,
    pub nodes_expanded: usize,
    /// `None` if the search never ran.
    pub outcome: Option<Outcome>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Driver for a single entry-to-target search on a fixed grid.
///
/// `Search` owns the grid and all exploration state. [`run`](Self::run)
/// times the selected [`Strategy`], after which the node count, elapsed time
/// and path are available. Running again starts from scratch and yields the
/// same result.
#[derive(Debug)]
pub struct Search {
    grid: Grid,
    entry: Coord,
    target: Coord,
    strategy: Strategy,
    pub(crate) nodes: NodeArena,
    // Per-cell pass stamp; a cell is settled iff its stamp equals `pass`.
    pub(crate) settled: Vec<u32>,
    pub(crate) pass: u32,
    pub(crate) visited: Vec<NodeId>,
    pub(crate) final_node: Option<NodeId>,
    pub(crate) nodes_expanded: usize,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Coord>,
    elapsed: Duration,
    outcome: Option<Outcome>,
}

impl Search {
    /// Set up a search from `entry` to `target` on `grid`.
    ///
    /// Both coordinates must be in bounds and the target must be
    /// traversable. A blocked entry is accepted; it is where the search
    /// starts, never a cell it steps onto.
    pub fn new(grid: Grid, entry: Coord, target: Coord, strategy: Strategy) -> Result<Self> {
        if !grid.contains(entry) {
            return Err(SearchError::InvalidCoordinate {
                coord: entry,
                reason: InvalidReason::EntryOutOfBounds,
            });
        }
        if !grid.contains(target) {
            return Err(SearchError::InvalidCoordinate {
                coord: target,
                reason: InvalidReason::TargetOutOfBounds,
            });
        }
        if grid.is_blocked(target) {
            return Err(SearchError::InvalidCoordinate {
                coord: target,
                reason: InvalidReason::TargetBlocked,
            });
        }
        let len = grid.len();
        Ok(Self {
            grid,
            entry,
            target,
            strategy,
            nodes: NodeArena::default(),
            settled: vec![0; len],
            pass: 0,
            visited: Vec::new(),
            final_node: None,
            nodes_expanded: 0,
            nbuf: Vec::with_capacity(4),
            elapsed: Duration::ZERO,
            outcome: None,
        })
    }

    /// Set up a search from a [`SearchConfig`].
    pub fn with_config(grid: Grid, config: &SearchConfig) -> Result<Self> {
        Self::new(grid, config.entry, config.target, config.strategy())
    }

    /// Explore the grid with the configured strategy and record metrics.
    pub fn run(&mut self) -> Outcome {
        debug!(
            "{} search {} -> {} on {}x{} grid",
            self.strategy,
            self.entry,
            self.target,
            self.grid.rows(),
            self.grid.cols()
        );
        self.begin_pass();
        self.nodes_expanded = 0;
        self.outcome = None;

        let start = Instant::now();
        let outcome = match self.strategy {
            Strategy::AStar(heuristic) => self.explore_astar(heuristic),
            Strategy::IdaStar { max_threshold } => self.explore_idastar(max_threshold),
        };
        self.elapsed = start.elapsed();
        self.outcome = Some(outcome);

        debug!(
            "{} search finished: {:?}, {} nodes expanded, {} nodes created, {:?}",
            self.strategy,
            outcome,
            self.nodes_expanded,
            self.nodes.len(),
            self.elapsed
        );
        outcome
    }

    /// Turn the terminal node's parent chain into entry-to-target moves.
    ///
    /// Fails with [`SearchError::NoPathFound`] if the last run did not reach
    /// the target, or if the search has not run.
    ///
    /// # Panics
    ///
    /// If two linked nodes are not one axis-aligned step apart. Neighbours
    /// are only generated by unit steps, so this indicates a bug.
    pub fn reconstruct_path(&self) -> Result<Path> {
        let last = self.final_node.ok_or(SearchError::NoPathFound)?;
        let chain: Vec<&SearchNode> = self.nodes.ancestors(last).collect();
        let mut moves: Vec<Move> = chain
            .windows(2)
            .map(|pair| {
                let delta = pair[0].coord - pair[1].coord;
                Move::from_delta(delta).unwrap_or_else(|| {
                    panic!(
                        "parent link {} -> {} is not a unit step",
                        pair[1].coord, pair[0].coord
                    )
                })
            })
            .collect();
        moves.reverse();
        Ok(Path::new(moves))
    }

    /// Summarise the last run for a result consumer.
    pub fn report(&self) -> SearchReport {
        let path = self
            .reconstruct_path()
            .map(|p| p.to_string())
            .unwrap_or_default();
        SearchReport {
            elapsed_secs: self.elapsed_secs(),
            path_len: path.len(),
            path,
            nodes_expanded: self.nodes_expanded,
            outcome: self.outcome,
        }
    }

    /// Number of settled coordinates in the last run, summed over all
    /// passes for IDA*.
    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Wall-clock duration of the last run.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock duration of the last run, in fractional seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// How the last run ended, or `None` before the first run.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Nodes in settlement order. For IDA* this covers the final pass only.
    pub fn visited(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.visited.iter().map(|&id| self.nodes.get(id))
    }

    /// The node that settled the target, if any.
    pub fn final_node(&self) -> Option<&SearchNode> {
        self.final_node.map(|id| self.nodes.get(id))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn entry(&self) -> Coord {
        self.entry
    }

    #[inline]
    pub fn target(&self) -> Coord {
        self.target
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    // -----------------------------------------------------------------------
    // Shared exploration helpers
    // -----------------------------------------------------------------------

    /// Drop all nodes and forget settled cells. `nodes_expanded` is kept.
    pub(crate) fn begin_pass(&mut self) {
        self.nodes.clear();
        self.visited.clear();
        self.final_node = None;
        self.pass = self.pass.wrapping_add(1);
        if self.pass == 0 {
            self.settled.fill(0);
            self.pass = 1;
        }
    }

    #[inline]
    pub(crate) fn is_settled(&self, c: Coord) -> bool {
        self.grid
            .index(c)
            .is_some_and(|i| self.settled[i] == self.pass)
    }

    /// Settle the node's coordinate. Returns `false`, changing nothing, if
    /// that coordinate was already settled in this pass.
    pub(crate) fn settle(&mut self, id: NodeId) -> bool {
        let coord = self.nodes.get(id).coord;
        let Some(i) = self.grid.index(coord) else {
            return false;
        };
        if self.settled[i] == self.pass {
            return false;
        }
        self.settled[i] = self.pass;
        self.nodes_expanded += 1;
        self.visited.push(id);
        true
    }

    /// Append the traversable, not yet settled neighbours of `c` into `buf`
    /// in generation order. The caller clears `buf` before calling.
    pub(crate) fn open_neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.grid.is_traversable(n) && !self.is_settled(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_search(rows: i32, cols: i32, entry: Coord, target: Coord) -> Search {
        Search::new(
            Grid::open(rows, cols),
            entry,
            target,
            Strategy::AStar(Heuristic::Manhattan),
        )
        .unwrap()
    }

    #[test]
    fn strategy_display_names_the_heuristic() {
        assert_eq!(
            Strategy::AStar(Heuristic::Manhattan).to_string(),
            "a*/manhattan"
        );
        assert_eq!(
            Strategy::AStar(Heuristic::Euclidean).to_string(),
            "a*/euclidean"
        );
        let ida = Strategy::IdaStar {
            max_threshold: Some(3),
        };
        assert_eq!(ida.to_string(), "ida*");
    }

    #[test]
    fn rejects_entry_out_of_bounds() {
        let err = Search::new(
            Grid::open(3, 3),
            Coord::new(3, 0),
            Coord::new(0, 0),
            Strategy::AStar(Heuristic::Manhattan),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidCoordinate {
                coord: Coord::new(3, 0),
                reason: InvalidReason::EntryOutOfBounds
            }
        );
    }

    #[test]
    fn rejects_target_out_of_bounds() {
        let err = Search::new(
            Grid::open(3, 3),
            Coord::new(0, 0),
            Coord::new(0, -1),
            Strategy::IdaStar {
                max_threshold: None,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidCoordinate {
                reason: InvalidReason::TargetOutOfBounds,
                ..
            }
        ));
    }

    #[test]
    fn rejects_blocked_target() {
        let grid = Grid::from_blocked(3, 3, [Coord::new(2, 2)]).unwrap();
        let err = Search::new(
            grid,
            Coord::new(0, 0),
            Coord::new(2, 2),
            Strategy::AStar(Heuristic::Euclidean),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidCoordinate {
                reason: InvalidReason::TargetBlocked,
                ..
            }
        ));
    }

    #[test]
    fn accepts_blocked_entry() {
        let grid = Grid::from_blocked(1, 3, [Coord::new(0, 0)]).unwrap();
        let mut s = Search::new(
            grid,
            Coord::new(0, 0),
            Coord::new(0, 2),
            Strategy::AStar(Heuristic::Manhattan),
        )
        .unwrap();
        assert!(s.run().is_found());
        assert_eq!(s.reconstruct_path().unwrap().to_string(), "RR");
    }

    #[test]
    fn path_before_run_is_no_path() {
        let s = open_search(3, 3, Coord::new(0, 0), Coord::new(2, 2));
        assert_eq!(s.outcome(), None);
        assert_eq!(s.reconstruct_path(), Err(SearchError::NoPathFound));
        let report = s.report();
        assert!(report.path.is_empty());
        assert_eq!(report.path_len, 0);
        assert_eq!(report.nodes_expanded, 0);
        assert_eq!(report.outcome, None);
    }

    #[test]
    fn settle_is_once_per_pass() {
        let mut s = open_search(2, 2, Coord::new(0, 0), Coord::new(1, 1));
        s.begin_pass();
        let a = s.nodes.push(SearchNode::root(
            Coord::new(0, 1),
            crate::node::Score::Discrete(1),
        ));
        let b = s.nodes.push(SearchNode::root(
            Coord::new(0, 1),
            crate::node::Score::Discrete(0),
        ));
        assert!(s.settle(a));
        assert!(!s.settle(b));
        assert!(s.is_settled(Coord::new(0, 1)));
        assert_eq!(s.nodes_expanded, 1);
        assert_eq!(s.visited.len(), 1);

        s.begin_pass();
        assert!(!s.is_settled(Coord::new(0, 1)));
        assert!(s.visited.is_empty());
        assert_eq!(s.nodes_expanded, 1);
    }

    #[test]
    fn open_neighbors_skip_blocked_and_settled() {
        let grid = Grid::from_blocked(3, 3, [Coord::new(1, 2)]).unwrap();
        let mut s = Search::new(
            grid,
            Coord::new(1, 1),
            Coord::new(0, 0),
            Strategy::AStar(Heuristic::Manhattan),
        )
        .unwrap();
        s.begin_pass();
        let up = s.nodes.push(SearchNode::root(
            Coord::new(0, 1),
            crate::node::Score::Discrete(0),
        ));
        s.settle(up);
        let mut n = Vec::new();
        s.open_neighbors(Coord::new(1, 1), &mut n);
        assert_eq!(n, vec![Coord::new(1, 0), Coord::new(2, 1)]);
    }

    #[test]
    #[should_panic(expected = "not a unit step")]
    fn broken_parent_chain_panics() {
        let mut s = open_search(3, 3, Coord::new(0, 0), Coord::new(2, 2));
        s.begin_pass();
        let root = s.nodes.push(SearchNode::root(
            Coord::new(0, 0),
            crate::node::Score::Discrete(4),
        ));
        let jump = s.nodes.push(SearchNode::child(
            root,
            0,
            Coord::new(2, 2),
            crate::node::Score::Discrete(1),
        ));
        s.final_node = Some(jump);
        let _ = s.reconstruct_path();
    }
}
