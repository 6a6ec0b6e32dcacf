//! Iterative-deepening A* (IDA*) on 4-connected unit-cost grids.
//!
//! Each pass restarts from the entry with an empty settled set and only
//! admits children whose `cost + manhattan(child, target)` is within the
//! current threshold. The threshold starts at the entry's Manhattan distance
//! and grows by one after every failed pass, so memory stays bounded by one
//! pass while earlier work is recomputed.
//!
//! Children are queued in right, left, down, up order and a pass settles
//! them first-in first-out, which settles cells in non-decreasing cost order.
//! The first successful pass therefore returns a shortest path.

use std::collections::VecDeque;

use log::{trace, warn};

use crate::Search;
use crate::distance::manhattan;
use crate::node::{Score, SearchNode};
use crate::search::Outcome;

impl Search {
    /// Run threshold passes until the target is settled.
    ///
    /// A pass that prunes no child has settled every reachable cell, so a
    /// larger threshold cannot help and the search ends as
    /// [`Outcome::Exhausted`]. If `max_threshold` is set and the next
    /// threshold would exceed it, the search ends as
    /// [`Outcome::ThresholdExceeded`].
    pub(crate) fn explore_idastar(&mut self, max_threshold: Option<i32>) -> Outcome {
        let entry = self.entry();
        let target = self.target();
        let h0 = manhattan(entry, target);

        let mut frontier = VecDeque::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut threshold = h0;

        let outcome = 'deepen: loop {
            if max_threshold.is_some_and(|max| threshold > max) {
                warn!(
                    "ida* gave up at threshold {} ({} nodes expanded)",
                    threshold, self.nodes_expanded
                );
                break 'deepen Outcome::ThresholdExceeded { threshold };
            }

            self.begin_pass();
            frontier.clear();
            let root = self.nodes.push(SearchNode::root(entry, Score::Discrete(h0)));
            frontier.push_back(root);
            let mut pruned = false;

            while let Some(id) = frontier.pop_front() {
                if !self.settle(id) {
                    continue;
                }

                let node = *self.nodes.get(id);
                if node.coord == target {
                    self.final_node = Some(id);
                    trace!(
                        "ida* pass {}: target settled after {} cells",
                        threshold,
                        self.visited.len()
                    );
                    break 'deepen Outcome::Found;
                }

                nbuf.clear();
                self.open_neighbors(node.coord, &mut nbuf);

                for &next in nbuf.iter() {
                    let cost = node.cost + 1;
                    let f = cost + manhattan(next, target);
                    if f > threshold {
                        pruned = true;
                        continue;
                    }
                    let child = SearchNode::child(id, node.cost, next, Score::Discrete(f));
                    frontier.push_back(self.nodes.push(child));
                }
            }

            trace!(
                "ida* pass {}: {} cells settled, pruned: {}",
                threshold,
                self.visited.len(),
                pruned
            );
            if !pruned {
                break 'deepen Outcome::Exhausted;
            }
            threshold += 1;
        };

        self.nbuf = nbuf;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use mazepath_core::{Coord, Grid};

    use crate::node::Score;
    use crate::{Outcome, Search, Strategy};

    fn idastar(grid: Grid, entry: Coord, target: Coord, max_threshold: Option<i32>) -> Search {
        let mut s = Search::new(grid, entry, target, Strategy::IdaStar { max_threshold }).unwrap();
        s.run();
        s
    }

    #[test]
    fn open_grid_3x3() {
        let s = idastar(Grid::open(3, 3), Coord::new(0, 0), Coord::new(2, 2), None);
        assert_eq!(s.outcome(), Some(Outcome::Found));
        let path = s.reconstruct_path().unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.destination(s.entry()), s.target());
        // Right is generated before down, and the queue is first-in first-out.
        assert_eq!(path.to_string(), "RRDD");
    }

    #[test]
    fn entry_equals_target() {
        let s = idastar(Grid::open(2, 2), Coord::new(1, 1), Coord::new(1, 1), None);
        assert_eq!(s.outcome(), Some(Outcome::Found));
        assert!(s.reconstruct_path().unwrap().is_empty());
        assert_eq!(s.nodes_expanded(), 1);
    }

    #[test]
    fn scores_are_discrete() {
        let s = idastar(Grid::open(2, 3), Coord::new(0, 0), Coord::new(1, 2), None);
        assert!(s.visited().all(|n| matches!(n.evaluation, Score::Discrete(_))));
        assert_eq!(s.final_node().unwrap().evaluation, Score::Discrete(3));
        assert_eq!(s.final_node().unwrap().cost, 3);
    }

    #[test]
    fn deepens_around_wall() {
        // S # T
        // . # .
        // . . .
        let grid = Grid::from_blocked(3, 3, [Coord::new(0, 1), Coord::new(1, 1)]).unwrap();
        let s = idastar(grid, Coord::new(0, 0), Coord::new(0, 2), None);
        assert_eq!(s.outcome(), Some(Outcome::Found));
        let path = s.reconstruct_path().unwrap();
        assert_eq!(path.to_string(), "DDRRUU");
        // Thresholds 2 through 5 fail and 6 succeeds. The counter spans all
        // passes, the visited list only the last one.
        assert!(s.nodes_expanded() > s.visited().count());
        assert_eq!(s.final_node().unwrap().cost, 6);
    }

    #[test]
    fn walled_off_target_terminates() {
        let grid = Grid::from_blocked(
            5,
            5,
            [
                Coord::new(1, 2),
                Coord::new(3, 2),
                Coord::new(2, 1),
                Coord::new(2, 3),
            ],
        )
        .unwrap();
        let s = idastar(grid, Coord::new(0, 0), Coord::new(2, 2), None);
        assert_eq!(s.outcome(), Some(Outcome::Exhausted));
        assert!(s.reconstruct_path().is_err());
        // The last pass saw the whole reachable area.
        assert_eq!(s.visited().count(), 20);
    }

    #[test]
    fn threshold_limit_stops_search() {
        let grid = Grid::from_blocked(3, 3, [Coord::new(0, 1), Coord::new(1, 1)]).unwrap();
        let s = idastar(grid, Coord::new(0, 0), Coord::new(0, 2), Some(4));
        assert_eq!(
            s.outcome(),
            Some(Outcome::ThresholdExceeded { threshold: 5 })
        );
        assert!(s.reconstruct_path().is_err());
        assert!(s.report().path.is_empty());
    }

    #[test]
    fn limit_below_entry_estimate_expands_nothing() {
        let s = idastar(Grid::open(4, 4), Coord::new(0, 0), Coord::new(3, 3), Some(5));
        assert_eq!(
            s.outcome(),
            Some(Outcome::ThresholdExceeded { threshold: 6 })
        );
        assert_eq!(s.nodes_expanded(), 0);
    }

    #[test]
    fn limit_at_optimum_still_finds_path() {
        let s = idastar(Grid::open(4, 4), Coord::new(0, 0), Coord::new(3, 3), Some(6));
        assert_eq!(s.outcome(), Some(Outcome::Found));
        assert_eq!(s.reconstruct_path().unwrap().len(), 6);
    }
}
