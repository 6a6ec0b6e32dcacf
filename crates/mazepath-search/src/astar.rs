use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Search;
use crate::heuristic::Heuristic;
use crate::node::{NodeId, Score, SearchNode};
use crate::search::Outcome;

/// Frontier entry ordered by evaluation, then by remaining estimate, then by
/// insertion order.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    f: f64,
    h: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Among equal
        // f the deeper node (smaller h) wins, then the earliest push.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Search {
    /// Best-first exploration from the entry.
    ///
    /// Children are pushed even when the frontier already holds the same
    /// coordinate; stale entries are skipped when popped.
    pub(crate) fn explore_astar(&mut self, heuristic: Heuristic) -> Outcome {
        let entry = self.entry();
        let target = self.target();

        let h = heuristic.estimate(entry, target);
        let root = self.nodes.push(SearchNode::root(entry, Score::Continuous(h)));
        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(FrontierEntry {
            f: h,
            h,
            seq,
            node: root,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search Outcome::Exhausted;
            };

            // Skip stale entries.
            if !self.settle(current.node) {
                continue;
            }

            let node = *self.nodes.get(current.node);
            if node.coord == target {
                self.final_node = Some(current.node);
                break 'search Outcome::Found;
            }

            nbuf.clear();
            self.open_neighbors(node.coord, &mut nbuf);

            for &next in nbuf.iter() {
                let h = heuristic.estimate(next, target);
                let f = h + f64::from(node.cost + 1);
                let id = self.nodes.push(SearchNode::child(
                    current.node,
                    node.cost,
                    next,
                    Score::Continuous(f),
                ));
                seq += 1;
                open.push(FrontierEntry { f, h, seq, node: id });
            }
        };

        self.nbuf = nbuf;
        outcome
    }
}
