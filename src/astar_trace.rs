/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which reports every frontier insertion and closure to an observer and breaks ties between
/// equal estimates by insertion order.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::{AsPrimitive, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::solver::{SearchOptions, SearchStatus};
use crate::trace::TraceKind;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder {
    estimated_cost: f64,
    sequence: usize,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimate wins, and among equal estimates the
        // entry pushed first wins.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        parents.get_index(i).map(|(_, value)| parent(value))
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` until `success` accepts a popped node or the frontier runs dry.
///
/// `observe` is called with [TraceKind::Closed] when a node is expanded and with
/// [TraceKind::Frontier] whenever a node is pushed with a strictly better cost. Stale heap
/// entries are dropped lazily when popped. The start node is seeded with estimate zero and
/// the node accepted by `success` is never reported as closed.
pub(crate) fn astar_traced<N, C, FN, IN, FH, FS, FO>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    mut observe: FO,
    options: &SearchOptions,
) -> (Option<(Vec<N>, C)>, SearchStatus)
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + AsPrimitive<f64>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> f64,
    FS: FnMut(&N) -> bool,
    FO: FnMut(&N, TraceKind),
{
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: 0.0,
        sequence,
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        // A node may sit in the heap several times if a better way to reach it was found.
        // Only the first pop counts.
        if closed.contains(&index) {
            continue;
        }
        let (successors, cost) = {
            let Some((node, &(_, cost))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return (Some((path, cost)), SearchStatus::Found);
            }
            if options
                .max_expansions
                .is_some_and(|budget| closed.len() >= budget)
            {
                warn!(
                    "Expansion budget of {} exhausted before reaching the goal",
                    closed.len()
                );
                return (None, SearchStatus::BudgetExceeded);
            }
            closed.insert(index);
            observe(node, TraceKind::Closed);
            (successors(node), cost)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    observe(e.key(), TraceKind::Frontier);
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    let eligible = options.relax_closed || !closed.contains(&e.index());
                    if eligible && new_cost < e.get().1 {
                        h = heuristic(e.key());
                        n = e.index();
                        observe(e.key(), TraceKind::Frontier);
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost.as_() + h,
                sequence,
                index: n,
            });
        }
    }
    (None, SearchStatus::Exhausted)
}
