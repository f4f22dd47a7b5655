//! Single-pair shortest paths over a `Graph` (Dijkstra).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};
use wf_core::{Cost, Real, WfError, WfResult};
use wf_graph::Graph;

use crate::path::Path;

/// Edge labels that carry a non-negative traversal cost.
///
/// Implementations must never return a negative or non-finite value; the
/// search treats that as a contract violation and panics.
pub trait EdgeCost {
    fn edge_cost(&self) -> Real;
}

impl EdgeCost for Cost {
    fn edge_cost(&self) -> Real {
        self.get()
    }
}

// Only widths that convert to `Real` exactly; `u64` labels above 2^53 would
// collapse onto their neighbours.
macro_rules! unsigned_edge_cost {
    ($($t:ty),*) => {
        $(impl EdgeCost for $t {
            fn edge_cost(&self) -> Real {
                Real::from(*self)
            }
        })*
    };
}

unsigned_edge_cost!(u8, u16, u32);

/// Counters from one search, logged at `debug` level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate paths pushed onto the frontier.
    pub pushed: usize,
    /// Candidate paths popped off the frontier.
    pub popped: usize,
    /// Nodes whose shortest distance was finalized.
    pub settled: usize,
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// cheaper first, then earlier-pushed first.
struct Candidate<N> {
    cost: Real,
    seq: u64,
    path: Path<N>,
}

impl<N> PartialEq for Candidate<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Candidate<N> {}

impl<N> PartialOrd for Candidate<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Candidate<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cheapest path from `start` to `end`, or `None` if `end` is unreachable.
///
/// Ties between equal-cost candidates go to whichever was discovered first.
///
/// # Panics
///
/// If `start` or `end` is not a node of `graph`, or if `end` is only
/// reachable along paths whose total cost overflows `Real`.
pub fn find_path<N, E>(graph: &Graph<N, E>, start: &N, end: &N) -> Option<Path<N>>
where
    N: Eq + Hash + Clone,
    E: Eq + Hash + Clone + EdgeCost,
{
    find_path_with_stats(graph, start, end).0
}

/// [`find_path`] plus the search counters.
pub fn find_path_with_stats<N, E>(
    graph: &Graph<N, E>,
    start: &N,
    end: &N,
) -> (Option<Path<N>>, SearchStats)
where
    N: Eq + Hash + Clone,
    E: Eq + Hash + Clone + EdgeCost,
{
    assert!(
        graph.contains_value(start),
        "find_path: start is not a node of the graph"
    );
    assert!(
        graph.contains_value(end),
        "find_path: end is not a node of the graph"
    );
    match search(graph, start, end) {
        Ok(found) => found,
        Err(err) => panic!("find_path: {err}"),
    }
}

/// [`find_path`] with its contract violations returned as errors: missing
/// endpoints as `WfError::UnknownNode`, an overflowing route as
/// `WfError::NonFinite`.
pub fn try_find_path<N, E>(
    graph: &Graph<N, E>,
    start: &N,
    end: &N,
) -> WfResult<Option<Path<N>>>
where
    N: Eq + Hash + Clone + Debug,
    E: Eq + Hash + Clone + EdgeCost,
{
    for node in [start, end] {
        if !graph.contains_value(node) {
            return Err(WfError::UnknownNode {
                node: format!("{node:?}"),
            });
        }
    }
    Ok(search(graph, start, end)?.0)
}

/// Extensions whose running total would overflow are dropped: any finite
/// route is cheaper. If the frontier then runs dry, the destination may
/// still be reachable at an unrepresentable cost, which is an error rather
/// than "no path".
fn search<N, E>(
    graph: &Graph<N, E>,
    start: &N,
    end: &N,
) -> WfResult<(Option<Path<N>>, SearchStats)>
where
    N: Eq + Hash + Clone,
    E: Eq + Hash + Clone + EdgeCost,
{
    let mut stats = SearchStats::default();
    if start == end {
        return Ok((Some(Path::new(start.clone())), stats));
    }

    let mut frontier = BinaryHeap::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut seq = 0u64;
    let mut overflowed = false;

    frontier.push(Candidate {
        cost: 0.0,
        seq,
        path: Path::new(start.clone()),
    });
    stats.pushed += 1;

    while let Some(Candidate { path, .. }) = frontier.pop() {
        stats.popped += 1;
        let here = path.end();
        if here == end {
            debug!(
                cost = path.cost(),
                hops = path.len(),
                settled = stats.settled,
                pushed = stats.pushed,
                "shortest path found"
            );
            return Ok((Some(path), stats));
        }
        if settled.contains(here) {
            continue;
        }
        settled.insert(here.clone());
        stats.settled += 1;
        trace!(cost = path.cost(), hops = path.len(), "settled node");

        for (child, label) in graph.children(here) {
            if settled.contains(child) {
                continue;
            }
            let step = label.edge_cost();
            // A bad step is left for `extend` to reject
            if step.is_finite() && step >= 0.0 && !(path.cost() + step).is_finite() {
                overflowed = true;
                trace!(cost = path.cost(), step, "dropped overflowing extension");
                continue;
            }
            seq += 1;
            let next = path.extend(child.clone(), step);
            frontier.push(Candidate {
                cost: next.cost(),
                seq,
                path: next,
            });
            stats.pushed += 1;
        }
    }

    debug!(
        settled = stats.settled,
        pushed = stats.pushed,
        overflowed,
        "frontier exhausted, no path"
    );
    if overflowed {
        return Err(WfError::NonFinite {
            what: "path cost",
            value: Real::INFINITY,
        });
    }
    Ok((None, stats))
}
