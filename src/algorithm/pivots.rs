use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::Float;

use crate::algorithm::params::DmyParams;
use crate::graph::DirectedGraph;

/// Target number of pivots for a frontier of the given size:
/// `max(1, ceil(|F|^a * ln(|F|+1)^b))`. Non-decreasing in `|F|`.
pub fn pivot_threshold(frontier_len: usize, params: &DmyParams) -> usize {
    if frontier_len == 0 {
        return 0;
    }
    let f = frontier_len as f64;
    let k = f.powf(params.pivot_size_exponent) * (f + 1.0).ln().powf(params.pivot_log_exponent);
    (k.ceil() as usize).max(1)
}

/// Number of blocks a frontier of the given size is split into:
/// `max(2, ceil(log2(|F|+1)))`.
pub fn partition_parameter(frontier_len: usize) -> usize {
    let t = ((frontier_len as f64) + 1.0).log2().ceil() as usize;
    t.max(2)
}

/// Picks the pivot set from a frontier: the `k` vertices first in the
/// `(distance asc, out-degree desc, vertex id asc)` order. Small-distance,
/// high-fanout vertices seed the largest reachable subtrees; the id
/// tiebreak keeps runs reproducible.
pub fn select_pivots<W>(
    graph: &DirectedGraph<W>,
    frontier: &[usize],
    dist: &[W],
    params: &DmyParams,
) -> Vec<usize>
where
    W: Float + Debug,
{
    let k = pivot_threshold(frontier.len(), params);
    let mut ordered = frontier.to_vec();
    ordered.sort_by(|&a, &b| {
        dist[a]
            .partial_cmp(&dist[b])
            .unwrap_or(Ordering::Equal)
            .then_with(|| graph.out_degree(b).cmp(&graph.out_degree(a)))
            .then_with(|| a.cmp(&b))
    });
    ordered.truncate(k);
    ordered
}
