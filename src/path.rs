//! Path reconstruction and verification over shortest-path tree parents.

use std::fmt::Debug;

use num_traits::Float;

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Walks the parent array backwards from `target` to `source`.
///
/// Returns the vertex sequence `source ..= target`, the single-element
/// `[source]` when `source == target`, and an empty vector when `target`
/// is unreachable (or the walk is malformed).
pub fn reconstruct_path(
    parents: &[Option<usize>],
    source: usize,
    target: usize,
) -> Vec<usize> {
    if source == target {
        return vec![source];
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(parent) = parents.get(current).copied().flatten() {
        path.push(parent);
        if parent == source {
            path.reverse();
            return path;
        }
        current = parent;
        // A well-formed tree reaches the source within n-1 hops.
        if path.len() > parents.len() {
            return Vec::new();
        }
    }
    Vec::new()
}

/// Sums the edge weights along `path`. A step with no matching edge is
/// [`Error::InvalidPath`]; parallel edges contribute their minimum weight.
/// Empty and single-vertex paths have length zero.
pub fn path_length<W>(graph: &DirectedGraph<W>, path: &[usize]) -> Result<W>
where
    W: Float + Debug,
{
    let mut total = W::zero();
    for pair in path.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        if !graph.has_vertex(u) || !graph.has_vertex(v) {
            return Err(Error::InvalidPath(u, v));
        }
        let mut best: Option<W> = None;
        for (edge, weight) in graph.out_arcs(u) {
            if edge.target == v {
                best = Some(match best {
                    Some(current) if current < weight => current,
                    _ => weight,
                });
            }
        }
        match best {
            Some(weight) => total = total + weight,
            None => return Err(Error::InvalidPath(u, v)),
        }
    }
    Ok(total)
}

/// Checks that `claimed` is a real walk from `source` to `target` whose
/// length equals the computed distance. An empty claim is accepted exactly
/// when the target is unreachable.
pub fn verify_shortest_path<W>(
    graph: &DirectedGraph<W>,
    source: usize,
    target: usize,
    dist: &[W],
    claimed: &[usize],
) -> bool
where
    W: Float + Debug,
{
    if target >= dist.len() {
        return false;
    }
    if claimed.is_empty() {
        return dist[target].is_infinite();
    }
    if claimed[0] != source || *claimed.last().unwrap() != target {
        return false;
    }
    match path_length(graph, claimed) {
        Ok(length) => length == dist[target],
        Err(_) => false,
    }
}
