use std::fmt::Debug;

use num_traits::Float;
use serde::Serialize;

use crate::graph::DirectedGraph;
use crate::Result;

/// Work counters collected during a shortest-path run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SsspStatistics {
    /// Successful relaxations (distance decreases).
    pub relaxations: u64,

    /// Pivot selection rounds performed by the recursion driver.
    pub pivot_rounds: u64,

    /// Largest frontier observed across recursion levels.
    pub max_frontier: usize,

    /// Deepest recursion level entered (0 for a run that never recursed).
    pub recursion_depth: usize,
}

/// Result of a shortest path algorithm execution.
///
/// Unreachable vertices carry `W::infinity()` and a `None` parent; the
/// source's parent is `None` as well.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from the source to each vertex.
    pub distances: Vec<W>,

    /// Parent vertices in the shortest path tree.
    pub parents: Vec<Option<usize>>,

    /// Source vertex ID.
    pub source: usize,

    /// Work counters for this run.
    pub statistics: SsspStatistics,
}

/// Trait for shortest path algorithms over the shared graph substrate.
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Debug,
{
    /// Compute shortest paths from a source vertex to all other vertices.
    fn compute_shortest_paths(
        &self,
        graph: &DirectedGraph<W>,
        source: usize,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm.
    fn name(&self) -> &'static str;
}
