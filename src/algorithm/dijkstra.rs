use std::fmt::Debug;

use num_traits::Float;

use crate::algorithm::frontier::{relax, Frontier};
use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult, SsspStatistics};
use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm. Serves as the reference implementation
/// the DMY engine is cross-validated against.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Debug,
{
    fn compute_shortest_paths(
        &self,
        graph: &DirectedGraph<W>,
        source: usize,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let n = graph.vertex_count();
        let mut dist = vec![W::infinity(); n];
        let mut parents = vec![None; n];
        let mut stats = SsspStatistics::default();
        dist[source] = W::zero();

        let mut queue = Frontier::new();
        queue.push(source, W::zero());

        while let Some(u) = queue.extract_min_bounded(&dist, W::infinity()) {
            for (edge, weight) in graph.out_arcs(u) {
                if relax(edge, weight, &mut dist, &mut parents) {
                    stats.relaxations += 1;
                    queue.push(edge.target, dist[edge.target]);
                }
            }
        }

        Ok(ShortestPathResult {
            distances: dist,
            parents,
            source,
            statistics: stats,
        })
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
