use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::bmssp::{bmssp, BmsspStatus};
use crate::algorithm::params::DmyParams;
use crate::algorithm::partition::partition_blocks_adaptive;
use crate::algorithm::pivots::{partition_parameter, select_pivots};
use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult, SsspStatistics};
use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// The DMY shortest-path engine: a recursion over distance-bounded frontier
/// blocks, each level propagating pivot labels with a bounded multi-source
/// search before descending into tighter bounds.
#[derive(Debug, Default)]
pub struct DmySssp {
    params: DmyParams,
}

struct SearchState<W> {
    dist: Vec<W>,
    parents: Vec<Option<usize>>,
    stats: SsspStatistics,
}

impl DmySssp {
    pub fn new() -> Self {
        DmySssp {
            params: DmyParams::default(),
        }
    }

    pub fn with_params(params: DmyParams) -> Self {
        DmySssp { params }
    }

    pub fn params(&self) -> &DmyParams {
        &self.params
    }

    /// Runs the engine with an explicit distance ceiling. Labels at or
    /// beyond `bound` are reported as infinity.
    pub fn run_bounded<W>(
        &self,
        graph: &DirectedGraph<W>,
        source: usize,
        bound: W,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Float + Debug,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let n = graph.vertex_count();
        let mut state = SearchState {
            dist: vec![W::infinity(); n],
            parents: vec![None; n],
            stats: SsspStatistics::default(),
        };
        state.dist[source] = W::zero();

        let depth = ((n as f64) + 1.0).log2().ceil() as usize;
        debug!(
            "dmy sssp: n = {}, m = {}, source = {}, depth = {}",
            n,
            graph.edge_count(),
            source,
            depth
        );
        self.recursive_layer(graph, &[source], bound, depth, 0, &mut state)?;

        for (d, p) in state.dist.iter_mut().zip(state.parents.iter_mut()) {
            if !(*d < bound) {
                *d = W::infinity();
                *p = None;
            }
        }

        Ok(ShortestPathResult {
            distances: state.dist,
            parents: state.parents,
            source,
            statistics: state.stats,
        })
    }

    fn recursive_layer<W>(
        &self,
        graph: &DirectedGraph<W>,
        frontier: &[usize],
        bound: W,
        depth: usize,
        level: usize,
        state: &mut SearchState<W>,
    ) -> Result<()>
    where
        W: Float + Debug,
    {
        let sources: Vec<usize> = frontier
            .iter()
            .copied()
            .filter(|&v| state.dist[v] < bound)
            .collect();
        if sources.is_empty() {
            return Ok(());
        }

        state.stats.recursion_depth = state.stats.recursion_depth.max(level);
        state.stats.max_frontier = state.stats.max_frontier.max(sources.len());

        // Bounded sub-problems small enough to finish directly. The
        // unbounded top-level call always takes the recursive path so the
        // layered scheme engages.
        if depth == 0 || (bound.is_finite() && sources.len() <= self.params.base_case_cutoff) {
            return self.bmssp_to_completion(graph, sources, bound, state);
        }

        let pivots = select_pivots(graph, &sources, &state.dist, &self.params);
        state.stats.pivot_rounds += 1;
        let pivot_budget = self
            .params
            .initial_budget
            .unwrap_or(self.params.budget_factor * sources.len() as u64);
        trace!(
            "level {}: |F| = {}, {} pivots, pivot budget {}",
            level,
            sources.len(),
            pivots.len(),
            pivot_budget
        );

        // Partial propagation is fine here; whatever the budget leaves
        // unsettled is picked up by the block recursion below.
        bmssp(
            graph,
            &pivots,
            bound,
            Some(pivot_budget),
            &mut state.dist,
            &mut state.parents,
            &mut state.stats,
        );

        loop {
            let active = collect_active(graph, &state.dist, bound);
            if active.is_empty() {
                return Ok(());
            }
            state.stats.max_frontier = state.stats.max_frontier.max(active.len());

            let t = partition_parameter(active.len());
            let blocks = partition_blocks_adaptive(&active, &state.dist, bound, t);
            trace!(
                "level {}: {} active vertices into {} blocks",
                level,
                active.len(),
                blocks.len()
            );
            for block in &blocks {
                self.recursive_layer(
                    graph,
                    &block.members,
                    block.upper_bound,
                    depth - 1,
                    level + 1,
                    state,
                )?;
            }
        }
    }

    /// Runs a bounded search until it completes. Without an initial-budget
    /// override the search is unlimited and finishes in one call; with one,
    /// exhausted attempts are retried with doubled budgets, reseeded from
    /// the vertices that still have improving out-edges (a restart from the
    /// original sources would find nothing to improve along the
    /// already-relaxed prefix and stall).
    fn bmssp_to_completion<W>(
        &self,
        graph: &DirectedGraph<W>,
        sources: Vec<usize>,
        bound: W,
        state: &mut SearchState<W>,
    ) -> Result<()>
    where
        W: Float + Debug,
    {
        let mut budget = match self.params.initial_budget {
            None => {
                bmssp(
                    graph,
                    &sources,
                    bound,
                    None,
                    &mut state.dist,
                    &mut state.parents,
                    &mut state.stats,
                );
                return Ok(());
            }
            Some(budget) => budget.max(1),
        };

        let mut seeds = sources;
        loop {
            let outcome = bmssp(
                graph,
                &seeds,
                bound,
                Some(budget),
                &mut state.dist,
                &mut state.parents,
                &mut state.stats,
            );
            match outcome.status {
                BmsspStatus::Completed => return Ok(()),
                BmsspStatus::BudgetExhausted => {
                    // A round that fits in the budget either completes or
                    // improves something; anything else is a bug, not input.
                    let round_work = (graph.vertex_count() + graph.edge_count() + 1) as u64;
                    if !outcome.improved && budget > 2 * round_work {
                        return Err(Error::InvalidGraph(
                            "bounded search stalled without progress".to_string(),
                        ));
                    }
                    budget = budget.saturating_mul(2);
                    seeds = collect_active(graph, &state.dist, bound);
                    if seeds.is_empty() {
                        return Ok(());
                    }
                    debug!(
                        "bounded search budget exhausted; retrying with {} from {} seeds",
                        budget,
                        seeds.len()
                    );
                }
            }
        }
    }
}

/// Vertices labeled below `bound` that still have an improving out-edge.
/// These are exactly the vertices whose settlement is still pending.
fn collect_active<W>(graph: &DirectedGraph<W>, dist: &[W], bound: W) -> Vec<usize>
where
    W: Float + Debug,
{
    (0..graph.vertex_count())
        .filter(|&v| {
            dist[v] < bound
                && graph.out_arcs(v).any(|(edge, weight)| {
                    let candidate = dist[v] + weight;
                    candidate < dist[edge.target] && candidate < bound
                })
        })
        .collect()
}

impl<W> ShortestPathAlgorithm<W> for DmySssp
where
    W: Float + Debug,
{
    fn compute_shortest_paths(
        &self,
        graph: &DirectedGraph<W>,
        source: usize,
    ) -> Result<ShortestPathResult<W>> {
        self.run_bounded(graph, source, W::infinity())
    }

    fn name(&self) -> &'static str {
        "DMY SSSP"
    }
}

/// Shortest-path distances from `source` to every vertex; unreachable
/// vertices are infinity.
pub fn sssp<W>(graph: &DirectedGraph<W>, source: usize) -> Result<Vec<W>>
where
    W: Float + Debug,
{
    Ok(DmySssp::new().compute_shortest_paths(graph, source)?.distances)
}

/// Distances plus the shortest-path tree parents.
pub fn sssp_with_parents<W>(
    graph: &DirectedGraph<W>,
    source: usize,
) -> Result<(Vec<W>, Vec<Option<usize>>)>
where
    W: Float + Debug,
{
    let result = DmySssp::new().compute_shortest_paths(graph, source)?;
    Ok((result.distances, result.parents))
}

/// Distances truncated at `bound`: anything at or beyond it is infinity.
pub fn sssp_bounded<W>(graph: &DirectedGraph<W>, source: usize, bound: W) -> Result<Vec<W>>
where
    W: Float + Debug,
{
    Ok(DmySssp::new().run_bounded(graph, source, bound)?.distances)
}

/// Work counters for a full run from `source`.
pub fn sssp_statistics<W>(graph: &DirectedGraph<W>, source: usize) -> Result<SsspStatistics>
where
    W: Float + Debug,
{
    Ok(DmySssp::new().compute_shortest_paths(graph, source)?.statistics)
}
