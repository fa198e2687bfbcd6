use std::fmt::Debug;

use log::trace;
use num_traits::Float;

use crate::algorithm::frontier::{relax, Frontier};
use crate::algorithm::traits::SsspStatistics;
use crate::graph::DirectedGraph;

/// Terminal state of a bounded multi-source search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmsspStatus {
    /// Every reachable vertex with tentative distance below the bound has
    /// been settled.
    Completed,

    /// The work budget ran out first. All distance and parent improvements
    /// made so far are kept; the caller decides whether to retry with a
    /// larger budget.
    BudgetExhausted,
}

/// Outcome of a [`bmssp`] call.
#[derive(Debug, Clone, Copy)]
pub struct BmsspOutcome {
    pub status: BmsspStatus,

    /// Whether any distance decreased during the call.
    pub improved: bool,
}

/// Bounded multi-source shortest paths.
///
/// Starting from `sources` (those with `dist[s] < bound`; the rest are
/// skipped), repeatedly settles the minimum-distance vertex of the working
/// set and relaxes its out-edges, applying an improvement only when the
/// candidate distance beats both the target's label and `bound`. Rounds
/// repeat until one completes without improving anything.
///
/// `budget` caps the work: each extraction and each examined edge costs one
/// unit. `None` is unlimited. Distances are monotonically non-increasing
/// across rounds and partial progress survives exhaustion.
pub fn bmssp<W>(
    graph: &DirectedGraph<W>,
    sources: &[usize],
    bound: W,
    budget: Option<u64>,
    dist: &mut [W],
    parents: &mut [Option<usize>],
    stats: &mut SsspStatistics,
) -> BmsspOutcome
where
    W: Float + Debug,
{
    let mut remaining = budget;
    let mut improved_any = false;

    loop {
        let round = single_round(graph, sources, bound, &mut remaining, dist, parents, stats);
        improved_any |= round.improved;
        match round.status {
            BmsspStatus::BudgetExhausted => {
                trace!(
                    "bmssp budget exhausted ({} sources, improved = {})",
                    sources.len(),
                    improved_any
                );
                return BmsspOutcome {
                    status: BmsspStatus::BudgetExhausted,
                    improved: improved_any,
                };
            }
            BmsspStatus::Completed if !round.improved => {
                return BmsspOutcome {
                    status: BmsspStatus::Completed,
                    improved: improved_any,
                };
            }
            BmsspStatus::Completed => {}
        }
    }
}

fn single_round<W>(
    graph: &DirectedGraph<W>,
    sources: &[usize],
    bound: W,
    remaining: &mut Option<u64>,
    dist: &mut [W],
    parents: &mut [Option<usize>],
    stats: &mut SsspStatistics,
) -> BmsspOutcome
where
    W: Float + Debug,
{
    let mut working = Frontier::new();
    for &s in sources {
        if dist[s] < bound {
            working.push(s, dist[s]);
        }
    }

    let mut improved = false;
    while let Some(u) = working.extract_min_bounded(dist, bound) {
        if !charge(remaining) {
            return BmsspOutcome {
                status: BmsspStatus::BudgetExhausted,
                improved,
            };
        }
        for (edge, weight) in graph.out_arcs(u) {
            if !charge(remaining) {
                return BmsspOutcome {
                    status: BmsspStatus::BudgetExhausted,
                    improved,
                };
            }
            let candidate = dist[u] + weight;
            if candidate < dist[edge.target] && candidate < bound {
                relax(edge, weight, dist, parents);
                stats.relaxations += 1;
                improved = true;
                working.push(edge.target, dist[edge.target]);
            }
        }
    }

    BmsspOutcome {
        status: BmsspStatus::Completed,
        improved,
    }
}

#[inline]
fn charge(remaining: &mut Option<u64>) -> bool {
    match remaining {
        None => true,
        Some(0) => false,
        Some(units) => {
            *units -= 1;
            true
        }
    }
}
