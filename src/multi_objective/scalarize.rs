use ordered_float::OrderedFloat;

use crate::algorithm::dmy::DmySssp;
use crate::algorithm::traits::ShortestPathAlgorithm;
use crate::graph::DirectedGraph;
use crate::multi_objective::graph::{MultiObjectiveGraph, ObjectiveSense};
use crate::multi_objective::pareto::{compute_pareto_front, sense_key};
use crate::path::reconstruct_path;
use crate::{Error, Result};

/// Front size through which the enumerating scalarizers search. Their
/// signatures carry no cap of their own.
const FRONT_ENUMERATION_CAP: usize = 1024;

/// Collapses the objectives into `sum(weights[i] * obj[i])` per edge and
/// runs scalar SSSP on the combined graph. Every sense must be minimize;
/// a maximized dimension is [`Error::UnsupportedSense`]. An unreachable
/// target yields `(infinity, [])`.
pub fn weighted_sum(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    weights: &[f64],
) -> Result<(f64, Vec<usize>)> {
    if weights.len() != graph.num_objectives() {
        return Err(Error::InvalidGraph(format!(
            "{} scalarization weights for {} objectives",
            weights.len(),
            graph.num_objectives()
        )));
    }
    if let Some(dim) = graph
        .senses()
        .iter()
        .position(|&sense| sense == ObjectiveSense::Maximize)
    {
        return Err(Error::UnsupportedSense(dim));
    }
    if !graph.has_vertex(target) {
        return Err(Error::InvalidSource(target));
    }

    let combined: Vec<f64> = graph
        .edges()
        .iter()
        .map(|edge| {
            graph
                .cost(edge.id)
                .iter()
                .zip(weights.iter())
                .map(|(c, w)| c * w)
                .sum()
        })
        .collect();
    let scalar_graph = DirectedGraph::new(graph.vertex_count(), graph.edges().to_vec(), combined)?;

    let result = DmySssp::new().compute_shortest_paths(&scalar_graph, source)?;
    let path = reconstruct_path(&result.parents, source, target);
    Ok((result.distances[target], path))
}

/// Optimizes one objective subject to bounds on all the others: keeps the
/// Pareto solutions within `bounds` (an upper bound for minimized
/// dimensions, a lower bound for maximized ones; the primary slot is
/// ignored) and returns the primary-optimal one. An empty feasible set is
/// [`Error::Infeasible`].
pub fn epsilon_constraint(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    primary: usize,
    bounds: &[f64],
) -> Result<(f64, Vec<usize>)> {
    let k = graph.num_objectives();
    if primary >= k {
        return Err(Error::InvalidGraph(format!(
            "primary objective {} out of range for {} objectives",
            primary, k
        )));
    }
    if bounds.len() != k {
        return Err(Error::InvalidGraph(format!(
            "{} constraint bounds for {} objectives",
            bounds.len(),
            k
        )));
    }

    let senses = graph.senses().to_vec();
    let front = compute_pareto_front(graph, source, target, FRONT_ENUMERATION_CAP)?;

    let feasible = front.into_iter().filter(|solution| {
        solution
            .objectives
            .iter()
            .enumerate()
            .filter(|&(dim, _)| dim != primary)
            .all(|(dim, &value)| match senses[dim] {
                ObjectiveSense::Minimize => value <= bounds[dim],
                ObjectiveSense::Maximize => value >= bounds[dim],
            })
    });

    // The front arrives in lexicographic order; the index in the key makes
    // a primary-value tie go to the lexicographically smaller solution.
    let best = feasible
        .enumerate()
        .min_by_key(|(index, solution)| {
            let key = match senses[primary] {
                ObjectiveSense::Minimize => OrderedFloat(solution.objectives[primary]),
                ObjectiveSense::Maximize => OrderedFloat(-solution.objectives[primary]),
            };
            (key, *index)
        })
        .map(|(_, solution)| solution);

    match best {
        Some(solution) => Ok((solution.objectives[primary], solution.path)),
        None => Err(Error::Infeasible),
    }
}

/// Optimizes the objectives in strict priority order by filtering the
/// Pareto front lexicographically. `priority` must be a permutation of the
/// objective indices. Returns the winner's top-priority objective value and
/// path; an unreachable target is [`Error::Infeasible`].
pub fn lexicographic(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    priority: &[usize],
) -> Result<(f64, Vec<usize>)> {
    let k = graph.num_objectives();
    if priority.len() != k {
        return Err(Error::InvalidGraph(format!(
            "priority order has {} entries for {} objectives",
            priority.len(),
            k
        )));
    }
    let mut seen = vec![false; k];
    for &dim in priority {
        if dim >= k || seen[dim] {
            return Err(Error::InvalidGraph(
                "priority order must be a permutation of the objective indices".to_string(),
            ));
        }
        seen[dim] = true;
    }

    let senses = graph.senses().to_vec();
    let front = compute_pareto_front(graph, source, target, FRONT_ENUMERATION_CAP)?;

    let best = front.into_iter().min_by_key(|solution| {
        let reordered: Vec<f64> = priority.iter().map(|&dim| solution.objectives[dim]).collect();
        let reordered_senses: Vec<ObjectiveSense> =
            priority.iter().map(|&dim| senses[dim]).collect();
        sense_key(&reordered, &reordered_senses)
    });

    match best {
        Some(solution) => Ok((solution.objectives[priority[0]], solution.path)),
        None => Err(Error::Infeasible),
    }
}
