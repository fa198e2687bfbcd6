use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::multi_objective::graph::{MultiObjectiveGraph, ObjectiveSense};
use crate::{Error, Result};

/// One non-dominated path from source to target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoSolution {
    /// Accumulated objective vector of the path.
    pub objectives: Vec<f64>,

    /// Vertex sequence from source to target.
    pub path: Vec<usize>,

    /// Edge ids along the path, parallel to the path's steps.
    pub edges: Vec<usize>,
}

struct Label {
    costs: Vec<f64>,
    vertex: usize,
    parent: Option<usize>,
    via_edge: Option<usize>,
}

/// Label-setting Pareto-front search.
///
/// Each vertex keeps a set of mutually non-dominated labels; a global
/// priority queue ordered by the sense-adjusted lexicographic objective
/// tuple (insertion order breaks ties) drives extraction. A candidate label
/// is inserted only if no incumbent weakly dominates it, and evicts the
/// incumbents it dominates. The search stops once `max_solutions` target
/// labels have been settled or the queue drains.
///
/// Returned solutions are in sense-adjusted lexicographic order.
pub fn compute_pareto_front(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    max_solutions: usize,
) -> Result<Vec<ParetoSolution>> {
    if !graph.has_vertex(source) {
        return Err(Error::InvalidSource(source));
    }
    if !graph.has_vertex(target) {
        return Err(Error::InvalidSource(target));
    }
    if max_solutions == 0 {
        return Ok(Vec::new());
    }

    let senses = graph.senses();
    let mut arena: Vec<Label> = Vec::new();
    let mut live: Vec<Vec<usize>> = vec![Vec::new(); graph.vertex_count()];
    let mut queue: BinaryHeap<Reverse<(Vec<OrderedFloat<f64>>, u64, usize)>> = BinaryHeap::new();
    let mut sequence: u64 = 0;

    let root = Label {
        costs: vec![0.0; graph.num_objectives()],
        vertex: source,
        parent: None,
        via_edge: None,
    };
    queue.push(Reverse((sense_key(&root.costs, senses), sequence, 0)));
    live[source].push(0);
    arena.push(root);

    let mut settled_at_target = 0usize;
    while let Some(Reverse((_, _, label_id))) = queue.pop() {
        let vertex = arena[label_id].vertex;
        if !live[vertex].contains(&label_id) {
            continue;
        }
        // A popped label can never be dominated later (a dominator would
        // carry a smaller sense key and would have been popped first), so
        // settled target labels are final.
        if vertex == target {
            settled_at_target += 1;
            if settled_at_target >= max_solutions {
                break;
            }
        }

        for edge in graph.out_edges(vertex) {
            let edge_cost = graph.cost(edge.id);
            let costs: Vec<f64> = arena[label_id]
                .costs
                .iter()
                .zip(edge_cost.iter())
                .map(|(a, b)| a + b)
                .collect();

            let incumbent_blocks = live[edge.target]
                .iter()
                .any(|&i| dominates_or_equal(&arena[i].costs, &costs, senses));
            if incumbent_blocks {
                continue;
            }
            live[edge.target].retain(|&i| !dominates(&costs, &arena[i].costs, senses));

            let new_id = arena.len();
            sequence += 1;
            queue.push(Reverse((sense_key(&costs, senses), sequence, new_id)));
            live[edge.target].push(new_id);
            arena.push(Label {
                costs,
                vertex: edge.target,
                parent: Some(label_id),
                via_edge: Some(edge.id),
            });
        }
    }

    let mut survivors: Vec<(Vec<OrderedFloat<f64>>, usize)> = live[target]
        .iter()
        .map(|&id| (sense_key(&arena[id].costs, senses), id))
        .collect();
    survivors.sort();
    survivors.truncate(max_solutions);
    trace!(
        "pareto front: {} labels kept at target {} ({} labels total)",
        survivors.len(),
        target,
        arena.len()
    );

    Ok(survivors
        .into_iter()
        .map(|(_, id)| reconstruct(&arena, id))
        .collect())
}

fn reconstruct(arena: &[Label], label_id: usize) -> ParetoSolution {
    let mut path = Vec::new();
    let mut edges = Vec::new();
    let mut current = Some(label_id);
    while let Some(id) = current {
        let label = &arena[id];
        path.push(label.vertex);
        if let Some(edge_id) = label.via_edge {
            edges.push(edge_id);
        }
        current = label.parent;
    }
    path.reverse();
    edges.reverse();
    ParetoSolution {
        objectives: arena[label_id].costs.clone(),
        path,
        edges,
    }
}

/// Comparison key: maximized dimensions are negated so smaller is always
/// better and tuples order lexicographically.
pub(crate) fn sense_key(costs: &[f64], senses: &[ObjectiveSense]) -> Vec<OrderedFloat<f64>> {
    costs
        .iter()
        .zip(senses.iter())
        .map(|(&value, sense)| match sense {
            ObjectiveSense::Minimize => OrderedFloat(value),
            ObjectiveSense::Maximize => OrderedFloat(-value),
        })
        .collect()
}

fn no_worse(a: f64, b: f64, sense: ObjectiveSense) -> bool {
    match sense {
        ObjectiveSense::Minimize => a <= b,
        ObjectiveSense::Maximize => a >= b,
    }
}

fn strictly_better(a: f64, b: f64, sense: ObjectiveSense) -> bool {
    match sense {
        ObjectiveSense::Minimize => a < b,
        ObjectiveSense::Maximize => a > b,
    }
}

/// `a` dominates `b`: no worse everywhere, strictly better somewhere.
pub(crate) fn dominates(a: &[f64], b: &[f64], senses: &[ObjectiveSense]) -> bool {
    let mut some_better = false;
    for ((&x, &y), &sense) in a.iter().zip(b.iter()).zip(senses.iter()) {
        if !no_worse(x, y, sense) {
            return false;
        }
        if strictly_better(x, y, sense) {
            some_better = true;
        }
    }
    some_better
}

/// Weak dominance: `a` no worse than `b` in every dimension. Equal vectors
/// qualify, which is what prunes duplicate labels (and keeps zero-cost
/// cycles from replaying).
pub(crate) fn dominates_or_equal(a: &[f64], b: &[f64], senses: &[ObjectiveSense]) -> bool {
    a.iter()
        .zip(b.iter())
        .zip(senses.iter())
        .all(|((&x, &y), &sense)| no_worse(x, y, sense))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN2: [ObjectiveSense; 2] = [ObjectiveSense::Minimize, ObjectiveSense::Minimize];

    #[test]
    fn dominance_respects_senses() {
        let senses = [ObjectiveSense::Minimize, ObjectiveSense::Maximize];
        assert!(dominates(&[1.0, 5.0], &[2.0, 3.0], &senses));
        assert!(!dominates(&[1.0, 2.0], &[2.0, 3.0], &senses));
        assert!(!dominates(&[1.0, 5.0], &[1.0, 5.0], &senses));
        assert!(dominates_or_equal(&[1.0, 5.0], &[1.0, 5.0], &senses));
    }

    #[test]
    fn zero_cost_cycle_does_not_replay() {
        // 0 -> 1 with a free 1 -> 1 self-loop, then 1 -> 2.
        let graph = MultiObjectiveGraph::from_arcs(
            3,
            &[
                (0, 1, vec![1.0, 1.0]),
                (1, 1, vec![0.0, 0.0]),
                (1, 2, vec![1.0, 1.0]),
            ],
            MIN2.to_vec(),
        )
        .unwrap();
        let front = compute_pareto_front(&graph, 0, 2, 16).unwrap();
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].objectives, vec![2.0, 2.0]);
        assert_eq!(front[0].path, vec![0, 1, 2]);
    }

    #[test]
    fn max_solutions_zero_is_empty() {
        let graph = MultiObjectiveGraph::from_arcs(2, &[(0, 1, vec![1.0, 1.0])], MIN2.to_vec())
            .unwrap();
        assert!(compute_pareto_front(&graph, 0, 1, 0).unwrap().is_empty());
    }

    #[test]
    fn source_equals_target_yields_the_empty_path() {
        let graph = MultiObjectiveGraph::from_arcs(2, &[(0, 1, vec![1.0, 1.0])], MIN2.to_vec())
            .unwrap();
        let front = compute_pareto_front(&graph, 0, 0, 4).unwrap();
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].path, vec![0]);
        assert_eq!(front[0].objectives, vec![0.0, 0.0]);
        assert!(front[0].edges.is_empty());
    }
}
