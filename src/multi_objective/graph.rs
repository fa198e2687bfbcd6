use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, Edge};
use crate::{Error, Result};

/// Optimization direction of one objective dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

/// A directed graph whose edges carry a vector of objective values.
///
/// The vertex/edge structure is the scalar CSR substrate; cost vectors are
/// keyed by edge id. The substrate's scalar weight slot mirrors objective 0
/// so the shared representation stays valid.
#[derive(Debug, Clone)]
pub struct MultiObjectiveGraph {
    topology: DirectedGraph<f64>,
    costs: Vec<Vec<f64>>,
    senses: Vec<ObjectiveSense>,
}

impl MultiObjectiveGraph {
    /// Builds a multi-objective graph. `costs` is parallel to `edges`, one
    /// vector per edge with one finite non-negative entry per objective.
    pub fn new(
        vertex_count: usize,
        edges: Vec<Edge>,
        costs: Vec<Vec<f64>>,
        senses: Vec<ObjectiveSense>,
    ) -> Result<Self> {
        if senses.is_empty() {
            return Err(Error::InvalidGraph(
                "at least one objective is required".to_string(),
            ));
        }
        if costs.len() != edges.len() {
            return Err(Error::InvalidGraph(format!(
                "{} edges but {} cost vectors",
                edges.len(),
                costs.len()
            )));
        }
        for (edge, cost) in edges.iter().zip(costs.iter()) {
            if cost.len() != senses.len() {
                return Err(Error::InvalidGraph(format!(
                    "edge {} -> {} has {} objective values, expected {}",
                    edge.source,
                    edge.target,
                    cost.len(),
                    senses.len()
                )));
            }
            if cost.iter().any(|value| !value.is_finite() || *value < 0.0) {
                return Err(Error::InvalidGraph(format!(
                    "edge {} -> {} has an invalid objective value",
                    edge.source, edge.target
                )));
            }
        }

        let weights: Vec<f64> = costs.iter().map(|cost| cost[0]).collect();
        let topology = DirectedGraph::new(vertex_count, edges.clone(), weights)?;

        let mut costs_by_id = vec![Vec::new(); edges.len()];
        for (edge, cost) in edges.into_iter().zip(costs.into_iter()) {
            costs_by_id[edge.id] = cost;
        }

        Ok(MultiObjectiveGraph {
            topology,
            costs: costs_by_id,
            senses,
        })
    }

    /// Builds from `(source, target, cost_vector)` triples, assigning edge
    /// ids in input order.
    pub fn from_arcs(
        vertex_count: usize,
        arcs: &[(usize, usize, Vec<f64>)],
        senses: Vec<ObjectiveSense>,
    ) -> Result<Self> {
        let edges = arcs
            .iter()
            .enumerate()
            .map(|(id, &(source, target, _))| Edge::new(source, target, id))
            .collect();
        let costs = arcs.iter().map(|(_, _, cost)| cost.clone()).collect();
        Self::new(vertex_count, edges, costs, senses)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.topology.vertex_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    #[inline]
    pub fn has_vertex(&self, vertex: usize) -> bool {
        self.topology.has_vertex(vertex)
    }

    #[inline]
    pub fn out_edges(&self, vertex: usize) -> &[Edge] {
        self.topology.out_edges(vertex)
    }

    /// All edges in CSR order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        self.topology.edges()
    }

    /// Objective vector of the edge with the given id.
    #[inline]
    pub fn cost(&self, edge_id: usize) -> &[f64] {
        &self.costs[edge_id]
    }

    #[inline]
    pub fn senses(&self) -> &[ObjectiveSense] {
        &self.senses
    }

    #[inline]
    pub fn num_objectives(&self) -> usize {
        self.senses.len()
    }
}
