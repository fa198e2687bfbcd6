use std::fmt::Debug;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A directed edge. The `id` is a stable identity used to key external
/// per-edge tables (the multi-objective engine keys its cost vectors by it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub id: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize, id: usize) -> Self {
        Edge { source, target, id }
    }
}

/// An immutable directed graph in compressed sparse row form.
///
/// Vertices are `0..n`. Edges are grouped contiguously by source vertex with
/// a parallel weight array, so iterating the out-edges of a vertex is a
/// slice walk. Edge ids are unique in `0..m` and survive the internal
/// reordering: `weight(id)` resolves through an id index.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Debug,
{
    vertex_count: usize,

    /// Edges in CSR order (grouped by source, input order preserved within
    /// a group).
    edges: Vec<Edge>,

    /// Weights parallel to `edges`.
    weights: Vec<W>,

    /// `offsets[v]..offsets[v + 1]` is the edge range of vertex `v`.
    offsets: Vec<usize>,

    /// Position of each edge id in `edges`.
    index_of_id: Vec<usize>,

    max_out_degree: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Builds a graph from an edge list and a parallel weight list.
    ///
    /// Fails with [`Error::InvalidGraph`] if the lists disagree in length,
    /// an endpoint is out of range, a weight is negative or non-finite, or
    /// an edge id is out of range or duplicated.
    pub fn new(vertex_count: usize, edges: Vec<Edge>, weights: Vec<W>) -> Result<Self> {
        if edges.len() != weights.len() {
            return Err(Error::InvalidGraph(format!(
                "{} edges but {} weights",
                edges.len(),
                weights.len()
            )));
        }

        let m = edges.len();
        let mut id_seen = vec![false; m];
        for (edge, &weight) in edges.iter().zip(weights.iter()) {
            if edge.source >= vertex_count || edge.target >= vertex_count {
                return Err(Error::InvalidGraph(format!(
                    "edge {} -> {} out of range for {} vertices",
                    edge.source, edge.target, vertex_count
                )));
            }
            if !weight.is_finite() || weight < W::zero() {
                return Err(Error::InvalidGraph(format!(
                    "edge {} -> {} has invalid weight {:?}",
                    edge.source, edge.target, weight
                )));
            }
            if edge.id >= m {
                return Err(Error::InvalidGraph(format!(
                    "edge id {} out of range for {} edges",
                    edge.id, m
                )));
            }
            if id_seen[edge.id] {
                return Err(Error::InvalidGraph(format!("duplicate edge id {}", edge.id)));
            }
            id_seen[edge.id] = true;
        }

        // Stable counting sort by source vertex.
        let mut offsets = vec![0usize; vertex_count + 1];
        for edge in &edges {
            offsets[edge.source + 1] += 1;
        }
        for v in 0..vertex_count {
            offsets[v + 1] += offsets[v];
        }
        let mut cursor = offsets.clone();
        let mut order = vec![0usize; m];
        for (position, edge) in edges.iter().enumerate() {
            order[cursor[edge.source]] = position;
            cursor[edge.source] += 1;
        }

        let csr_edges: Vec<Edge> = order.iter().map(|&i| edges[i]).collect();
        let csr_weights: Vec<W> = order.iter().map(|&i| weights[i]).collect();

        let mut index_of_id = vec![0usize; m];
        for (position, edge) in csr_edges.iter().enumerate() {
            index_of_id[edge.id] = position;
        }

        let max_out_degree = (0..vertex_count)
            .map(|v| offsets[v + 1] - offsets[v])
            .max()
            .unwrap_or(0);

        Ok(DirectedGraph {
            vertex_count,
            edges: csr_edges,
            weights: csr_weights,
            offsets,
            index_of_id,
            max_out_degree,
        })
    }

    /// Builds a graph from `(source, target, weight)` triples, assigning
    /// edge ids in input order.
    pub fn from_arcs(vertex_count: usize, arcs: &[(usize, usize, W)]) -> Result<Self> {
        let edges = arcs
            .iter()
            .enumerate()
            .map(|(id, &(source, target, _))| Edge::new(source, target, id))
            .collect();
        let weights = arcs.iter().map(|&(_, _, w)| w).collect();
        Self::new(vertex_count, edges, weights)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    /// Out-edges of `vertex` as a contiguous slice.
    #[inline]
    pub fn out_edges(&self, vertex: usize) -> &[Edge] {
        &self.edges[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// Out-edges of `vertex` paired with their weights.
    #[inline]
    pub fn out_arcs(&self, vertex: usize) -> impl Iterator<Item = (&Edge, W)> + '_ {
        let range = self.offsets[vertex]..self.offsets[vertex + 1];
        self.edges[range.clone()]
            .iter()
            .zip(self.weights[range].iter().copied())
    }

    #[inline]
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Weight of the edge with the given id.
    #[inline]
    pub fn weight(&self, edge_id: usize) -> W {
        self.weights[self.index_of_id[edge_id]]
    }

    #[inline]
    pub fn max_out_degree(&self) -> usize {
        self.max_out_degree
    }

    /// All edges in CSR order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
