//! Problem transformation facade.
//!
//! Domain adapters turn a raw problem description into a graph plus a map
//! from domain entity names to vertex ids. Adapters register under a kind
//! tag at init time; [`AdapterRegistry::optimize_to_graph`] dispatches on
//! the tag, runs a solver and hands back distances keyed through the
//! adapter's index map.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::algorithm::traits::ShortestPathAlgorithm;
use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Map from domain entity names to vertex ids, produced by an adapter.
pub type VertexIndexMap = HashMap<String, usize>;

/// An adapter builds a graph from raw problem data.
pub type Adapter =
    Box<dyn Fn(&Value) -> Result<(DirectedGraph<f64>, VertexIndexMap)> + Send + Sync>;

/// A problem instance for the facade: a registered kind tag, the raw data
/// the adapter understands, and the source vertex to solve from.
#[derive(Debug, Clone)]
pub struct OptimizationProblem {
    pub kind: String,
    pub data: Value,
    pub source: usize,
}

/// Distances of a transformed problem, with the adapter's entity-to-vertex
/// map for interpreting them.
#[derive(Debug, Clone, Serialize)]
pub struct TransformedSolution {
    pub distances: Vec<f64>,
    pub vertex_index: VertexIndexMap,
}

/// Registry of problem-kind adapters.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<String, Adapter>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        AdapterRegistry {
            adapters: HashMap::new(),
        }
    }

    /// Registers an adapter under a kind tag, replacing any previous one.
    pub fn register<F>(&mut self, kind: &str, adapter: F)
    where
        F: Fn(&Value) -> Result<(DirectedGraph<f64>, VertexIndexMap)> + Send + Sync + 'static,
    {
        self.adapters.insert(kind.to_string(), Box::new(adapter));
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.adapters.contains_key(kind)
    }

    /// Transforms the problem into a graph via its registered adapter and
    /// solves it. Unregistered kinds are [`Error::UnknownProblemKind`].
    pub fn optimize_to_graph(
        &self,
        problem: &OptimizationProblem,
        solver: &dyn ShortestPathAlgorithm<f64>,
    ) -> Result<TransformedSolution> {
        let adapter = self
            .adapters
            .get(&problem.kind)
            .ok_or_else(|| Error::UnknownProblemKind(problem.kind.clone()))?;
        let (graph, vertex_index) = adapter(&problem.data)?;
        let result = solver.compute_shortest_paths(&graph, problem.source)?;
        Ok(TransformedSolution {
            distances: result.distances,
            vertex_index,
        })
    }
}
