//! DMY SSSP - recursive bounded-frontier single-source shortest paths
//!
//! This library implements a Duan-Mao-Yin-style shortest path engine for
//! directed graphs with non-negative real edge weights: a recursive,
//! pivot-driven scheme whose inner routine (BMSSP) relaxes labels below a
//! moving distance ceiling, aiming for sub-Dijkstra work on sparse graphs.
//!
//! On top of the same graph substrate it provides a multi-objective solver:
//! a Pareto-front label-setting search over vector-valued edge costs, with
//! weighted-sum, epsilon-constraint and lexicographic scalarizations and
//! knee-point selection.

pub mod algorithm;
pub mod graph;
pub mod multi_objective;
pub mod path;
pub mod transform;

pub use algorithm::{
    dijkstra::Dijkstra,
    dmy::{sssp, sssp_bounded, sssp_statistics, sssp_with_parents, DmySssp},
    params::DmyParams,
    ShortestPathAlgorithm, ShortestPathResult, SsspStatistics,
};
pub use graph::directed::{DirectedGraph, Edge};
pub use multi_objective::{
    compute_pareto_front, epsilon_constraint, knee_point, lexicographic, weighted_sum,
    MultiObjectiveGraph, ObjectiveSense, ParetoSolution,
};
pub use path::{path_length, reconstruct_path, verify_shortest_path};
pub use transform::{AdapterRegistry, OptimizationProblem, TransformedSolution};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("source vertex {0} is out of range")]
    InvalidSource(usize),

    #[error("path step {0} -> {1} is not an edge")]
    InvalidPath(usize, usize),

    #[error("objective {0} is maximized; weighted-sum scalarization requires minimize senses")]
    UnsupportedSense(usize),

    #[error("no feasible solution satisfies the constraints")]
    Infeasible,

    #[error("unknown problem kind: {0}")]
    UnknownProblemKind(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
