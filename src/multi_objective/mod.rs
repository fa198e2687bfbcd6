pub mod graph;
pub mod knee;
pub mod pareto;
pub mod scalarize;

pub use graph::{MultiObjectiveGraph, ObjectiveSense};
pub use knee::knee_point;
pub use pareto::{compute_pareto_front, ParetoSolution};
pub use scalarize::{epsilon_constraint, lexicographic, weighted_sum};
