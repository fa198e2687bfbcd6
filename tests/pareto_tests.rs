use dmy_sssp::{
    compute_pareto_front, epsilon_constraint, knee_point, lexicographic, sssp, weighted_sum,
    DirectedGraph, Error, MultiObjectiveGraph, ObjectiveSense, ParetoSolution,
};

const MIN2: [ObjectiveSense; 2] = [ObjectiveSense::Minimize, ObjectiveSense::Minimize];

/// The two-path diamond: cheap-but-slow via 1, expensive-but-fast via 2.
fn diamond() -> MultiObjectiveGraph {
    MultiObjectiveGraph::from_arcs(
        4,
        &[
            (0, 1, vec![10.0, 1.0]),
            (0, 2, vec![30.0, 0.5]),
            (1, 3, vec![5.0, 2.0]),
            (2, 3, vec![15.0, 1.0]),
        ],
        MIN2.to_vec(),
    )
    .unwrap()
}

fn dominates(a: &[f64], b: &[f64], senses: &[ObjectiveSense]) -> bool {
    let no_worse = a.iter().zip(b).zip(senses).all(|((&x, &y), sense)| match sense {
        ObjectiveSense::Minimize => x <= y,
        ObjectiveSense::Maximize => x >= y,
    });
    let some_better = a.iter().zip(b).zip(senses).any(|((&x, &y), sense)| match sense {
        ObjectiveSense::Minimize => x < y,
        ObjectiveSense::Maximize => x > y,
    });
    no_worse && some_better
}

#[test]
fn two_path_diamond_has_exactly_two_solutions() {
    let front = compute_pareto_front(&diamond(), 0, 3, 10).unwrap();
    assert_eq!(front.len(), 2);

    assert_eq!(front[0].objectives, vec![15.0, 3.0]);
    assert_eq!(front[0].path, vec![0, 1, 3]);
    assert_eq!(front[0].edges, vec![0, 2]);

    assert_eq!(front[1].objectives, vec![45.0, 1.5]);
    assert_eq!(front[1].path, vec![0, 2, 3]);
    assert_eq!(front[1].edges, vec![1, 3]);
}

#[test]
fn front_is_mutually_non_dominated() {
    // A denser mesh with several incomparable routes.
    let graph = MultiObjectiveGraph::from_arcs(
        6,
        &[
            (0, 1, vec![1.0, 9.0]),
            (0, 2, vec![4.0, 4.0]),
            (0, 3, vec![9.0, 1.0]),
            (1, 4, vec![1.0, 9.0]),
            (2, 4, vec![4.0, 4.0]),
            (3, 4, vec![9.0, 1.0]),
            (4, 5, vec![1.0, 1.0]),
            (1, 5, vec![20.0, 20.0]),
        ],
        MIN2.to_vec(),
    )
    .unwrap();
    let front = compute_pareto_front(&graph, 0, 5, 32).unwrap();
    assert!(!front.is_empty());
    for (i, a) in front.iter().enumerate() {
        for (j, b) in front.iter().enumerate() {
            if i != j {
                assert!(
                    !dominates(&a.objectives, &b.objectives, graph.senses()),
                    "{:?} dominates {:?}",
                    a.objectives,
                    b.objectives
                );
            }
        }
    }
}

#[test]
fn max_solutions_caps_the_front() {
    // Three mutually incomparable routes to the target.
    let graph = MultiObjectiveGraph::from_arcs(
        4,
        &[
            (0, 1, vec![10.0, 1.0]),
            (0, 2, vec![30.0, 0.5]),
            (1, 3, vec![5.0, 2.0]),
            (2, 3, vec![15.0, 1.0]),
            (0, 3, vec![60.0, 1.0]),
        ],
        MIN2.to_vec(),
    )
    .unwrap();
    let full = compute_pareto_front(&graph, 0, 3, 10).unwrap();
    assert_eq!(full.len(), 3);

    let capped = compute_pareto_front(&graph, 0, 3, 1).unwrap();
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].objectives, vec![15.0, 3.0]);
}

#[test]
fn maximize_sense_keeps_quality_rich_routes() {
    // Objective 0 minimized (cost), objective 1 maximized (quality).
    let graph = MultiObjectiveGraph::from_arcs(
        4,
        &[
            (0, 1, vec![1.0, 5.0]),
            (1, 3, vec![1.0, 5.0]),
            (0, 2, vec![3.0, 8.0]),
            (2, 3, vec![3.0, 8.0]),
        ],
        vec![ObjectiveSense::Minimize, ObjectiveSense::Maximize],
    )
    .unwrap();
    let front = compute_pareto_front(&graph, 0, 3, 10).unwrap();
    assert_eq!(front.len(), 2);
    assert_eq!(front[0].objectives, vec![2.0, 10.0]);
    assert_eq!(front[1].objectives, vec![6.0, 16.0]);
}

#[test]
fn weighted_sum_matches_scalar_sssp_on_the_combined_graph() {
    let graph = diamond();
    let weights = [1.0, 2.0];
    let (value, path) = weighted_sum(&graph, 0, 3, &weights).unwrap();
    assert_eq!(path, vec![0, 1, 3]);
    assert_eq!(value, 21.0);

    // Invariant: identical to scalar SSSP over sum(w_i * obj_i) per edge.
    let combined: Vec<(usize, usize, f64)> = graph
        .edges()
        .iter()
        .map(|edge| {
            let cost = graph.cost(edge.id);
            (edge.source, edge.target, cost[0] * weights[0] + cost[1] * weights[1])
        })
        .collect();
    let scalar = DirectedGraph::from_arcs(graph.vertex_count(), &combined).unwrap();
    let dist = sssp(&scalar, 0).unwrap();
    assert_eq!(value, dist[3]);
}

#[test]
fn weighted_sum_rejects_maximize_senses() {
    let graph = MultiObjectiveGraph::from_arcs(
        2,
        &[(0, 1, vec![1.0, 1.0])],
        vec![ObjectiveSense::Minimize, ObjectiveSense::Maximize],
    )
    .unwrap();
    assert!(matches!(
        weighted_sum(&graph, 0, 1, &[1.0, 1.0]),
        Err(Error::UnsupportedSense(1))
    ));
}

#[test]
fn weighted_sum_unreachable_target_is_infinite() {
    let graph = MultiObjectiveGraph::from_arcs(
        3,
        &[(0, 1, vec![1.0, 1.0])],
        MIN2.to_vec(),
    )
    .unwrap();
    let (value, path) = weighted_sum(&graph, 0, 2, &[1.0, 1.0]).unwrap();
    assert!(value.is_infinite());
    assert!(path.is_empty());
}

#[test]
fn epsilon_constraint_picks_the_primary_optimum_within_bounds() {
    let graph = diamond();
    // Keep the second objective at or below 2.0: only the fast route fits.
    let (value, path) = epsilon_constraint(&graph, 0, 3, 0, &[0.0, 2.0]).unwrap();
    assert_eq!(value, 45.0);
    assert_eq!(path, vec![0, 2, 3]);

    // A loose bound admits the cheap route.
    let (value, path) = epsilon_constraint(&graph, 0, 3, 0, &[0.0, 5.0]).unwrap();
    assert_eq!(value, 15.0);
    assert_eq!(path, vec![0, 1, 3]);
}

#[test]
fn epsilon_constraint_with_empty_feasible_set_is_infeasible() {
    let graph = diamond();
    assert!(matches!(
        epsilon_constraint(&graph, 0, 3, 0, &[0.0, 1.0]),
        Err(Error::Infeasible)
    ));
}

#[test]
fn lexicographic_follows_the_priority_order() {
    let graph = diamond();

    let (value, path) = lexicographic(&graph, 0, 3, &[0, 1]).unwrap();
    assert_eq!(value, 15.0);
    assert_eq!(path, vec![0, 1, 3]);

    let (value, path) = lexicographic(&graph, 0, 3, &[1, 0]).unwrap();
    assert_eq!(value, 1.5);
    assert_eq!(path, vec![0, 2, 3]);
}

#[test]
fn lexicographic_rejects_a_non_permutation() {
    let graph = diamond();
    assert!(matches!(
        lexicographic(&graph, 0, 3, &[0, 0]),
        Err(Error::InvalidGraph(_))
    ));
    assert!(matches!(
        lexicographic(&graph, 0, 3, &[0]),
        Err(Error::InvalidGraph(_))
    ));
}

#[test]
fn knee_of_the_symmetric_front_breaks_ties_low() {
    let front: Vec<ParetoSolution> = [[1.0, 10.0], [2.0, 5.0], [5.0, 2.0], [10.0, 1.0]]
        .iter()
        .map(|objectives| ParetoSolution {
            objectives: objectives.to_vec(),
            path: Vec::new(),
            edges: Vec::new(),
        })
        .collect();
    let knee = knee_point(&front, &MIN2).unwrap();
    assert_eq!(knee.objectives, vec![2.0, 5.0]);
}

#[test]
fn knee_of_a_computed_front() {
    let front = compute_pareto_front(&diamond(), 0, 3, 10).unwrap();
    let knee = knee_point(&front, &MIN2).unwrap();
    // Two points only: the tie-break rule keeps the first by objective 0.
    assert_eq!(knee.objectives, vec![15.0, 3.0]);
}
