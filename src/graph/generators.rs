use rand::prelude::*;

use crate::graph::DirectedGraph;

/// Generates a directed path `0 -> 1 -> ... -> n-1` with unit weights.
pub fn path_graph(n: usize) -> DirectedGraph<f64> {
    let arcs: Vec<(usize, usize, f64)> = (0..n.saturating_sub(1)).map(|i| (i, i + 1, 1.0)).collect();
    DirectedGraph::from_arcs(n, &arcs).expect("path arcs are in range with valid weights")
}

/// Generates a 4-connected grid graph with unit weights.
/// Vertex `(x, y)` has index `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<f64> {
    let mut arcs = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                arcs.push((vertex, vertex + 1, 1.0));
                arcs.push((vertex + 1, vertex, 1.0));
            }
            if y + 1 < height {
                arcs.push((vertex, vertex + width, 1.0));
                arcs.push((vertex + width, vertex, 1.0));
            }
        }
    }
    DirectedGraph::from_arcs(width * height, &arcs).expect("grid arcs are in range with valid weights")
}

/// Generates a random sparse graph with `edges_per_vertex` outgoing edges
/// per vertex and weights drawn from `1.0..100.0`. Seeded for
/// reproducibility.
pub fn random_graph(n: usize, edges_per_vertex: usize, seed: u64) -> DirectedGraph<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arcs = Vec::with_capacity(n * edges_per_vertex);
    for source in 0..n {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..n);
            let weight = rng.gen_range(1.0..100.0);
            arcs.push((source, target, weight));
        }
    }
    DirectedGraph::from_arcs(n, &arcs).expect("generated arcs are in range with valid weights")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_graph_shape() {
        let graph = path_graph(5);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.out_degree(0), 1);
        assert_eq!(graph.out_degree(4), 0);
    }

    #[test]
    fn grid_graph_shape() {
        let graph = grid_graph(3, 2);
        assert_eq!(graph.vertex_count(), 6);
        // 2 horizontal pairs per row * 2 rows + 3 vertical pairs, doubled.
        assert_eq!(graph.edge_count(), 14);
    }

    #[test]
    fn random_graph_is_reproducible() {
        let a = random_graph(50, 3, 7);
        let b = random_graph(50, 3, 7);
        assert_eq!(a.edge_count(), b.edge_count());
        for id in 0..a.edge_count() {
            assert_eq!(a.weight(id), b.weight(id));
        }
    }
}
