use ordered_float::OrderedFloat;

use crate::multi_objective::graph::ObjectiveSense;
use crate::multi_objective::pareto::ParetoSolution;

const ANGLE_TIE_EPS: f64 = 1e-9;

/// Picks the knee of a Pareto front: the point of maximum curvature in
/// normalized objective space.
///
/// Each objective is min-max normalized to `[0, 1]` (maximized dimensions
/// flipped so 0 is always best), the front is sorted by the first
/// objective, and every interior point is scored by the angle its two
/// neighbors subtend at it; the widest angle wins. Ties go to the smaller
/// first-objective value. Fronts with fewer than three points fall back to
/// the tie-break rule. Returns `None` for an empty front.
pub fn knee_point(front: &[ParetoSolution], senses: &[ObjectiveSense]) -> Option<ParetoSolution> {
    if front.is_empty() {
        return None;
    }

    let dims = senses.len();
    let normalized: Vec<Vec<f64>> = {
        let mut mins = vec![f64::INFINITY; dims];
        let mut maxs = vec![f64::NEG_INFINITY; dims];
        for solution in front {
            for (dim, &value) in solution.objectives.iter().enumerate() {
                mins[dim] = mins[dim].min(value);
                maxs[dim] = maxs[dim].max(value);
            }
        }
        front
            .iter()
            .map(|solution| {
                solution
                    .objectives
                    .iter()
                    .enumerate()
                    .map(|(dim, &value)| {
                        let range = maxs[dim] - mins[dim];
                        if range == 0.0 {
                            0.0
                        } else {
                            match senses[dim] {
                                ObjectiveSense::Minimize => (value - mins[dim]) / range,
                                ObjectiveSense::Maximize => (maxs[dim] - value) / range,
                            }
                        }
                    })
                    .collect()
            })
            .collect()
    };

    let mut order: Vec<usize> = (0..front.len()).collect();
    order.sort_by_key(|&i| {
        normalized[i]
            .iter()
            .map(|&v| OrderedFloat(v))
            .collect::<Vec<_>>()
    });

    let mut best: Option<(f64, usize)> = None;
    for window in order.windows(3) {
        let (prev, here, next) = (window[0], window[1], window[2]);
        if let Some(angle) = vertex_angle(&normalized[prev], &normalized[here], &normalized[next]) {
            match best {
                Some((best_angle, _)) if angle <= best_angle + ANGLE_TIE_EPS => {}
                _ => best = Some((angle, here)),
            }
        }
    }

    let winner = best.map(|(_, i)| i).unwrap_or(order[0]);
    Some(front[winner].clone())
}

/// Angle at `here` subtended by `prev` and `next`, `None` when a neighbor
/// coincides with the vertex.
fn vertex_angle(prev: &[f64], here: &[f64], next: &[f64]) -> Option<f64> {
    let to_prev: Vec<f64> = prev.iter().zip(here.iter()).map(|(a, b)| a - b).collect();
    let to_next: Vec<f64> = next.iter().zip(here.iter()).map(|(a, b)| a - b).collect();
    let norm_prev = to_prev.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_next = to_next.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_prev == 0.0 || norm_next == 0.0 {
        return None;
    }
    let dot: f64 = to_prev.iter().zip(to_next.iter()).map(|(a, b)| a * b).sum();
    let cos = (dot / (norm_prev * norm_next)).clamp(-1.0, 1.0);
    Some(cos.acos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(objectives: Vec<f64>) -> ParetoSolution {
        ParetoSolution {
            objectives,
            path: Vec::new(),
            edges: Vec::new(),
        }
    }

    const MIN2: [ObjectiveSense; 2] = [ObjectiveSense::Minimize, ObjectiveSense::Minimize];

    #[test]
    fn empty_front_has_no_knee() {
        assert!(knee_point(&[], &MIN2).is_none());
    }

    #[test]
    fn singleton_front_is_its_own_knee() {
        let front = vec![solution(vec![2.0, 3.0])];
        assert_eq!(knee_point(&front, &MIN2).unwrap().objectives, vec![2.0, 3.0]);
    }

    #[test]
    fn two_point_front_falls_back_to_first_objective() {
        let front = vec![solution(vec![5.0, 1.0]), solution(vec![1.0, 5.0])];
        assert_eq!(knee_point(&front, &MIN2).unwrap().objectives, vec![1.0, 5.0]);
    }

    #[test]
    fn pronounced_corner_wins() {
        // An L-shaped front: the corner at [2, 2] is the knee.
        let front = vec![
            solution(vec![1.0, 10.0]),
            solution(vec![2.0, 2.0]),
            solution(vec![10.0, 1.0]),
        ];
        assert_eq!(knee_point(&front, &MIN2).unwrap().objectives, vec![2.0, 2.0]);
    }

    #[test]
    fn maximize_dimension_is_flipped() {
        // Second objective maximized; same geometry as the L-shape above
        // once flipped.
        let senses = [ObjectiveSense::Minimize, ObjectiveSense::Maximize];
        let front = vec![
            solution(vec![1.0, 0.0]),
            solution(vec![2.0, 8.0]),
            solution(vec![10.0, 9.0]),
        ];
        assert_eq!(knee_point(&front, &senses).unwrap().objectives, vec![2.0, 8.0]);
    }
}
