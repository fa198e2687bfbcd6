use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::Float;

/// A distance-ordered slice of the frontier. Every member satisfies
/// `lower_bound <= d[v] < upper_bound` at creation time.
#[derive(Debug, Clone)]
pub struct Block<W>
where
    W: Float + Debug,
{
    pub members: Vec<usize>,
    pub lower_bound: W,
    pub upper_bound: W,
}

/// Splits a frontier into distance-ordered blocks.
///
/// The frontier is sorted by current distance and swept once, emitting a
/// block boundary every `ceil(|F|/t)` elements and at every gap wider than
/// the density threshold (the median of consecutive gaps, recomputed per
/// call). Dense runs therefore coalesce while sparse gaps force a split. A
/// boundary is only placed where the distance strictly increases, so a run
/// of equal distances is never torn across blocks; such runs may overfill a
/// block.
///
/// Block bounds chain: `upper_bound = min(next.lower_bound, bound)`, the
/// last block ending at `bound`.
pub fn partition_blocks_adaptive<W>(
    frontier: &[usize],
    dist: &[W],
    bound: W,
    t: usize,
) -> Vec<Block<W>>
where
    W: Float + Debug,
{
    if frontier.is_empty() {
        return Vec::new();
    }

    let mut ordered = frontier.to_vec();
    ordered.sort_by(|&a, &b| {
        dist[a]
            .partial_cmp(&dist[b])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });

    let t = t.max(1);
    let target_size = (ordered.len() + t - 1) / t;
    let delta = median_gap(&ordered, dist);

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current = vec![ordered[0]];
    for window in ordered.windows(2) {
        let gap = dist[window[1]] - dist[window[0]];
        let size_split = current.len() >= target_size;
        let gap_split = match delta {
            Some(delta) => gap > delta,
            None => false,
        };
        if gap > W::zero() && (size_split || gap_split) {
            groups.push(std::mem::take(&mut current));
        }
        current.push(window[1]);
    }
    groups.push(current);

    let mut blocks = Vec::with_capacity(groups.len());
    for (i, members) in groups.iter().enumerate() {
        let lower_bound = dist[members[0]];
        let upper_bound = if i + 1 < groups.len() {
            let next_lower = dist[groups[i + 1][0]];
            if next_lower < bound {
                next_lower
            } else {
                bound
            }
        } else {
            bound
        };
        blocks.push(Block {
            members: members.clone(),
            lower_bound,
            upper_bound,
        });
    }
    blocks
}

/// Median of the consecutive distance gaps of a sorted frontier, `None`
/// when there are no gaps. Upper-middle element for even counts.
fn median_gap<W>(ordered: &[usize], dist: &[W]) -> Option<W>
where
    W: Float + Debug,
{
    if ordered.len() < 2 {
        return None;
    }
    let mut gaps: Vec<W> = ordered
        .windows(2)
        .map(|w| dist[w[1]] - dist[w[0]])
        .collect();
    gaps.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some(gaps[gaps.len() / 2])
}
