//! Weights: Turning raw observations into normalized layout items.
//!
//! The layout takes weights in absolute bounds-area units and does no
//! ranking or normalization itself. This module holds the glue a caller
//! usually runs first: tally occurrences, then keep the heaviest entries
//! normalized to sum to 1.0 for a unit square render.

use std::collections::HashMap;
use std::hash::Hash;

use crate::layout::Item;

/// Count occurrences of each value in a stream of observations.
pub fn tally<I, K>(observations: I) -> HashMap<K, u64>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash,
{
    let mut counts = HashMap::new();
    for key in observations {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Rank tallied counts, keep the `limit` heaviest, and normalize the
/// survivors' weights to sum to 1.0.
///
/// Ranking is by count descending with ties broken by ascending key, so
/// equal counts come out in a deterministic order. Normalization divides
/// by the kept total, not the full tally's: the result describes shares
/// of the survivors and is ready to render into [`crate::Rect::UNIT`].
/// Scale each weight by the bounds area when rendering elsewhere.
///
/// Items sorted by descending weight are exactly what the squarified
/// heuristic expects, so the result feeds straight into
/// [`crate::Treemap::new`].
pub fn top_weighted<K>(counts: HashMap<K, u64>, limit: usize) -> Vec<Item<K>>
where
    K: Ord,
{
    let mut ranked: Vec<(K, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);

    let total: u64 = ranked.iter().map(|&(_, count)| count).sum();
    if total == 0 {
        // All-zero counts normalize to all-zero weights, not NaN.
        return ranked.into_iter().map(|(key, _)| Item::new(key, 0.0)).collect();
    }

    let total = total as f64;
    ranked
        .into_iter()
        .map(|(key, count)| Item::new(key, count as f64 / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_occurrences() {
        let counts = tally(["a", "b", "a", "a", "b"]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["a"], 3);
        assert_eq!(counts["b"], 2);
    }

    #[test]
    fn test_tally_empty_stream() {
        let counts: HashMap<u8, u64> = tally([]);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_top_weighted_ranks_by_count_then_key() {
        let counts = tally(["b", "b", "b", "d", "d", "a", "c"]);
        let items = top_weighted(counts, 3);

        let labels: Vec<&str> = items.iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_top_weighted_normalizes_over_kept_total() {
        let counts = tally(["b", "b", "b", "d", "d", "a", "c"]);
        let items = top_weighted(counts, 3);

        // Kept counts are 3, 2, 1 of a kept total of 6; the dropped "c"
        // does not dilute the shares.
        assert!((items[0].weight - 0.5).abs() < 1e-12);
        assert!((items[1].weight - 2.0 / 6.0).abs() < 1e-12);
        assert!((items[2].weight - 1.0 / 6.0).abs() < 1e-12);

        let sum: f64 = items.iter().map(|item| item.weight).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_top_weighted_truncates_to_limit() {
        let counts = tally([1, 2, 3, 4, 5, 5]);
        assert_eq!(top_weighted(counts, 2).len(), 2);
    }

    #[test]
    fn test_top_weighted_with_limit_beyond_population() {
        let counts = tally(["x", "y"]);
        assert_eq!(top_weighted(counts, 20).len(), 2);
    }

    #[test]
    fn test_top_weighted_all_zero_counts() {
        let mut counts = HashMap::new();
        counts.insert("a", 0);
        counts.insert("b", 0);

        let items = top_weighted(counts, 5);
        assert_eq!(items.len(), 2);
        for item in items {
            assert_eq!(item.weight, 0.0);
        }
    }
}
