//! Recommendation diversity
//!
//! Diversity is one minus the mean pairwise similarity of the items in
//! a user's recommendation list, averaged across users. The similarity
//! function is caller-supplied and assumed symmetric with values in
//! [0, 1]: identical items score 1, unrelated items score 0.

use crate::error::{MetricError, MetricResult};
use std::collections::HashMap;
use std::hash::Hash;

/// Intra-list diversity of a single recommendation list
///
/// One minus the mean similarity over all unordered pairs of list
/// positions. Returns `None` when the list has fewer than two items,
/// since no pair exists.
pub fn intra_list_diversity<I, F>(items: &[I], mut sim: F) -> Option<f64>
where
    F: FnMut(&I, &I) -> f64,
{
    if items.len() < 2 {
        return None;
    }

    let mut sum = 0.0;
    let mut pairs = 0usize;
    for (idx, first) in items.iter().enumerate() {
        for second in &items[idx + 1..] {
            sum += sim(first, second);
            pairs += 1;
        }
    }

    Some(1.0 - sum / pairs as f64)
}

/// Mean intra-list diversity across users
///
/// Users whose lists hold fewer than two items have no pairwise term
/// and are skipped. Errors when no user has a scorable list.
pub fn diversity<U, I, F>(
    recommends: &HashMap<U, Vec<I>>,
    mut sim: F,
) -> MetricResult<f64>
where
    U: Eq + Hash,
    F: FnMut(&I, &I) -> f64,
{
    let mut total = 0.0;
    let mut users = 0usize;

    for items in recommends.values() {
        if let Some(d) = intra_list_diversity(items, |a, b| sim(a, b)) {
            total += d;
            users += 1;
        }
    }

    if users == 0 {
        return Err(MetricError::NoItemPairs);
    }
    Ok(total / users as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intra_list_constant_similarity() {
        let items = vec!["a", "b", "c"];
        let d = intra_list_diversity(&items, |_, _| 0.5).unwrap();
        assert!((d - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_intra_list_too_short() {
        assert!(intra_list_diversity(&["a"], |_, _| 0.0).is_none());
        assert!(intra_list_diversity::<&str, _>(&[], |_, _| 0.0).is_none());
    }

    #[test]
    fn test_diversity_identical_items_is_zero() {
        let recommends = HashMap::from([("u1", vec!["a", "b"]), ("u2", vec!["c", "d"])]);
        let d = diversity(&recommends, |_, _| 1.0).unwrap();
        assert!((d - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_diversity_unrelated_items_is_one() {
        let recommends = HashMap::from([("u1", vec!["a", "b", "c"])]);
        let d = diversity(&recommends, |_, _| 0.0).unwrap();
        assert!((d - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_diversity_uses_supplied_similarity() {
        let recommends = HashMap::from([("u1", vec![1, 2, 4])]);

        // Similar when both even or both odd
        let d = diversity(&recommends, |a, b| {
            if a % 2 == b % 2 {
                1.0
            } else {
                0.0
            }
        })
        .unwrap();
        // Pairs: (1,2)=0, (1,4)=0, (2,4)=1 -> diversity 1 - 1/3
        assert!((d - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_diversity_skips_short_lists() {
        let recommends = HashMap::from([("u1", vec!["a"]), ("u2", vec!["x", "y"])]);
        let d = diversity(&recommends, |_, _| 0.25).unwrap();
        assert!((d - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_diversity_no_scorable_lists() {
        let recommends = HashMap::from([("u1", vec!["a"]), ("u2", Vec::new())]);
        assert!(matches!(
            diversity(&recommends, |_, _| 0.0),
            Err(MetricError::NoItemPairs)
        ));
    }
}
