//! Catalog coverage
//!
//! Coverage is the fraction of the catalog that was recommended to at
//! least one user. A recommender with high coverage surfaces the long
//! tail; one with low coverage keeps showing the same few items.
//!
//! Only recommended items that belong to the catalog are counted, so
//! the result is always in [0, 1].

use crate::error::{MetricError, MetricResult};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Fraction of the catalog recommended to at least one user
pub fn coverage<U, I>(
    recommends: &HashMap<U, Vec<I>>,
    catalog: &HashSet<I>,
) -> MetricResult<f64>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    if catalog.is_empty() {
        return Err(MetricError::EmptyCatalog);
    }

    let mut recommended: HashSet<&I> = HashSet::new();
    for items in recommends.values() {
        for item in items {
            if catalog.contains(item) {
                recommended.insert(item);
            }
        }
    }

    Ok(recommended.len() as f64 / catalog.len() as f64)
}

/// Coverage at a fixed cutoff, driving a recommender
///
/// The catalog is the set of items occurring anywhere in `train`;
/// `recommend(user, n)` is called for every user and the top `n`
/// returned items are collected.
pub fn coverage_at_n<U, I, F>(
    train: &HashMap<U, Vec<I>>,
    n: usize,
    mut recommend: F,
) -> MetricResult<f64>
where
    U: Eq + Hash,
    I: Eq + Hash,
    F: FnMut(&U, usize) -> Vec<(I, f64)>,
{
    let mut catalog: HashSet<&I> = HashSet::new();
    for items in train.values() {
        catalog.extend(items.iter());
    }
    if catalog.is_empty() {
        return Err(MetricError::EmptyCatalog);
    }

    let mut recommended: HashSet<I> = HashSet::new();
    for user in train.keys() {
        for (item, _score) in recommend(user, n).into_iter().take(n) {
            if catalog.contains(&item) {
                recommended.insert(item);
            }
        }
    }

    Ok(recommended.len() as f64 / catalog.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_full() {
        let recommends = HashMap::from([("u1", vec!["a", "b"]), ("u2", vec!["c"])]);
        let catalog: HashSet<&str> = ["a", "b", "c"].into_iter().collect();

        let c = coverage(&recommends, &catalog).unwrap();
        assert!((c - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_coverage_partial() {
        let recommends = HashMap::from([("u1", vec!["a"]), ("u2", vec!["b", "a"])]);
        let catalog: HashSet<&str> = ["a", "b", "c", "d"].into_iter().collect();

        let c = coverage(&recommends, &catalog).unwrap();
        assert!((c - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_coverage_ignores_items_outside_catalog() {
        let recommends = HashMap::from([("u1", vec!["a", "mystery"])]);
        let catalog: HashSet<&str> = ["a", "b"].into_iter().collect();

        let c = coverage(&recommends, &catalog).unwrap();
        assert!((c - 0.5).abs() < 1e-10);
        assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn test_coverage_empty_catalog() {
        let recommends = HashMap::from([("u1", vec!["a"])]);
        let catalog: HashSet<&str> = HashSet::new();
        assert!(matches!(
            coverage(&recommends, &catalog),
            Err(MetricError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_coverage_no_recommendations_is_zero() {
        let recommends: HashMap<&str, Vec<&str>> = HashMap::new();
        let catalog: HashSet<&str> = ["a", "b"].into_iter().collect();

        let c = coverage(&recommends, &catalog).unwrap();
        assert!((c - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_coverage_at_n() {
        let train = HashMap::from([
            ("u1", vec!["a", "b"]),
            ("u2", vec!["c"]),
            ("u3", vec!["b"]),
        ]);

        // Everyone gets the same single item: 1 of 3 catalog items
        let c = coverage_at_n(&train, 1, |_, _| vec![("a", 1.0)]).unwrap();
        assert!((c - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_coverage_at_n_empty_train() {
        let train: HashMap<&str, Vec<&str>> = HashMap::new();
        assert!(matches!(
            coverage_at_n(&train, 5, |_, _| Vec::new()),
            Err(MetricError::EmptyCatalog)
        ));
    }
}
