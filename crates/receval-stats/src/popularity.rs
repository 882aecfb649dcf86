//! Recommendation popularity
//!
//! Average log-damped popularity of the recommended items. Low values
//! mean the recommender reaches into the long tail; high values mean
//! it leans on the catalog's blockbusters.
//!
//! Each recommended item occurrence contributes `ln(1 + w)` where `w`
//! is the item's popularity weight; items absent from the table weigh
//! zero.

use crate::error::{MetricError, MetricResult};
use std::collections::HashMap;
use std::hash::Hash;

/// Count item occurrences in a training set
///
/// Produces the popularity table consumed by [`popularity`]: one entry
/// per distinct item, weighted by how many user histories contain it.
pub fn item_popularity<U, I>(train: &HashMap<U, Vec<I>>) -> HashMap<I, f64>
where
    U: Eq + Hash,
    I: Eq + Hash + Clone,
{
    let mut table: HashMap<I, f64> = HashMap::new();
    for items in train.values() {
        for item in items {
            *table.entry(item.clone()).or_insert(0.0) += 1.0;
        }
    }
    table
}

/// Mean log-damped popularity over all recommended item occurrences
pub fn popularity<U, I>(
    item_popular: &HashMap<I, f64>,
    recommends: &HashMap<U, Vec<I>>,
) -> MetricResult<f64>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    let mut total = 0.0;
    let mut count = 0usize;

    for items in recommends.values() {
        for item in items {
            let w = item_popular.get(item).copied().unwrap_or(0.0);
            total += (1.0 + w).ln();
            count += 1;
        }
    }

    if count == 0 {
        return Err(MetricError::NoRecommendations);
    }
    Ok(total / count as f64)
}

/// Popularity at a fixed cutoff, driving a recommender
///
/// The popularity table is built from `train` with [`item_popularity`];
/// `recommend(user, n)` is called for every user and the top `n`
/// returned items are averaged.
pub fn popularity_at_n<U, I, F>(
    train: &HashMap<U, Vec<I>>,
    n: usize,
    mut recommend: F,
) -> MetricResult<f64>
where
    U: Eq + Hash,
    I: Eq + Hash + Clone,
    F: FnMut(&U, usize) -> Vec<(I, f64)>,
{
    let table = item_popularity(train);

    let mut total = 0.0;
    let mut count = 0usize;

    for user in train.keys() {
        for (item, _score) in recommend(user, n).into_iter().take(n) {
            let w = table.get(&item).copied().unwrap_or(0.0);
            total += (1.0 + w).ln();
            count += 1;
        }
    }

    if count == 0 {
        return Err(MetricError::NoRecommendations);
    }
    Ok(total / count as f64)
}
