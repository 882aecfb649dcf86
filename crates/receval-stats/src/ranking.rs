//! Ranking quality (precision, recall)
//!
//! Precision is the fraction of recommended items the user actually
//! interacted with; recall is the fraction of actual interactions that
//! were recommended. Both are micro-averaged: intersection counts and
//! denominators are summed across all users before dividing.
//!
//! Two input shapes are supported:
//!
//! - precomputed recommendation lists per user ([`precision`],
//!   [`recall`], [`precision_recall`])
//! - a recommender callback driven at a fixed cutoff
//!   ([`precision_recall_at_n`])

use crate::error::{MetricError, MetricResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Precision and recall computed from a shared intersection count
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PrecisionRecall {
    /// Fraction of recommended items that are relevant
    pub precision: f64,
    /// Fraction of relevant items that were recommended
    pub recall: f64,
}

impl PrecisionRecall {
    /// Harmonic mean of precision and recall
    pub fn f1(&self) -> f64 {
        let denom = self.precision + self.recall;
        if denom == 0.0 {
            return 0.0;
        }
        2.0 * self.precision * self.recall / denom
    }
}

/// Sum hits, distinct recommended items, and distinct ground-truth
/// items across every user in `recommends`.
fn tally<U, I>(
    recommends: &HashMap<U, Vec<I>>,
    tests: &HashMap<U, Vec<I>>,
) -> MetricResult<(usize, usize, usize)>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    let mut hits = 0;
    let mut recommend_sum = 0;
    let mut test_sum = 0;

    for (user, items) in recommends {
        let truth: HashSet<&I> = tests
            .get(user)
            .ok_or(MetricError::MissingGroundTruth)?
            .iter()
            .collect();
        let recommended: HashSet<&I> = items.iter().collect();

        hits += recommended.intersection(&truth).count();
        recommend_sum += recommended.len();
        test_sum += truth.len();
    }

    Ok((hits, recommend_sum, test_sum))
}

/// Fraction of recommended items that appear in the ground truth
///
/// Micro-averaged over all users in `recommends`; every user must have
/// an entry in `tests`.
pub fn precision<U, I>(
    recommends: &HashMap<U, Vec<I>>,
    tests: &HashMap<U, Vec<I>>,
) -> MetricResult<f64>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    let (hits, recommend_sum, _) = tally(recommends, tests)?;
    if recommend_sum == 0 {
        return Err(MetricError::NoRecommendations);
    }
    Ok(hits as f64 / recommend_sum as f64)
}

/// Fraction of ground-truth items that were recommended
///
/// Micro-averaged over all users in `recommends`; every user must have
/// an entry in `tests`.
pub fn recall<U, I>(
    recommends: &HashMap<U, Vec<I>>,
    tests: &HashMap<U, Vec<I>>,
) -> MetricResult<f64>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    let (hits, _, test_sum) = tally(recommends, tests)?;
    if test_sum == 0 {
        return Err(MetricError::NoTestItems);
    }
    Ok(hits as f64 / test_sum as f64)
}

/// Precision and recall in a single pass
///
/// Produces the same numerator split as calling [`precision`] and
/// [`recall`] separately on the same inputs.
pub fn precision_recall<U, I>(
    recommends: &HashMap<U, Vec<I>>,
    tests: &HashMap<U, Vec<I>>,
) -> MetricResult<PrecisionRecall>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    let (hits, recommend_sum, test_sum) = tally(recommends, tests)?;
    if recommend_sum == 0 {
        return Err(MetricError::NoRecommendations);
    }
    if test_sum == 0 {
        return Err(MetricError::NoTestItems);
    }
    Ok(PrecisionRecall {
        precision: hits as f64 / recommend_sum as f64,
        recall: hits as f64 / test_sum as f64,
    })
}

/// Precision and recall at a fixed cutoff, driving a recommender
///
/// Calls `recommend(user, n)` for every user in `train` and counts how
/// many of the top `n` returned items appear in that user's ground
/// truth. Precision divides hits by `n * |train|` (the number of slots
/// offered), recall by the total ground-truth size.
pub fn precision_recall_at_n<U, I, F>(
    train: &HashMap<U, Vec<I>>,
    tests: &HashMap<U, Vec<I>>,
    n: usize,
    mut recommend: F,
) -> MetricResult<PrecisionRecall>
where
    U: Eq + Hash,
    I: Eq + Hash,
    F: FnMut(&U, usize) -> Vec<(I, f64)>,
{
    if n == 0 || train.is_empty() {
        return Err(MetricError::NoRecommendations);
    }

    let mut hits = 0;
    let mut test_sum = 0;

    for user in train.keys() {
        let truth: HashSet<&I> = tests
            .get(user)
            .ok_or(MetricError::MissingGroundTruth)?
            .iter()
            .collect();

        for (item, _score) in recommend(user, n).into_iter().take(n) {
            if truth.contains(&item) {
                hits += 1;
            }
        }
        test_sum += truth.len();
    }

    if test_sum == 0 {
        return Err(MetricError::NoTestItems);
    }
    Ok(PrecisionRecall {
        precision: hits as f64 / (n * train.len()) as f64,
        recall: hits as f64 / test_sum as f64,
    })
}
