//! Distribution inequality (entropy, Gini index)
//!
//! Both metrics read the item popularity table as a distribution over
//! the catalog. Entropy is highest when recommendation frequency
//! spreads evenly; the Gini index is 0 for a uniform spread and
//! approaches 1 when a single item dominates.
//!
//! Weights are normalized by their sum, so raw occurrence counts and
//! precomputed probabilities give the same result.

use crate::error::{MetricError, MetricResult};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Shannon entropy of the normalized popularity distribution
///
/// Computes `-sum(p * ln p)` with `p = w / total`. Zero-weight items
/// contribute nothing (the `p ln p` limit at zero).
pub fn entropy<I>(item_popular: &HashMap<I, f64>) -> MetricResult<f64>
where
    I: Eq + Hash,
{
    if item_popular.is_empty() {
        return Err(MetricError::EmptyDistribution);
    }
    let total: f64 = item_popular.values().sum();
    if total <= 0.0 {
        return Err(MetricError::ZeroTotalWeight);
    }

    let mut ent = 0.0;
    for &w in item_popular.values() {
        if w > 0.0 {
            let p = w / total;
            ent -= p * p.ln();
        }
    }
    Ok(ent)
}

/// Gini index of the popularity distribution
///
/// Weights are ranked ascending and combined as
/// `sum((2j - n - 1) * w_j) / ((n - 1) * total)` with 1-based rank `j`.
/// A uniform distribution scores 0; a single dominant item scores 1.
pub fn gini_index<I>(item_popular: &HashMap<I, f64>) -> MetricResult<f64>
where
    I: Eq + Hash,
{
    let n = item_popular.len();
    if n < 2 {
        return Err(MetricError::DegenerateDistribution { n });
    }
    let total: f64 = item_popular.values().sum();
    if total <= 0.0 {
        return Err(MetricError::ZeroTotalWeight);
    }

    let mut weights: Vec<f64> = item_popular.values().copied().collect();
    weights.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut g = 0.0;
    for (rank, w) in weights.iter().enumerate() {
        let j = (rank + 1) as f64;
        g += (2.0 * j - n as f64 - 1.0) * w;
    }

    Ok(g / ((n as f64 - 1.0) * total))
}
