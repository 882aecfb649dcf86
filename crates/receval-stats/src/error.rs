//! Error types for receval-stats
//!
//! Every metric returns [`MetricResult`]. The variants name the
//! degenerate input that leaves the statistic undefined, one per
//! empty-denominator condition.

use thiserror::Error;

/// Main error type for metric computations
#[derive(Error, Debug)]
pub enum MetricError {
    /// No rating records were supplied
    #[error("no rating records to score")]
    NoRatings,

    /// No items were recommended across all users
    #[error("no recommended items across all users")]
    NoRecommendations,

    /// Ground-truth sets contain no items
    #[error("no ground-truth items across all users")]
    NoTestItems,

    /// A recommended user has no ground-truth entry
    #[error("user present in recommendations has no ground-truth entry")]
    MissingGroundTruth,

    /// The item catalog is empty
    #[error("item catalog is empty")]
    EmptyCatalog,

    /// The popularity table is empty
    #[error("popularity table is empty")]
    EmptyDistribution,

    /// Popularity weights sum to zero or less
    #[error("popularity weights must have a positive total")]
    ZeroTotalWeight,

    /// Fewer than two items in the distribution
    #[error("distribution has {n} item(s), need at least two")]
    DegenerateDistribution { n: usize },

    /// No recommendation list has at least two items
    #[error("no recommendation list has two or more items")]
    NoItemPairs,
}

/// Result type alias for metric computations
pub type MetricResult<T> = Result<T, MetricError>;
