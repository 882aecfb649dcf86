//! Rating prediction error (MSE, RMSE)
//!
//! Error metrics compare the ratings a model predicted against the
//! ratings users actually gave. Both are aggregates over a flat slice
//! of records:
//!
//! - MSE: mean of squared prediction errors
//! - RMSE: square root of the MSE, in the units of the rating scale

use crate::error::{MetricError, MetricResult};
use serde::{Deserialize, Serialize};

/// A single predicted/actual rating pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Rating the model predicted
    pub predicted: f64,
    /// Rating the user actually gave
    pub actual: f64,
}

impl RatingRecord {
    /// Create a record from a predicted/actual pair
    pub fn new(predicted: f64, actual: f64) -> Self {
        Self { predicted, actual }
    }

    /// Signed prediction error (predicted - actual)
    pub fn error(&self) -> f64 {
        self.predicted - self.actual
    }
}

/// Mean squared error over a set of rating records
pub fn mse(records: &[RatingRecord]) -> MetricResult<f64> {
    if records.is_empty() {
        return Err(MetricError::NoRatings);
    }

    let sum: f64 = records.iter().map(|r| r.error().powi(2)).sum();
    Ok(sum / records.len() as f64)
}

/// Root mean squared error over a set of rating records
pub fn rmse(records: &[RatingRecord]) -> MetricResult<f64> {
    Ok(mse(records)?.sqrt())
}
