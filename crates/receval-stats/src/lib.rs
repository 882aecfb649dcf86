//! receval-stats - Statistical evaluation of recommender output
//!
//! This crate provides the standard offline metrics for judging what a
//! recommender produced:
//!
//! - **Rating error**: RMSE and MSE over predicted/actual rating pairs
//! - **Ranking quality**: precision and recall against ground truth
//! - **Coverage**: fraction of the catalog ever recommended
//! - **Popularity**: average log-damped popularity of recommended items
//! - **Inequality**: entropy and Gini index of the item distribution
//! - **Diversity**: one minus mean pairwise item similarity
//!
//! # Design Philosophy
//!
//! Every metric is a pure function over caller-owned collections and
//! returns a [`MetricResult`](error::MetricResult): the conditions that
//! would divide by zero are surfaced as errors instead of NaN. The
//! `*_at_n` variants drive a recommender callback at a fixed cutoff
//! instead of consuming precomputed lists.

pub mod coverage;
pub mod diversity;
pub mod error;
pub mod inequality;
pub mod popularity;
pub mod ranking;
pub mod rating;

pub use coverage::*;
pub use diversity::*;
pub use error::*;
pub use inequality::*;
pub use popularity::*;
pub use ranking::*;
pub use rating::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
