//! # resamplrs
//!
//! Bootstrap and permutation inference over tabular data.
//!
//! A two-group test restricts a [`DataFrame`] to two levels of a grouping
//! column, resamples the target column `R` times and reports the one-sided
//! p-value of the observed difference of a statistic. A single level can be
//! bootstrapped to get a percentile confidence interval for the statistic.
//!
//! ## Quick Start
//!
//! ```rust
//! use resamplrs::stats::{Mean, ResamplingEngine, ResamplingMethod};
//! use resamplrs::{DataFrame, Series};
//!
//! let mut df = DataFrame::new();
//! df.add_column("weight".to_string(), Series::new(vec![10.2, 9.8, 11.0, 12.2, 10.9, 12.5], None).unwrap()).unwrap();
//! df.add_column("dose".to_string(), Series::new(vec!["low", "low", "high", "high", "low", "high"], None).unwrap()).unwrap();
//!
//! let engine = ResamplingEngine::new(ResamplingMethod::Permutation).with_seed(Some(7));
//! let test = engine.run_hypothesis(&df, "weight", "dose", &"low", &"high", 1000, &Mean).unwrap();
//! println!("{}", test);
//!
//! let bootstrap = ResamplingEngine::new(ResamplingMethod::Bootstrap).with_seed(Some(7));
//! let estimate = bootstrap.estimate_ci(&df, "weight", "dose", &"high", 1000, &Mean, 0.05).unwrap();
//! let (upper, lower) = estimate.bounds();
//! assert!(upper >= lower);
//! ```

#![allow(clippy::too_many_arguments)]

// Core module with the error type
pub mod core;

pub mod config;
pub mod dataframe;
pub mod error;
pub mod groupby;
pub mod series;
pub mod stats;

// Re-export core types
pub use core::error::{Error, Result};

pub use config::ResampleConfig;
pub use dataframe::DataFrame;
pub use groupby::GroupSplitter;
pub use series::Series;
pub use stats::{
    ConfidenceEstimate, ConfidenceInterval, HypothesisResult, PlotMarker, ResampledTable,
    ResamplingEngine, ResamplingMethod, Statistic,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
