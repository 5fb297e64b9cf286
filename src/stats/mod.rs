//! Resampling statistics module
//!
//! This module provides bootstrap and permutation inference. It implements
//! resampling of a target column, statistic reduction per group, one-sided
//! p-values for two-group comparisons and percentile confidence intervals for
//! a single group.

// Feature modules
pub mod descriptive;
pub mod inference;
pub mod resampling;
pub mod sampling;
pub mod statistic;

use std::fmt;
use std::fmt::Debug;

use rand::Rng;

use crate::dataframe::DataFrame;
use crate::error::Result;

pub use inference::{ConfidenceInterval, PlotMarker};
pub use resampling::{ResampledTable, ResamplingEngine, ResamplingMethod};
pub use sampling::{Resample, RngResampler};
pub use statistic::{FnStatistic, Mean, Median, Percentile, Statistic, TrimmedMean};

/// Two-group resampling test result
#[derive(Debug, Clone)]
pub struct HypothesisResult<L> {
    /// Strategy the distribution was drawn with
    pub method: ResamplingMethod,
    /// Name of the statistic
    pub statistic: String,
    /// Observed `func(level1) - func(level2)`
    pub observed: f64,
    /// One resampled difference per replicate
    pub distribution: Vec<f64>,
    /// One-sided p-value, share of `distribution >= observed`
    pub p_value: f64,
    /// Every resampled column, when requested
    pub resampled: Option<ResampledTable<L>>,
}

impl<L> HypothesisResult<L> {
    /// Two-sided p-value, `2 * min(p, 1 - p)`
    pub fn two_sided_p_value(&self) -> f64 {
        inference::two_sided_p_value(self.p_value)
    }

    /// Marker for drawing the observed value over a histogram of the distribution
    pub fn marker(&self) -> Result<PlotMarker> {
        Ok(PlotMarker {
            x: self.observed,
            height: inference::marker_height(&self.distribution)?,
        })
    }

    /// Number of resamples
    pub fn replicates(&self) -> usize {
        self.distribution.len()
    }
}

impl<L> fmt::Display for HypothesisResult<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resampling test ({}, {} resamples)", self.method, self.replicates())?;
        writeln!(f, "  Statistic:           {}", self.statistic)?;
        writeln!(f, "  Observed difference: {:.4}", self.observed)?;
        write!(f, "  p-value (one-sided): {:.6}", self.p_value)
    }
}

/// Bootstrap interval estimation result
#[derive(Debug, Clone)]
pub struct ConfidenceEstimate {
    /// Name of the statistic
    pub statistic: String,
    /// One bootstrapped statistic per replicate
    pub distribution: Vec<f64>,
    /// Percentile interval over `distribution`
    pub interval: ConfidenceInterval,
}

impl ConfidenceEstimate {
    /// The `(upper, lower)` pair
    pub fn bounds(&self) -> (f64, f64) {
        self.interval.as_tuple()
    }
}

impl fmt::Display for ConfidenceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bootstrap {} over {} resamples: {}",
            self.statistic,
            self.distribution.len(),
            self.interval
        )
    }
}

// Public API functions

/// Draw one resample of `values`
///
/// # Example
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use resamplrs::stats;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let shuffled = stats::resample(&[1.0, 2.0, 3.0], false, 3, &mut rng).unwrap();
/// assert_eq!(shuffled.len(), 3);
/// ```
pub fn resample<R: Rng>(values: &[f64], replace: bool, size: usize, rng: &mut R) -> Result<Vec<f64>> {
    sampling::resample(values, replace, size, rng)
}

/// Apply a statistic to a sequence
pub fn reduce<S: Statistic + ?Sized>(values: &[f64], func: &S) -> f64 {
    statistic::reduce(values, func)
}

/// Run a two-group resampling test
///
/// # Example
/// ```rust
/// use resamplrs::stats::{self, Median, ResamplingMethod};
/// use resamplrs::{DataFrame, Series};
///
/// let mut df = DataFrame::new();
/// df.add_column("weight".to_string(), Series::new(vec![10.2, 9.8, 11.0, 12.2, 10.9, 12.5], None).unwrap()).unwrap();
/// df.add_column("dose".to_string(), Series::new(vec![1, 1, 2, 2, 1, 2], None).unwrap()).unwrap();
///
/// let result = stats::run_hypothesis(&df, "weight", "dose", &1, &2, 500, &Median, ResamplingMethod::Permutation).unwrap();
/// println!("{}", result);
/// assert!(result.p_value >= 0.0 && result.p_value <= 1.0);
/// ```
pub fn run_hypothesis<L, S>(
    df: &DataFrame,
    target_column: &str,
    group_column: &str,
    level1: &L,
    level2: &L,
    replicates: usize,
    func: &S,
    method: ResamplingMethod,
) -> Result<HypothesisResult<L>>
where
    L: 'static + Debug + Clone + PartialEq + Send + Sync,
    S: Statistic + ?Sized,
{
    ResamplingEngine::new(method).run_hypothesis(
        df,
        target_column,
        group_column,
        level1,
        level2,
        replicates,
        func,
    )
}

/// Estimate a bootstrap percentile confidence interval for one level
///
/// # Example
/// ```rust
/// use resamplrs::stats::{self, Mean, ResamplingMethod};
/// use resamplrs::{DataFrame, Series};
///
/// let mut df = DataFrame::new();
/// df.add_column("value".to_string(), Series::new(vec![10.0, 10.0, 10.0], None).unwrap()).unwrap();
/// df.add_column("level".to_string(), Series::new(vec!["A", "A", "A"], None).unwrap()).unwrap();
///
/// let estimate = stats::estimate_ci(&df, "value", "level", &"A", 5, &Mean, 0.05, ResamplingMethod::Bootstrap).unwrap();
/// assert_eq!(estimate.bounds(), (10.0, 10.0));
/// ```
pub fn estimate_ci<L, S>(
    df: &DataFrame,
    target_column: &str,
    group_column: &str,
    level: &L,
    replicates: usize,
    func: &S,
    alpha_level: f64,
    method: ResamplingMethod,
) -> Result<ConfidenceEstimate>
where
    L: 'static + Debug + Clone + PartialEq + Send + Sync,
    S: Statistic + ?Sized,
{
    ResamplingEngine::new(method).estimate_ci(
        df,
        target_column,
        group_column,
        level,
        replicates,
        func,
        alpha_level,
    )
}
