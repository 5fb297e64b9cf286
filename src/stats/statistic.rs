//! Statistic reducers
//!
//! A [`Statistic`] turns one resample into a single number. The engine places
//! no constraint on it beyond being pure and deterministic for a given input
//! order; NaN or infinite results are passed through untouched.
//!
//! Any `Fn(&[f64]) -> f64` closure is a statistic, so parameters can be
//! captured directly:
//!
//! ```
//! use resamplrs::stats::statistic::{reduce, Statistic};
//!
//! let q = 33.33;
//! let lower_third = move |values: &[f64]| {
//!     resamplrs::stats::descriptive::percentile_unsorted(values, q).unwrap_or(f64::NAN)
//! };
//! assert_eq!(reduce(&[1.0, 2.0, 3.0, 4.0], &lower_third), lower_third.apply(&[4.0, 3.0, 2.0, 1.0]));
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::stats::descriptive;

/// A scalar summary of a numeric sequence
pub trait Statistic {
    /// Reduce the values to one number
    fn apply(&self, values: &[f64]) -> f64;

    /// Short name used in logs and reports
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Statistic for F
where
    F: Fn(&[f64]) -> f64,
{
    fn apply(&self, values: &[f64]) -> f64 {
        self(values)
    }
}

/// Apply `func` to the full sequence
pub fn reduce<S: Statistic + ?Sized>(values: &[f64], func: &S) -> f64 {
    func.apply(values)
}

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Statistic for Mean {
    fn apply(&self, values: &[f64]) -> f64 {
        descriptive::mean(values)
    }

    fn name(&self) -> &str {
        "mean"
    }
}

/// Median (50th percentile)
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Statistic for Median {
    fn apply(&self, values: &[f64]) -> f64 {
        descriptive::percentile_unsorted(values, 50.0).unwrap_or(f64::NAN)
    }

    fn name(&self) -> &str {
        "median"
    }
}

/// Arbitrary percentile in `[0, 100]`, linearly interpolated
#[derive(Debug, Clone, Copy)]
pub struct Percentile {
    q: f64,
}

impl Percentile {
    pub fn new(q: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&q) {
            return Err(Error::InvalidArgument(format!(
                "percentile must be between 0 and 100, got {}",
                q
            )));
        }
        Ok(Percentile { q })
    }

    pub fn q(&self) -> f64 {
        self.q
    }
}

impl Statistic for Percentile {
    fn apply(&self, values: &[f64]) -> f64 {
        descriptive::percentile_unsorted(values, self.q).unwrap_or(f64::NAN)
    }

    fn name(&self) -> &str {
        "percentile"
    }
}

/// Mean after cutting `proportion` of the values from each end
///
/// `floor(proportion * n)` values are removed from each tail of the sorted
/// input before averaging.
#[derive(Debug, Clone, Copy)]
pub struct TrimmedMean {
    proportion: f64,
}

impl TrimmedMean {
    pub fn new(proportion: f64) -> Result<Self> {
        if !(0.0..0.5).contains(&proportion) {
            return Err(Error::InvalidArgument(format!(
                "trim proportion must be in [0, 0.5), got {}",
                proportion
            )));
        }
        Ok(TrimmedMean { proportion })
    }
}

impl Statistic for TrimmedMean {
    fn apply(&self, values: &[f64]) -> f64 {
        let sorted = descriptive::sorted(values);
        let cut = (self.proportion * sorted.len() as f64).floor() as usize;
        descriptive::mean(&sorted[cut..sorted.len() - cut])
    }

    fn name(&self) -> &str {
        "trimmed_mean"
    }
}

/// User-defined statistic carrying a display name
pub struct FnStatistic<F> {
    name: String,
    func: F,
}

impl<F> FnStatistic<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        FnStatistic {
            name: name.into(),
            func,
        }
    }
}

impl<F> Statistic for FnStatistic<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn apply(&self, values: &[f64]) -> f64 {
        (self.func)(values)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnStatistic<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStatistic").field("name", &self.name).finish()
    }
}
