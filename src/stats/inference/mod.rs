//! Inference from an empirical distribution
//!
//! Turns the resampled distribution into a p-value (two-group test) or a
//! percentile confidence interval (single group).

use std::fmt;

use crate::error::{Error, Result};
use crate::stats::descriptive;

/// Percentile confidence interval of an empirical distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Upper cutoff, the `100 - 50 * alpha` percentile
    pub upper: f64,
    /// Lower cutoff, the `50 * alpha` percentile
    pub lower: f64,
    /// Alpha level the cutoffs were taken at
    pub alpha_level: f64,
}

impl ConfidenceInterval {
    /// The `(upper, lower)` pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.upper, self.lower)
    }

    /// Check if a value is within the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Confidence level, `1 - alpha`
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.alpha_level
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}] ({:.1}% CI)",
            self.lower,
            self.upper,
            self.confidence_level() * 100.0
        )
    }
}

/// Where an external histogram renderer should draw the observed-value line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMarker {
    /// Observed statistic on the x axis
    pub x: f64,
    /// Line height in histogram counts
    pub height: usize,
}

/// Check that `alpha_level` lies in the open interval (0, 1)
pub fn validate_alpha(alpha_level: f64) -> Result<()> {
    if alpha_level > 0.0 && alpha_level < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "alpha_level must be in (0, 1), got {}",
            alpha_level
        )))
    }
}

/// Fraction of resampled differences at least as large as `observed`
///
/// This is a one-sided test against the alternative that the first group's
/// statistic exceeds the second's. NaN entries never count as a match. For a
/// two-sided p-value pass the result to [`two_sided_p_value`].
pub fn one_sided_p_value(distribution: &[f64], observed: f64) -> Result<f64> {
    if distribution.is_empty() {
        return Err(Error::InvalidArgument(
            "p-value requires at least one resample".into(),
        ));
    }

    let hits = distribution.iter().filter(|&&d| d >= observed).count();
    Ok(hits as f64 / distribution.len() as f64)
}

/// Two-sided p-value from a one-sided one, `2 * min(p, 1 - p)`
pub fn two_sided_p_value(p_value: f64) -> f64 {
    2.0 * p_value.min(1.0 - p_value)
}

/// Percentile interval at `alpha_level`
///
/// `upper` is the `100 - 50 * alpha` percentile and `lower` the `50 * alpha`
/// percentile, with linear interpolation between order statistics. A NaN in
/// the distribution makes both bounds NaN.
pub fn percentile_interval(distribution: &[f64], alpha_level: f64) -> Result<ConfidenceInterval> {
    validate_alpha(alpha_level)?;
    if distribution.is_empty() {
        return Err(Error::InvalidArgument(
            "confidence interval requires at least one resample".into(),
        ));
    }

    let tail = 50.0 * alpha_level;
    let upper = descriptive::percentile_unsorted(distribution, 100.0 - tail)?;
    let lower = descriptive::percentile_unsorted(distribution, tail)?;

    Ok(ConfidenceInterval {
        upper,
        lower,
        alpha_level,
    })
}

/// Height for the observed-value marker line of a histogram
///
/// The absolute difference between the number of values above the 45th
/// percentile and the number above the 55th, i.e. the mass of the central
/// tenth of the distribution.
pub fn marker_height(distribution: &[f64]) -> Result<usize> {
    let p45 = descriptive::percentile_unsorted(distribution, 45.0)?;
    let p55 = descriptive::percentile_unsorted(distribution, 55.0)?;

    let above = |cut: f64| distribution.iter().filter(|&&d| d > cut).count();
    Ok(above(p45).abs_diff(above(p55)))
}
