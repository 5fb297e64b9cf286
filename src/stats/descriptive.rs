//! Descriptive helpers shared by the statistic reducers and interval estimation

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Arithmetic mean; NaN for empty input
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sort a copy of the data in ascending order
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted_data = data.to_vec();
    sorted_data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted_data
}

/// Calculate percentile of sorted data
///
/// Linear interpolation between the two closest order statistics, so
/// `percentile(&[1, 2, 3, 4], 50)` is `2.5`.
pub fn percentile(sorted_data: &[f64], p: f64) -> Result<f64> {
    if sorted_data.is_empty() {
        return Err(Error::InvalidArgument(
            "Cannot compute percentile for empty data".into(),
        ));
    }

    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidArgument(format!(
            "Percentile must be between 0 and 100, got {}",
            p
        )));
    }

    let n = sorted_data.len();
    let index = (p / 100.0) * (n - 1) as f64;
    let lower_index = index.floor() as usize;
    let upper_index = index.ceil() as usize;

    if lower_index == upper_index {
        Ok(sorted_data[lower_index])
    } else {
        let weight = index - lower_index as f64;
        Ok(sorted_data[lower_index] * (1.0 - weight) + sorted_data[upper_index] * weight)
    }
}

/// Percentile of unsorted data; NaN anywhere in the input yields NaN
pub fn percentile_unsorted(data: &[f64], p: f64) -> Result<f64> {
    if data.iter().any(|v| v.is_nan()) {
        percentile(data, p)?;
        return Ok(f64::NAN);
    }
    percentile(&sorted(data), p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[4.0, 3.0]), 3.5);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_percentile() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(percentile(&data, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&data, 50.0).unwrap(), 3.0);
        assert_eq!(percentile(&data, 100.0).unwrap(), 5.0);
        assert!((percentile(&data, 97.5).unwrap() - 4.9).abs() < 1e-12);
        assert!((percentile(&data, 2.5).unwrap() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_errors() {
        assert!(percentile(&[], 50.0).is_err());
        assert!(percentile(&[1.0], 101.0).is_err());
        assert!(percentile(&[1.0], -0.5).is_err());
    }

    #[test]
    fn test_percentile_unsorted() {
        assert_eq!(percentile_unsorted(&[4.0, 1.0, 3.0, 2.0], 50.0).unwrap(), 2.5);
        assert!(percentile_unsorted(&[1.0, f64::NAN], 50.0).unwrap().is_nan());
    }
}
