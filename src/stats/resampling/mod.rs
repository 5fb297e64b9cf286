//! Resampling engine
//!
//! One engine serves both strategies. A hypothesis run restricts the dataset
//! to two levels, resamples the pooled target column `R` times while every row
//! position keeps its original label, and records the difference of the
//! statistic between the two levels for each resample. Interval estimation
//! bootstraps a single level and records the statistic itself.
//!
//! Only the per-resample scalar is accumulated; the full resampled table is
//! kept only when asked for with [`ResamplingEngine::with_resampled_table`].

pub mod method;
pub mod table;

use std::fmt::Debug;

use log::{debug, info, warn};

use crate::config::ResampleConfig;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::groupby::GroupSplitter;
use crate::stats::inference;
use crate::stats::sampling::{Resample, RngResampler};
use crate::stats::statistic::{reduce, Statistic};
use crate::stats::{ConfidenceEstimate, HypothesisResult};

pub use method::ResamplingMethod;
pub use table::ResampledTable;

/// Bootstrap / permutation engine
#[derive(Debug, Clone)]
pub struct ResamplingEngine {
    method: ResamplingMethod,
    seed: Option<u64>,
    keep_resampled_table: bool,
}

impl ResamplingEngine {
    /// Create an engine for the given strategy
    pub fn new(method: ResamplingMethod) -> Self {
        ResamplingEngine {
            method,
            seed: None,
            keep_resampled_table: false,
        }
    }

    /// Create an engine from a strategy name (`"bootstrap"` or `"permutation"`)
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Create an engine from a validated configuration
    pub fn from_config(config: &ResampleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.method)
            .with_seed(config.seed)
            .with_resampled_table(config.keep_resampled_table))
    }

    /// Seed the internal generator; `None` draws fresh entropy per call
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Keep every resampled column in the hypothesis result
    pub fn with_resampled_table(mut self, keep: bool) -> Self {
        self.keep_resampled_table = keep;
        self
    }

    pub fn method(&self) -> ResamplingMethod {
        self.method
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Two-group test of `level1` against `level2`
    ///
    /// The p-value is one-sided: the share of resampled differences that are
    /// greater than or equal to the observed `func(level1) - func(level2)`.
    ///
    /// # Example
    /// ```
    /// use resamplrs::stats::resampling::{ResamplingEngine, ResamplingMethod};
    /// use resamplrs::stats::statistic::Mean;
    /// use resamplrs::{DataFrame, Series};
    ///
    /// let mut df = DataFrame::new();
    /// df.add_column("value".to_string(), Series::new(vec![4.0, 3.0, 7.0, 5.0], None).unwrap()).unwrap();
    /// df.add_column("level".to_string(), Series::new(vec!["A", "A", "B", "B"], None).unwrap()).unwrap();
    ///
    /// let engine = ResamplingEngine::new(ResamplingMethod::Permutation).with_seed(Some(42));
    /// let result = engine.run_hypothesis(&df, "value", "level", &"A", &"B", 1000, &Mean).unwrap();
    /// assert_eq!(result.observed, -2.5);
    /// assert_eq!(result.distribution.len(), 1000);
    /// ```
    pub fn run_hypothesis<L, S>(
        &self,
        df: &DataFrame,
        target_column: &str,
        group_column: &str,
        level1: &L,
        level2: &L,
        replicates: usize,
        func: &S,
    ) -> Result<HypothesisResult<L>>
    where
        L: 'static + Debug + Clone + PartialEq + Send + Sync,
        S: Statistic + ?Sized,
    {
        let mut resampler = RngResampler::from_seed(self.seed);
        self.run_hypothesis_with(
            &mut resampler,
            df,
            target_column,
            group_column,
            level1,
            level2,
            replicates,
            func,
        )
    }

    /// Same as [`run_hypothesis`](Self::run_hypothesis), drawing from `resampler`
    pub fn run_hypothesis_with<L, S, R>(
        &self,
        resampler: &mut R,
        df: &DataFrame,
        target_column: &str,
        group_column: &str,
        level1: &L,
        level2: &L,
        replicates: usize,
        func: &S,
    ) -> Result<HypothesisResult<L>>
    where
        L: 'static + Debug + Clone + PartialEq + Send + Sync,
        S: Statistic + ?Sized,
        R: Resample + ?Sized,
    {
        validate_replicates(replicates)?;

        let splitter = GroupSplitter::<L>::new(df, group_column)?;
        let layout = splitter.two_group_layout(level1, level2)?;
        let target = df.get_column_numeric_values(target_column)?;
        let values: Vec<f64> = layout.rows.iter().map(|&row| target[row]).collect();

        let observed = group_difference(&values, &layout.first, &layout.second, func);
        debug!(
            "{} test of {:?} vs {:?} on '{}': {} rows, {} replicates, statistic {}",
            self.method,
            level1,
            level2,
            target_column,
            values.len(),
            replicates,
            func.name()
        );

        let mut table = if self.keep_resampled_table {
            Some(ResampledTable::new(
                group_column.to_string(),
                layout.labels.clone(),
                replicates,
            ))
        } else {
            None
        };

        let replace = self.method.replace();
        let mut distribution = Vec::with_capacity(replicates);
        for _ in 0..replicates {
            let sample = resampler.resample(&values, replace, values.len())?;
            distribution.push(group_difference(&sample, &layout.first, &layout.second, func));
            if let Some(table) = table.as_mut() {
                table.push(sample);
            }
        }

        warn_on_nan(&distribution);
        let p_value = inference::one_sided_p_value(&distribution, observed)?;
        info!(
            "observed difference of {}: {}, p-value: {}",
            func.name(),
            observed,
            p_value
        );

        Ok(HypothesisResult {
            method: self.method,
            statistic: func.name().to_string(),
            observed,
            distribution,
            p_value,
            resampled: table,
        })
    }

    /// Bootstrap percentile interval of `func` for one level
    ///
    /// Fails with `UnsupportedOperation` on a permutation engine: shuffling a
    /// single group's own values carries no information about sampling
    /// variability.
    pub fn estimate_ci<L, S>(
        &self,
        df: &DataFrame,
        target_column: &str,
        group_column: &str,
        level: &L,
        replicates: usize,
        func: &S,
        alpha_level: f64,
    ) -> Result<ConfidenceEstimate>
    where
        L: 'static + Debug + Clone + PartialEq + Send + Sync,
        S: Statistic + ?Sized,
    {
        let mut resampler = RngResampler::from_seed(self.seed);
        self.estimate_ci_with(
            &mut resampler,
            df,
            target_column,
            group_column,
            level,
            replicates,
            func,
            alpha_level,
        )
    }

    /// Same as [`estimate_ci`](Self::estimate_ci), drawing from `resampler`
    pub fn estimate_ci_with<L, S, R>(
        &self,
        resampler: &mut R,
        df: &DataFrame,
        target_column: &str,
        group_column: &str,
        level: &L,
        replicates: usize,
        func: &S,
        alpha_level: f64,
    ) -> Result<ConfidenceEstimate>
    where
        L: 'static + Debug + Clone + PartialEq + Send + Sync,
        S: Statistic + ?Sized,
        R: Resample + ?Sized,
    {
        self.check_interval_args(replicates, alpha_level)?;

        let rows = GroupSplitter::<L>::new(df, group_column)?.filter_one_group(level)?;
        let target = df.get_column_numeric_values(target_column)?;
        let values: Vec<f64> = rows.iter().map(|&row| target[row]).collect();

        debug!(
            "bootstrap interval of {} for {:?} on '{}': {} rows, {} replicates",
            func.name(),
            level,
            target_column,
            values.len(),
            replicates
        );
        self.interval_from_values(resampler, &values, replicates, func, alpha_level)
    }

    /// Bootstrap percentile interval over every row of `target_column`
    ///
    /// For datasets that hold a single level and therefore carry no grouping
    /// column; every row is treated as belonging to one dummy level.
    pub fn estimate_ci_ungrouped<S>(
        &self,
        df: &DataFrame,
        target_column: &str,
        replicates: usize,
        func: &S,
        alpha_level: f64,
    ) -> Result<ConfidenceEstimate>
    where
        S: Statistic + ?Sized,
    {
        self.check_interval_args(replicates, alpha_level)?;

        let values = df.get_column_numeric_values(target_column)?;
        if values.is_empty() {
            return Err(Error::EmptyGroup {
                column: target_column.to_string(),
                label: "<all rows>".to_string(),
            });
        }

        let mut resampler = RngResampler::from_seed(self.seed);
        self.interval_from_values(&mut resampler, &values, replicates, func, alpha_level)
    }

    fn check_interval_args(&self, replicates: usize, alpha_level: f64) -> Result<()> {
        if self.method != ResamplingMethod::Bootstrap {
            return Err(Error::UnsupportedOperation(format!(
                "confidence intervals can only be estimated with the bootstrap method, not {}",
                self.method
            )));
        }
        validate_replicates(replicates)?;
        inference::validate_alpha(alpha_level)
    }

    fn interval_from_values<S, R>(
        &self,
        resampler: &mut R,
        values: &[f64],
        replicates: usize,
        func: &S,
        alpha_level: f64,
    ) -> Result<ConfidenceEstimate>
    where
        S: Statistic + ?Sized,
        R: Resample + ?Sized,
    {
        let mut distribution = Vec::with_capacity(replicates);
        for _ in 0..replicates {
            let sample = resampler.resample(values, true, values.len())?;
            distribution.push(reduce(&sample, func));
        }

        warn_on_nan(&distribution);
        let interval = inference::percentile_interval(&distribution, alpha_level)?;
        info!("bootstrap {} interval: {}", func.name(), interval);

        Ok(ConfidenceEstimate {
            statistic: func.name().to_string(),
            distribution,
            interval,
        })
    }
}

/// Check that at least one resample is requested
pub fn validate_replicates(replicates: usize) -> Result<()> {
    if replicates == 0 {
        return Err(Error::InvalidArgument(
            "number of resamples must be at least 1".into(),
        ));
    }
    Ok(())
}

// func(first positions) - func(second positions) over one (re)sample
fn group_difference<S: Statistic + ?Sized>(
    sample: &[f64],
    first: &[usize],
    second: &[usize],
    func: &S,
) -> f64 {
    let group1: Vec<f64> = first.iter().map(|&i| sample[i]).collect();
    let group2: Vec<f64> = second.iter().map(|&i| sample[i]).collect();
    reduce(&group1, func) - reduce(&group2, func)
}

fn warn_on_nan(distribution: &[f64]) {
    let nan_count = distribution.iter().filter(|v| v.is_nan()).count();
    if nan_count > 0 {
        warn!(
            "{} of {} resampled statistics are NaN",
            nan_count,
            distribution.len()
        );
    }
}
