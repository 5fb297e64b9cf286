//! Configuration management for resamplrs
//!
//! This module provides the resampling parameter surface as a serializable
//! configuration with support for:
//! - Environment variables
//! - YAML/TOML configuration files
//! - Configuration validation
//!
//! The statistic function and group levels are runtime arguments and are not
//! part of the configuration.

use std::fmt::Debug;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;
use crate::stats::resampling::{ResamplingEngine, ResamplingMethod};
use crate::stats::statistic::Statistic;
use crate::stats::{ConfidenceEstimate, HypothesisResult};

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleConfig {
    /// Resampling strategy (bootstrap, permutation)
    pub method: ResamplingMethod,
    /// Number of resamples (R)
    pub replicates: usize,
    /// Alpha level for confidence intervals
    pub alpha_level: f64,
    /// Random seed for reproducibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Numeric column the statistic is computed on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
    /// Categorical column holding the group levels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_column: Option<String>,
    /// Keep every resampled column in hypothesis results
    pub keep_resampled_table: bool,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (off, error, warn, info, debug, trace)
    pub level: String,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            method: ResamplingMethod::Bootstrap,
            replicates: 10_000,
            alpha_level: 0.05,
            seed: None,
            target_column: None,
            group_column: None,
            keep_resampled_table: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter for the host application's logger
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level.parse::<log::LevelFilter>().map_err(|_| {
            Error::ConfigurationError(format!("Invalid log level '{}'", self.level))
        })
    }
}

impl ResampleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        loader::load_from_env()
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        loader::load_from_yaml(yaml)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        loader::load_from_toml(toml)
    }

    /// Load configuration with precedence: defaults -> file -> env
    pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self> {
        loader::load_with_precedence(config_file)
    }

    /// Validate configuration and return errors if invalid
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        loader::save_to_file(self, path.as_ref())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to YAML: {}", e))
        })
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to TOML: {}", e))
        })
    }

    /// Build an engine from the validated configuration
    pub fn engine(&self) -> Result<ResamplingEngine> {
        ResamplingEngine::from_config(self)
    }

    /// Target and group column names; both must be configured
    pub fn columns(&self) -> Result<(&str, &str)> {
        let target = self.target_column.as_deref().ok_or_else(|| {
            Error::ConfigurationError("target_column is not configured".to_string())
        })?;
        let group = self.group_column.as_deref().ok_or_else(|| {
            Error::ConfigurationError("group_column is not configured".to_string())
        })?;
        Ok((target, group))
    }

    /// Run a two-group test with the configured columns, strategy and R
    pub fn run_hypothesis<L, S>(
        &self,
        df: &DataFrame,
        level1: &L,
        level2: &L,
        func: &S,
    ) -> Result<HypothesisResult<L>>
    where
        L: 'static + Debug + Clone + PartialEq + Send + Sync,
        S: Statistic + ?Sized,
    {
        let (target, group) = self.columns()?;
        self.engine()?
            .run_hypothesis(df, target, group, level1, level2, self.replicates, func)
    }

    /// Estimate a confidence interval with the configured columns, R and alpha
    pub fn estimate_ci<L, S>(&self, df: &DataFrame, level: &L, func: &S) -> Result<ConfidenceEstimate>
    where
        L: 'static + Debug + Clone + PartialEq + Send + Sync,
        S: Statistic + ?Sized,
    {
        let (target, group) = self.columns()?;
        self.engine()?.estimate_ci(
            df,
            target,
            group,
            level,
            self.replicates,
            func,
            self.alpha_level,
        )
    }

    /// Merge another configuration into this one
    ///
    /// Fields of `other` that differ from the defaults win.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.method != defaults.method {
            self.method = other.method;
        }
        if other.replicates != defaults.replicates {
            self.replicates = other.replicates;
        }
        if other.alpha_level != defaults.alpha_level {
            self.alpha_level = other.alpha_level;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.target_column.is_some() {
            self.target_column = other.target_column.clone();
        }
        if other.group_column.is_some() {
            self.group_column = other.group_column.clone();
        }
        if other.keep_resampled_table != defaults.keep_resampled_table {
            self.keep_resampled_table = other.keep_resampled_table;
        }
        if other.logging.level != defaults.logging.level {
            self.logging.level = other.logging.level.clone();
        }
    }
}
