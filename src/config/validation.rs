//! Configuration validation utilities
//!
//! Checks the resampling parameters before an engine is built from them.
//! Out-of-range replicates and alpha fail with the same `InvalidArgument`
//! the engine reports for direct calls; the rest is a `ConfigurationError`.

use super::*;
use crate::core::error::{Error, Result};
use crate::stats::inference::validate_alpha;
use crate::stats::resampling::validate_replicates;

/// Validate the entire configuration
pub fn validate_config(config: &ResampleConfig) -> Result<()> {
    validate_replicates(config.replicates)?;
    validate_alpha(config.alpha_level)?;
    validate_column_name(config.target_column.as_deref(), "target_column")?;
    validate_column_name(config.group_column.as_deref(), "group_column")?;
    validate_logging_config(&config.logging)?;

    if let (Some(target), Some(group)) = (&config.target_column, &config.group_column) {
        if target == group {
            return Err(Error::ConfigurationError(format!(
                "target_column and group_column must differ, both are '{}'",
                target
            )));
        }
    }

    if config.replicates > 1_000_000 {
        log::warn!(
            "{} replicates is very high; every run keeps one value per replicate",
            config.replicates
        );
    }

    Ok(())
}

fn validate_column_name(name: Option<&str>, context: &str) -> Result<()> {
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(Error::ConfigurationError(format!(
                "{} must not be empty",
                context
            )));
        }
    }
    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let valid_levels = ["off", "error", "warn", "info", "debug", "trace"];

    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(Error::ConfigurationError(format!(
            "Invalid log level '{}'. Valid levels: {}",
            config.level,
            valid_levels.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_errors_match_engine() {
        let mut config = ResampleConfig::default();
        config.replicates = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::InvalidArgument(_))
        ));

        config.replicates = 1;
        for alpha in [0.0, 1.0, f64::NAN] {
            config.alpha_level = alpha;
            assert!(matches!(
                validate_config(&config),
                Err(Error::InvalidArgument(_))
            ));
        }

        config.alpha_level = 0.05;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_columns() {
        let mut config = ResampleConfig::default();
        config.target_column = Some(" ".to_string());
        assert!(validate_config(&config).is_err());

        config.target_column = Some("dose".to_string());
        config.group_column = Some("dose".to_string());
        assert!(validate_config(&config).is_err());

        config.target_column = Some("weight".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_logging_config() {
        let mut config = LoggingConfig::default();
        assert!(validate_logging_config(&config).is_ok());

        config.level = "DEBUG".to_string();
        assert!(validate_logging_config(&config).is_ok());

        config.level = "verbose".to_string();
        assert!(validate_logging_config(&config).is_err());
    }
}
