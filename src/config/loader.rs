//! Configuration loading utilities
//!
//! This module handles loading configuration from various sources with proper
//! precedence and validation.

use super::*;
use crate::core::error::{Error, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Load configuration from environment variables
///
/// Variables that are not set leave the default in place.
pub fn load_from_env() -> Result<ResampleConfig> {
    let mut config = ResampleConfig::default();
    apply_env(&mut config)?;
    Ok(config)
}

/// Overwrite the fields of `config` whose environment variable is set
pub fn apply_env(config: &mut ResampleConfig) -> Result<()> {
    if let Ok(method) = env::var("RESAMPLRS_METHOD") {
        config.method = method
            .parse()
            .map_err(|e| Error::ConfigurationError(format!("Invalid RESAMPLRS_METHOD: {}", e)))?;
    }

    if let Ok(replicates) = env::var("RESAMPLRS_REPLICATES") {
        config.replicates = replicates.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid RESAMPLRS_REPLICATES: {}", e))
        })?;
    }

    if let Ok(alpha) = env::var("RESAMPLRS_ALPHA") {
        config.alpha_level = alpha
            .parse()
            .map_err(|e| Error::ConfigurationError(format!("Invalid RESAMPLRS_ALPHA: {}", e)))?;
    }

    if let Ok(seed) = env::var("RESAMPLRS_SEED") {
        config.seed = Some(
            seed.parse()
                .map_err(|e| Error::ConfigurationError(format!("Invalid RESAMPLRS_SEED: {}", e)))?,
        );
    }

    if let Ok(target) = env::var("RESAMPLRS_TARGET_COLUMN") {
        config.target_column = Some(target);
    }

    if let Ok(group) = env::var("RESAMPLRS_GROUP_COLUMN") {
        config.group_column = Some(group);
    }

    if let Ok(keep) = env::var("RESAMPLRS_KEEP_TABLE") {
        config.keep_resampled_table = keep.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid RESAMPLRS_KEEP_TABLE: {}", e))
        })?;
    }

    // Logging configuration; RUST_LOG only counts when it is a bare level
    if let Ok(log_level) = env::var("RESAMPLRS_LOG_LEVEL") {
        config.logging.level = log_level;
    } else if let Ok(rust_log) = env::var("RUST_LOG") {
        if rust_log.trim().parse::<log::LevelFilter>().is_ok() {
            config.logging.level = rust_log.trim().to_string();
        } else {
            log::debug!("ignoring RUST_LOG '{}': not a plain log level", rust_log);
        }
    }

    Ok(())
}

/// Load configuration from a file (YAML or TOML based on extension)
pub fn load_from_file(path: &Path) -> Result<ResampleConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => load_from_yaml(&contents).or_else(|_| load_from_toml(&contents)),
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<ResampleConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<ResampleConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file -> environment
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<ResampleConfig> {
    // Fields missing from the file keep their defaults
    let mut config = match config_file {
        Some(file_path) => load_from_file(file_path.as_ref())?,
        None => ResampleConfig::default(),
    };

    // Environment has the highest precedence
    apply_env(&mut config)?;

    config.validate()?;

    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &ResampleConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") => config.to_toml()?,
        Some(ext) => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                ext
            )))
        }
        None => config.to_yaml()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to write config file {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Serializes tests that modify environment variables
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 9] = [
        "RESAMPLRS_METHOD",
        "RESAMPLRS_REPLICATES",
        "RESAMPLRS_ALPHA",
        "RESAMPLRS_SEED",
        "RESAMPLRS_TARGET_COLUMN",
        "RESAMPLRS_GROUP_COLUMN",
        "RESAMPLRS_KEEP_TABLE",
        "RESAMPLRS_LOG_LEVEL",
        "RUST_LOG",
    ];

    fn with_clean_env<F: FnOnce()>(f: F) {
        let _lock = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<(&str, Option<String>)> =
            ENV_VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in ENV_VARS {
            env::remove_var(key);
        }

        f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_load_from_env() {
        with_clean_env(|| {
            env::set_var("RESAMPLRS_METHOD", "permutation");
            env::set_var("RESAMPLRS_REPLICATES", "2500");
            env::set_var("RESAMPLRS_ALPHA", "0.1");
            env::set_var("RESAMPLRS_SEED", "42");
            env::set_var("RESAMPLRS_KEEP_TABLE", "true");
            env::set_var("RESAMPLRS_LOG_LEVEL", "debug");

            let config = load_from_env().unwrap();
            assert_eq!(config.method, ResamplingMethod::Permutation);
            assert_eq!(config.replicates, 2500);
            assert_eq!(config.alpha_level, 0.1);
            assert_eq!(config.seed, Some(42));
            assert!(config.keep_resampled_table);
            assert_eq!(config.logging.level, "debug");
        });
    }

    #[test]
    fn test_invalid_env_value() {
        with_clean_env(|| {
            env::set_var("RESAMPLRS_REPLICATES", "many");
            assert!(matches!(load_from_env(), Err(Error::ConfigurationError(_))));

            env::remove_var("RESAMPLRS_REPLICATES");
            env::set_var("RESAMPLRS_METHOD", "jackknife");
            assert!(matches!(load_from_env(), Err(Error::ConfigurationError(_))));
        });
    }

    #[test]
    fn test_load_from_yaml() {
        let yaml = r#"
method: permutation
replicates: 1000
target_column: weight
group_column: dose
logging:
  level: warn
"#;

        let config = load_from_yaml(yaml).unwrap();
        assert_eq!(config.method, ResamplingMethod::Permutation);
        assert_eq!(config.replicates, 1000);
        assert_eq!(config.alpha_level, 0.05);
        assert_eq!(config.target_column.as_deref(), Some("weight"));
        assert_eq!(config.group_column.as_deref(), Some("dose"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_toml() {
        let toml = r#"
method = "bootstrap"
replicates = 200
alpha_level = 0.01
seed = 7
"#;

        let config = load_from_toml(toml).unwrap();
        assert_eq!(config.method, ResamplingMethod::Bootstrap);
        assert_eq!(config.replicates, 200);
        assert_eq!(config.alpha_level, 0.01);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempdir().unwrap();

        let mut original = ResampleConfig::default();
        original.method = ResamplingMethod::Permutation;
        original.seed = Some(11);
        original.target_column = Some("weight".to_string());
        original.group_column = Some("dose".to_string());

        for name in ["nested/test_config.yml", "test_config.toml"] {
            let path = dir.path().join(name);
            save_to_file(&original, &path).unwrap();
            let loaded = load_from_file(&path).unwrap();
            assert_eq!(original, loaded);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(save_to_file(&ResampleConfig::default(), &path).is_err());

        std::fs::write(&path, "{}").unwrap();
        assert!(load_from_file(&path).is_err());
        assert!(load_from_file(&dir.path().join("missing.yml")).is_err());
    }

    #[test]
    fn test_precedence() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let config_path = dir.path().join("precedence_test.yml");
            std::fs::write(
                &config_path,
                "method: permutation\nreplicates: 300\nalpha_level: 0.1\n",
            )
            .unwrap();

            // Environment overrides the file
            env::set_var("RESAMPLRS_REPLICATES", "50");

            let config = load_with_precedence(Some(&config_path)).unwrap();
            assert_eq!(config.method, ResamplingMethod::Permutation);
            assert_eq!(config.replicates, 50);
            assert_eq!(config.alpha_level, 0.1);
        });
    }

    #[test]
    fn test_env_matching_default_still_overrides_file() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let config_path = dir.path().join("override.yml");
            std::fs::write(&config_path, "method: permutation\nreplicates: 300\n").unwrap();

            env::set_var("RESAMPLRS_METHOD", "bootstrap");
            env::set_var("RESAMPLRS_REPLICATES", "10000");

            let config = load_with_precedence(Some(&config_path)).unwrap();
            assert_eq!(config.method, ResamplingMethod::Bootstrap);
            assert_eq!(config.replicates, 10_000);
        });
    }

    #[test]
    fn test_rust_log_directives_ignored() {
        with_clean_env(|| {
            env::set_var("RUST_LOG", "resamplrs=debug");
            let config = load_with_precedence::<&Path>(None).unwrap();
            assert_eq!(config.logging.level, "info");

            env::set_var("RUST_LOG", "warn");
            let config = load_with_precedence::<&Path>(None).unwrap();
            assert_eq!(config.logging.level, "warn");

            // The crate-specific variable wins over RUST_LOG
            env::set_var("RESAMPLRS_LOG_LEVEL", "trace");
            let config = load_from_env().unwrap();
            assert_eq!(config.logging.level, "trace");
        });
    }

    #[test]
    fn test_precedence_validates() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let config_path = dir.path().join("invalid.toml");
            std::fs::write(&config_path, "alpha_level = 1.5\n").unwrap();

            assert!(load_with_precedence(Some(&config_path)).is_err());
        });
    }
}
