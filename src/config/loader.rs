//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reconciliation
//! thresholds from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::ReconcileConfig;

/// Loads and provides access to the reconciliation configuration.
///
/// The `ConfigLoader` reads a single YAML file holding the attendance
/// thresholds and leave quota, and validates it before the engine uses it.
///
/// # Example
///
/// ```no_run
/// use reconcile_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reconciliation.yaml").unwrap();
/// println!("Full-day threshold: {} hours", loader.config().full_day_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReconcileConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/reconciliation.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The thresholds are inconsistent
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reconcile_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/reconciliation.yaml")?;
    /// # Ok::<(), reconcile_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ReconcileConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&config, &path_str)?;

        Ok(Self { config })
    }

    /// Creates a loader holding the built-in default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ReconcileConfig::default(),
        }
    }

    /// Validates threshold consistency.
    fn validate(config: &ReconcileConfig, path: &str) -> EngineResult<()> {
        if config.half_day_threshold <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "half_day_threshold must be positive".to_string(),
            });
        }
        if config.full_day_threshold < config.half_day_threshold {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "full_day_threshold {} is below half_day_threshold {}",
                    config.full_day_threshold, config.half_day_threshold
                ),
            });
        }
        if config.nominal_day_hours <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "nominal_day_hours must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }
}
