use crate::error::{ErrorCode, PivotError, Result};
use crate::output::OutputFormat;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

pub const ENV_LOG_LEVEL: &str = "CSV_PIVOT_LOG_LEVEL";
pub const ENV_MAX_PARALLEL: &str = "CSV_PIVOT_MAX_PARALLEL";
pub const ENV_PAD: &str = "CSV_PIVOT_PAD";

/// Get the directory holding the user's csv-pivot configuration
pub fn get_global_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "csv-pivot", "csv-pivot")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PivotError::config("Could not determine home directory"))
}

/// Settings for the command line tool
///
/// The transform itself has no settings; these only steer the harness
/// around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PivotConfig {
    /// tracing filter used when no `-v` flag is given
    pub log_level: Option<String>,
    /// Upper bound on concurrently running map or reduce tasks
    pub max_parallel: usize,
    /// Pad every output line to the input row count
    pub pad_to_row_count: bool,
    pub output_format: OutputFormat,
    /// Print mapper output and groups before the result
    pub show_intermediate: bool,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            max_parallel: 4,
            pad_to_row_count: false,
            output_format: OutputFormat::Csv,
            show_intermediate: false,
        }
    }
}

impl PivotConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(log_level);
        }

        if let Some(raw) = lookup(ENV_MAX_PARALLEL) {
            self.max_parallel = raw.trim().parse().map_err(|_| {
                PivotError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("{} must be a positive integer, got '{}'", ENV_MAX_PARALLEL, raw),
                    None,
                )
            })?;
        }

        if let Some(raw) = lookup(ENV_PAD) {
            self.pad_to_row_count = raw.trim().parse().map_err(|_| {
                PivotError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("{} must be true or false, got '{}'", ENV_PAD, raw),
                    None,
                )
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_parallel == 0 {
            return Err(PivotError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "max_parallel must be at least 1",
                None,
            ));
        }
        Ok(())
    }
}
