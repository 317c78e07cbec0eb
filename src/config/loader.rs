use super::{get_global_config_dir, PivotConfig};
use crate::error::{common, ErrorExt, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves configuration from file, environment and defaults
///
/// An explicitly named file must exist. Without one, `config.toml` in the
/// user's config directory is used when present.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    skip_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    /// Ignore `CSV_PIVOT_*` environment variables
    pub fn without_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    pub fn load(&self) -> Result<PivotConfig> {
        let mut config = match &self.explicit_path {
            Some(path) => Self::load_file(path)?,
            None => match Self::global_config_path() {
                Some(path) if path.exists() => Self::load_file(&path)?,
                _ => {
                    debug!("No configuration file found, using defaults");
                    PivotConfig::default()
                }
            },
        };

        if !self.skip_env {
            config.merge_env_vars()?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<PivotConfig> {
        if !path.exists() {
            return Err(common::config_not_found(path));
        }

        let content = std::fs::read_to_string(path)
            .to_config_error(format!("Failed to read configuration: {}", path.display()))?;
        let config =
            PivotConfig::from_toml_str(&content).map_err(|e| e.with_context(path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        get_global_config_dir()
            .ok()
            .map(|dir| dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pivot.toml");
        std::fs::write(&path, "max_parallel = 2\noutput_format = \"json\"\n").unwrap();

        let config = ConfigLoader::new()
            .with_path(Some(path))
            .without_env()
            .load()
            .unwrap();
        assert_eq!(config.max_parallel, 2);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigLoader::new()
            .with_path(Some(dir.path().join("absent.toml")))
            .without_env()
            .load()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pivot.toml");
        std::fs::write(&path, "max_parallel = 0\n").unwrap();

        let err = ConfigLoader::new()
            .with_path(Some(path))
            .without_env()
            .load()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "max_parallel = [").unwrap();

        let err = ConfigLoader::load_file(&path).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_unreadable_config_keeps_io_source() {
        use std::error::Error as _;

        let dir = TempDir::new().unwrap();
        let err = ConfigLoader::load_file(dir.path()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_GENERIC);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Failed to read configuration"));
        assert!(err.source().is_some());
    }
}
