//! Configuration management for the gratia application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the data
//! directory, which holds the key-value store backing file and the bundled
//! quotes/prompts files.
//!
//! # Environment Variables
//!
//! - `GRATIA_DIR`: Path to the data directory (defaults to ~/.gratia)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, ENV_VAR_GRATIA_DIR, ENV_VAR_HOME, PROMPTS_FILENAME, QUOTES_FILENAME,
    STORE_FILENAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the gratia application.
pub struct Config {
    /// Directory holding the store file and bundled content files.
    ///
    /// Loaded from the GRATIA_DIR environment variable with a fallback to
    /// ~/.gratia if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the path expansion fails.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_GRATIA_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand data directory path: {}", e)))?;

        Ok(Config {
            data_dir: PathBuf::from(expanded.as_ref()),
        })
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or
    /// relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory path cannot be empty".to_string(),
            ));
        }
        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Data directory path must be absolute: {}",
                self.data_dir.display()
            )));
        }
        Ok(())
    }

    /// Path of the key-value store backing file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILENAME)
    }

    /// Path of the bundled quotes file.
    pub fn quotes_path(&self) -> PathBuf {
        self.data_dir.join(QUOTES_FILENAME)
    }

    /// Path of the bundled prompts file.
    pub fn prompts_path(&self) -> PathBuf {
        self.data_dir.join(PROMPTS_FILENAME)
    }
}

/// Ensures the data directory exists, creating it if necessary.
///
/// Newly created directories get owner-only permissions on unix.
///
/// # Errors
///
/// Returns `AppError::Io` if directory creation or permission setting fails.
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            use std::os::unix::fs::PermissionsExt;

            let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = Config {
            data_dir: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_absolute_path() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/gratia-test"),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_paths() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
        };
        assert_eq!(config.store_path(), PathBuf::from("/data/store.json"));
        assert_eq!(config.quotes_path(), PathBuf::from("/data/quotes.json"));
        assert_eq!(config.prompts_path(), PathBuf::from("/data/prompts.json"));
    }

    #[test]
    fn test_debug_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/home/someone/.gratia"),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("someone"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_ensure_data_directory_creates() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("gratia");

        ensure_data_directory_exists(&target).unwrap();
        assert!(target.is_dir());

        // Idempotent on an existing directory.
        ensure_data_directory_exists(&target).unwrap();
    }
}
