//! Configuration management.
//!
//! Resolves the data directory, listing defaults, and the active database
//! driver. The driver is where the search layer gets its SQL dialect from:
//! callers pass `config.database.driver.dialect()` to
//! [`crate::search::build_search`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::search::Dialect;

/// Main configuration for envhub.
#[derive(Debug, Clone)]
pub struct EnvhubConfig {
    /// Path to the data directory.
    pub data_dir: PathBuf,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Maximum number of results per listing page.
    pub max_results: usize,
}

/// Database settings.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Configured driver.
    pub driver: DatabaseDriver,
    /// Driver-specific connection URL.
    pub url: Option<String>,
}

/// Supported database drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatabaseDriver {
    /// `SQLite` file database.
    #[default]
    Sqlite,
    /// PostgreSQL server.
    Postgres,
}

impl DatabaseDriver {
    /// Parses a driver string.
    ///
    /// Unknown drivers fall back to `Postgres`, matching the pattern-syntax
    /// fallback documented on [`Dialect::parse`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match Dialect::parse(s) {
            Dialect::Sqlite => Self::Sqlite,
            Dialect::Postgres => Self::Postgres,
        }
    }

    /// Returns the pattern-syntax dialect for this driver.
    #[must_use]
    pub const fn dialect(self) -> Dialect {
        match self {
            Self::Sqlite => Dialect::Sqlite,
            Self::Postgres => Dialect::Postgres,
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
    /// Max results per page.
    pub max_results: Option<usize>,
    /// Database section.
    pub database: Option<ConfigFileDatabase>,
}

/// Database section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileDatabase {
    /// Driver name.
    pub driver: Option<String>,
    /// Connection URL.
    pub url: Option<String>,
}

impl Default for EnvhubConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".envhub"),
            database: DatabaseConfig::default(),
            max_results: 25,
        }
    }
}

impl EnvhubConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OperationFailed`] if the file cannot be read
    /// and [`crate::Error::InvalidInput`] if it is not valid TOML.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| crate::Error::InvalidInput(format!("config file: {e}")))?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/envhub/` on macOS)
    /// 2. XDG config dir (`~/.config/envhub/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        // Check platform-specific config dir first
        let platform_config = base_dirs.config_dir().join("envhub").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        // Fall back to XDG-style ~/.config/envhub/ for Unix compatibility
        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("envhub")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `EnvhubConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(data_dir) = file.data_dir {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Some(max_results) = file.max_results {
            config.max_results = max_results;
        }
        if let Some(database) = file.database {
            if let Some(driver) = database.driver {
                config.database.driver = DatabaseDriver::parse(&driver);
            }
            config.database.url = database.url;
        }

        config
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = path.into();
        self
    }

    /// Sets the maximum results per page.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}
