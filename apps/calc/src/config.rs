//! # Configuration
//!
//! TOML configuration for the calc binary.
//!
//! ## Resolution Order
//!
//! 1. `--config <path>` on the command line
//! 2. `CALC_CONFIG` environment variable
//! 3. `calc.toml` in the working directory
//!
//! An explicitly named file (1 or 2) must exist. The default file is
//! optional; when it is absent, built-in defaults apply.
//!
//! ```toml
//! history_size = 100   # records kept, >= 1
//! precision = 4        # decimal places in console output, <= 15
//! recent_count = 0     # records shown by "View History", 0 = all
//! ```

use crate::error::AppError;
use calc_core::{DEFAULT_HISTORY_SIZE, MIN_HISTORY_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "calc.toml";

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "CALC_CONFIG";

/// Largest precision accepted for console output.
pub const MAX_PRECISION: usize = 15;

const DEFAULT_PRECISION: usize = 4;

/// Runtime settings of the calc binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Capacity of the calculation history.
    pub history_size: usize,
    /// Decimal places used when printing numbers.
    pub precision: usize,
    /// Records shown by the console history view; 0 shows all.
    pub recent_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            precision: DEFAULT_PRECISION,
            recent_count: 0,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file that must exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&contents)
    }

    /// Resolve the configuration per the module-level order.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            return Self::load(&path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            tracing::debug!("no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.history_size < MIN_HISTORY_SIZE {
            return Err(AppError::Config(format!(
                "history_size must be at least {}, got {}",
                MIN_HISTORY_SIZE, self.history_size
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(AppError::Config(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
