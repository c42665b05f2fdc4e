//! Configuration file loading.
//!
//! ```toml
//! [solver]
//! threshold = 0.01
//! max_iterations = 500
//! ```
//!
//! Every key is optional; missing keys and a missing `[solver]` table fall
//! back to the library defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use yieldline_bonds::{YieldSolver, YieldSolverConfig};

use crate::error::{CliError, CliResult};

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Yield solver settings.
    #[serde(default)]
    pub solver: YieldSolverConfig,
}

impl CliConfig {
    /// Parses TOML text; `path` is used for error messages only.
    pub fn from_toml(text: &str, path: &Path) -> CliResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CliError::config(path, e.message().to_string()))?;
        config.validate(path)?;
        Ok(config)
    }

    /// Returns a solver built from these settings.
    pub fn solver(&self) -> YieldSolver {
        YieldSolver::with_config(self.solver)
    }

    fn validate(&self, path: &Path) -> CliResult<()> {
        let solver = &self.solver;
        if solver.threshold.is_nan() || solver.threshold <= 0.0 {
            return Err(CliError::config(
                path,
                format!("solver.threshold must be positive, got {}", solver.threshold),
            ));
        }
        if solver.lower.is_nan() || solver.upper.is_nan() || solver.lower >= solver.upper {
            return Err(CliError::config(
                path,
                format!(
                    "solver.lower ({}) must be below solver.upper ({})",
                    solver.lower, solver.upper
                ),
            ));
        }
        if solver.max_iterations == 0 {
            return Err(CliError::config(path, "solver.max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Loads the configuration file if one was given.
pub fn load(path: Option<&Path>) -> CliResult<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };

    let text = fs::read_to_string(path)?;
    let config = CliConfig::from_toml(&text, path)?;
    debug!(path = %path.display(), ?config, "loaded configuration");

    Ok(config)
}
