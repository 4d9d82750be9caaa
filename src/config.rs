//! Optional TOML configuration shared by both tools.
//!
//! Every field has a default, so a missing or partial file is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};
use crate::simulation::{DEFAULT_MAX_DAYS, GoalSimulator};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Limits for the goal search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulated days after which a goal candidate is reported as diverging.
    #[serde(default = "default_max_days")]
    pub max_days: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
        }
    }
}

/// Size of the text weight chart, in character cells.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: usize,

    #[serde(default = "default_chart_height")]
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing level; `RUST_LOG` still takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_max_days() -> u64 {
    DEFAULT_MAX_DAYS
}

fn default_chart_width() -> usize {
    60
}

fn default_chart_height() -> usize {
    15
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_days == 0 {
            return Err(EstimatorError::InvalidParameters(
                "simulation.max_days must be greater than 0".to_string(),
            ));
        }
        if self.chart.width < 2 || self.chart.height < 2 {
            return Err(EstimatorError::InvalidParameters(format!(
                "chart must be at least 2x2 cells, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        Ok(())
    }

    /// Goal simulator honoring the configured day ceiling.
    pub fn goal_simulator(&self) -> GoalSimulator {
        GoalSimulator::with_max_days(self.simulation.max_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.max_days, DEFAULT_MAX_DAYS);
        assert_eq!(config.chart.width, 60);
        assert_eq!(config.chart.height, 15);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("[chart]\nwidth = 80\n").unwrap();
        assert_eq!(config.chart.width, 80);
        assert_eq!(config.chart.height, 15);
        assert_eq!(config.simulation.max_days, DEFAULT_MAX_DAYS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::from_toml("[simulation]\nmax_days = 0\n"),
            Err(EstimatorError::InvalidParameters(_))
        ));
        assert!(matches!(
            Config::from_toml("[chart]\nheight = 1\n"),
            Err(EstimatorError::InvalidParameters(_))
        ));
        assert!(matches!(
            Config::from_toml("[chart]\nwidth = \"wide\"\n"),
            Err(EstimatorError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nmax_days = 365\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.goal_simulator().max_days(), 365);
        assert_eq!(config.logging.level, "debug");
    }
}
