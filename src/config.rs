use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::vector::Vector;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_knots")]
    pub knots: usize,
    #[serde(default)]
    pub start_x: i32,
    #[serde(default)]
    pub start_y: i32,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Side length of the square window drawn after each command
    #[serde(default = "default_render_size")]
    pub size: u32,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

// Default values
fn default_knots() -> usize { 2 }
fn default_input_path() -> PathBuf { PathBuf::from("input.txt") }
fn default_render_size() -> u32 { 6 }
fn default_report_path() -> PathBuf { PathBuf::from("run_report.json") }

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            knots: default_knots(),
            start_x: 0,
            start_y: 0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            size: default_render_size(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_report_path(),
        }
    }
}

impl SimulationConfig {
    pub fn start(&self) -> Vector {
        Vector::new(i64::from(self.start_x), i64::from(self.start_y))
    }
}

impl Config {
    /// Load `config.toml` from the working directory, or use defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        let path = Path::new("config.toml");
        if !path.exists() {
            info!("no config.toml found, using default configuration");
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|e| match e {
            Error::Config { message, .. } => Error::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration text; missing sections and keys take their defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
            path: PathBuf::new(),
            message: e.to_string(),
        })?;
        if config.simulation.knots < 2 {
            warn!(knots = config.simulation.knots, "configured knot count is below 2");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.simulation.knots, 2);
        assert_eq!(config.simulation.start(), Vector::ORIGIN);
        assert_eq!(config.input.path, PathBuf::from("input.txt"));
        assert!(!config.render.enabled);
        assert_eq!(config.render.size, 6);
        assert!(!config.report.enabled);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            "[simulation]\nknots = 10\nstart_y = -3\n\n[render]\nenabled = true\n",
        )
        .unwrap();
        assert_eq!(config.simulation.knots, 10);
        assert_eq!(config.simulation.start(), Vector::new(0, -3));
        assert!(config.render.enabled);
        assert_eq!(config.render.size, 6);
        assert_eq!(config.report.path, PathBuf::from("run_report.json"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.simulation.knots, 2);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            Config::from_toml("[simulation]\nknots = \"many\"\n"),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_start_outside_i32_rejected() {
        assert!(matches!(
            Config::from_toml("[simulation]\nstart_x = 2147483648\n"),
            Err(Error::Config { .. })
        ));
        let config = Config::from_toml("[simulation]\nstart_x = 2147483647\n").unwrap();
        assert_eq!(config.simulation.start(), Vector::new(i32::MAX as i64, 0));
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(matches!(
            Config::load_from(Path::new("/nonexistent/rope_knots/config.toml")),
            Err(Error::Io { .. })
        ));
    }
}
