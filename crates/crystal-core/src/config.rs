//! Configuration for Crystal OSINT.
//!
//! Settings live in `~/.crystal/config.yaml`. Every section is optional and
//! falls back to its defaults, so an empty file is a valid configuration.
//!
//! ```yaml
//! alerts:
//!   enter_delay_ms: 10
//!   exit_window_ms: 300
//!   default_duration_ms: 4000
//!   animation_ms: 300
//! search:
//!   delay_ms: 5000
//! dashboard:
//!   max_fps: 60
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CrystalError, Result};
use crate::logging::crystal_home;

/// Config file path (`~/.crystal/config.yaml`).
pub fn config_path() -> Result<PathBuf> {
    Ok(crystal_home()?.join("config.yaml"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrystalConfig {
    /// Notification timing
    #[serde(default)]
    pub alerts: AlertConfig,

    /// Mock search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// Render loop settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Notification lifecycle timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Delay between insertion and the enter transition
    pub enter_delay_ms: u64,
    /// Time an exiting alert stays in the collection before deletion
    pub exit_window_ms: u64,
    /// Auto-dismiss delay used when the caller does not pick one (0 = sticky)
    pub default_duration_ms: u64,
    /// Length of the slide animation drawn by the renderer
    pub animation_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            exit_window_ms: 300,
            default_duration_ms: 4000,
            animation_ms: 300,
        }
    }
}

impl AlertConfig {
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn exit_window(&self) -> Duration {
        Duration::from_millis(self.exit_window_ms)
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

/// Mock search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Simulated latency before mock results arrive
    pub delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { delay_ms: 5000 }
    }
}

impl SearchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Render loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Upper bound on redraws per second
    pub max_fps: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { max_fps: 60 }
    }
}

impl DashboardConfig {
    /// Duration of one frame at `max_fps`.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.max_fps.max(1)))
    }
}

impl CrystalConfig {
    /// Load configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "config file does not exist, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CrystalError::ConfigNotFound {
                    path: path.to_path_buf(),
                    source: Some(e),
                }
            } else {
                CrystalError::io("reading config", path, e)
            }
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            CrystalError::ConfigInvalid { message, .. } => CrystalError::config_invalid(path, message),
            other => other,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| CrystalError::config_invalid("<inline>", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.alerts.exit_window_ms == 0 {
            return Err(CrystalError::config_validation(
                "alerts.exit_window_ms must be > 0",
            ));
        }

        if self.alerts.enter_delay_ms >= 1000 {
            return Err(CrystalError::config_validation(format!(
                "alerts.enter_delay_ms must be < 1000, got {}",
                self.alerts.enter_delay_ms
            )));
        }

        if self.alerts.animation_ms > 2000 {
            return Err(CrystalError::config_validation(format!(
                "alerts.animation_ms must be <= 2000, got {}",
                self.alerts.animation_ms
            )));
        }

        if self.dashboard.max_fps == 0 || self.dashboard.max_fps > 120 {
            return Err(CrystalError::config_validation(format!(
                "dashboard.max_fps must be between 1 and 120, got {}",
                self.dashboard.max_fps
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CrystalConfig::default();
        assert_eq!(config.alerts.enter_delay(), Duration::from_millis(10));
        assert_eq!(config.alerts.exit_window(), Duration::from_millis(300));
        assert_eq!(config.alerts.default_duration(), Duration::from_millis(4000));
        assert_eq!(config.search.delay(), Duration::from_secs(5));
        assert_eq!(config.dashboard.frame_duration(), Duration::from_millis(16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(CrystalConfig::parse("").unwrap(), CrystalConfig::default());
        assert_eq!(CrystalConfig::parse("  \n").unwrap(), CrystalConfig::default());
    }

    #[test]
    fn test_parse_partial_section() {
        let config = CrystalConfig::parse("alerts:\n  default_duration_ms: 0\n").unwrap();
        assert_eq!(config.alerts.default_duration_ms, 0);
        assert_eq!(config.alerts.exit_window_ms, 300);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        let err = CrystalConfig::parse("alerts: [1, 2").unwrap_err();
        assert!(matches!(err, CrystalError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_validation_errors() {
        let err = CrystalConfig::parse("dashboard:\n  max_fps: 0\n").unwrap_err();
        assert!(err.to_string().contains("max_fps"));

        let err = CrystalConfig::parse("alerts:\n  exit_window_ms: 0\n").unwrap_err();
        assert!(err.to_string().contains("exit_window_ms"));

        let err = CrystalConfig::parse("alerts:\n  animation_ms: 5000\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search:\n  delay_ms: 250").unwrap();

        let config = CrystalConfig::load_from(file.path()).unwrap();
        assert_eq!(config.search.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_from_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alerts: [").unwrap();

        let err = CrystalConfig::load_from(file.path()).unwrap_err();
        match err {
            CrystalError::ConfigInvalid { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CrystalConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, CrystalError::ConfigNotFound { .. }));
    }
}
