//! Logging infrastructure for Crystal OSINT.
//!
//! Structured logging using the `tracing` ecosystem.
//!
//! - JSON lines written to `~/.crystal/logs/crystal.log` (daily rolling)
//! - Optional human-readable console output on stderr
//! - `-v` raises the default level to DEBUG
//!
//! The console layer must stay off while the terminal UI owns the screen,
//! otherwise log lines land on top of the rendered frame.
//!
//! ## Example
//!
//! ```no_run
//! use crystal_core::logging::{self, LogOptions};
//!
//! let _guard = logging::init_logging(LogOptions::default()).expect("logging init");
//! tracing::info!("Crystal started");
//! ```

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{CrystalError, Result};

/// Guard that must be held to ensure log flushing on shutdown.
///
/// Keep this guard alive for the lifetime of the application.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Options for [`init_logging`].
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Custom log directory. Defaults to `~/.crystal/logs/`.
    pub log_dir: Option<PathBuf>,
    /// Raise the default level to DEBUG.
    pub verbose: bool,
    /// Also log to stderr.
    pub console: bool,
}

/// Initialize the logging system.
///
/// Returns a [`LogGuard`] that must be held for the application lifetime.
pub fn init_logging(options: LogOptions) -> Result<LogGuard> {
    let log_dir = match options.log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };

    std::fs::create_dir_all(&log_dir).map_err(|e| CrystalError::DirectoryCreation {
        path: log_dir.clone(),
        source: e,
    })?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "crystal.log");
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if options.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("crystal={default_level}")));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_current_span(true)
        .with_span_list(true);

    let console_layer = options.console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
            .with_file(options.verbose)
            .with_line_number(options.verbose)
            .compact()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::debug!(
        log_dir = %log_dir.display(),
        verbose = options.verbose,
        console = options.console,
        "logging initialized"
    );

    Ok(LogGuard {
        _file_guard: Some(file_guard),
    })
}

/// Initialize minimal console-only logging for testing.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Root of per-user Crystal state: `~/.crystal/`.
pub fn crystal_home() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".crystal"))
        .ok_or_else(|| CrystalError::internal("home directory could not be determined"))
}

/// Get the default log directory path (`~/.crystal/logs/`).
pub fn default_log_dir() -> Result<PathBuf> {
    Ok(crystal_home()?.join("logs"))
}

/// Get the default log file path (`~/.crystal/logs/crystal.log`).
pub fn default_log_file() -> Result<PathBuf> {
    Ok(default_log_dir()?.join("crystal.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_log_dir() {
        // SAFETY: serialized with every other test that touches HOME
        unsafe { std::env::set_var("HOME", "/tmp/test-home") };
        let dir = default_log_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/test-home/.crystal/logs"));
    }

    #[test]
    #[serial]
    fn test_default_log_file() {
        // SAFETY: serialized with every other test that touches HOME
        unsafe { std::env::set_var("HOME", "/tmp/test-home") };
        let file = default_log_file().unwrap();
        assert_eq!(
            file,
            PathBuf::from("/tmp/test-home/.crystal/logs/crystal.log")
        );
    }

    #[test]
    fn test_init_test_logging() {
        init_test_logging();
        init_test_logging();
    }
}
