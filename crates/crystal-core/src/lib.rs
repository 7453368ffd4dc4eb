//! # crystal-core
//!
//! Shared errors, configuration and logging for Crystal OSINT.
//!
//! This crate provides:
//! - [`CrystalError`] - error type for fallible operations
//! - [`config`] - YAML configuration with defaults and validation
//! - [`logging`] - tracing setup
//!
//! ## Example
//!
//! ```no_run
//! use crystal_core::{CrystalConfig, logging::{self, LogOptions}};
//!
//! fn main() -> crystal_core::Result<()> {
//!     let _guard = logging::init_logging(LogOptions::default())?;
//!     let config = CrystalConfig::load()?;
//!     tracing::info!(delay_ms = config.search.delay_ms, "configured");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AlertConfig, CrystalConfig, DashboardConfig, SearchConfig};
pub use error::{CrystalError, Result};
pub use logging::{init_logging, LogGuard, LogOptions};
