//! Terminal UI for Crystal OSINT.
//!
//! This crate provides the Ratatui-based landing page: a module picker, a
//! validated query field, a mock search with a results panel and toast
//! notifications driven by `crystal-alerts`.
//!
//! ## Hotkeys
//!
//! - `Tab` / `Shift+Tab` - Move focus
//! - `Enter` - Open the picker, confirm an entry, or run the search
//! - `s` - Run the search
//! - `x` - Dismiss the newest toast
//! - `↑` / `↓` / `PgUp` / `PgDn` - Move in the picker or scroll results
//! - `Esc` - Close the picker or leave the query field
//! - `q` - Quit
//!
//! Clicking a toast's `✕` dismisses it; moving the mouse shifts the backdrop.

pub mod app;
pub mod event;
pub mod focus;
pub mod module;
pub mod parallax;
pub mod query;
pub mod search;
pub mod theme;
pub mod toast;

pub use app::{App, AppResult};
pub use focus::Focus;
pub use module::OsintModule;
