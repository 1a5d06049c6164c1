//! zview - composable terminal UI engine
//!
//! Modules:
//! - core: Key, View, Window, App and the shared Host
//! - ui: surface abstraction, character grid, terminal backends
//! - views: concrete views (lists, text box, splits)
//! - tui: crossterm input mapping and terminal setup/restore
//! - config, logging, error

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;

pub use error::{Error, Result};
