// ABOUTME: Shared configuration for pane-grid.
// ABOUTME: Defines grid settings and config file handling.

pub mod config;

pub use config::{ConfigError, GridConfig};
