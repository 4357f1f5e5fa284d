// ABOUTME: Shared types and configuration for splitpane.
// ABOUTME: Defines pane constraints, config file handling, and saved layouts.

pub mod config;
mod files;
pub mod pane;
pub mod store;

pub use config::{Config, ConfigError, DEFAULT_PRECISION};
pub use pane::{ConstraintError, PaneConstraints, PaneId};
pub use store::{LayoutStore, SavedGroup, SavedPaneSize, StorageError};
