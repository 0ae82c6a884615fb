//! Configuration module for jpdb-export
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Preset persistence (API key, deck, mode, filter values)

pub mod paths;
pub mod settings;

pub use paths::ExportPaths;
pub use settings::{FilterPresets, RetrySettings, Settings};
