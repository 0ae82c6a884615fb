//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod config;
pub mod deck;
pub mod export;

pub use config::{handle_config_command, handle_init_command, render_config};
pub use deck::{connect, handle_decks_command, handle_ping_command};
pub use export::{handle_export_command, ExportArgs};
