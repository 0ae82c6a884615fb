//! jpdb-export - jpdb.io deck vocabulary to Anki CSV
//!
//! Fetches the vocabulary of a jpdb.io deck together with per-word occurrence
//! counts and card metadata, filters it, orders it by occurrence count and
//! writes a three-column CSV that Anki can import.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `api`: jpdb HTTP transport, retry policy and response decoding
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Vocabulary records, decks and filter options
//! - `services`: Deck selection, vocabulary retrieval, filtering, the export run
//! - `export`: CSV writing
//! - `setup`: Prompts and option resolution
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use jpdb_export::config::{ExportPaths, Settings};
//!
//! let paths = ExportPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod setup;

pub use error::{ExportError, ExportResult};
