//! Export module for jpdb-export
//!
//! Writes filtered vocabulary as an Anki-importable CSV file.

pub mod csv;

pub use self::csv::{export_anki_csv, sort_for_export, write_anki_csv};
