//! Core data models for jpdb-export
//!
//! Decks, vocabulary records and their loosely-typed fields, the filter
//! configuration and the API key.

pub mod api_key;
pub mod deck;
pub mod field;
pub mod filter;
pub mod ids;
pub mod vocabulary;

pub use api_key::ApiKey;
pub use deck::DeckSummary;
pub use field::{CardState, Meanings, Numeric};
pub use filter::{ExportMode, FilterConfig};
pub use ids::{SenseId, VocabId};
pub use vocabulary::{DeckEntry, ExportRow, VocabularyRecord};
