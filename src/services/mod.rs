//! Service layer for jpdb-export
//!
//! Deck selection, vocabulary retrieval and filtering on top of the API
//! client, and the export run that strings them together.

pub mod deck;
pub mod export;
pub mod filter;
pub mod vocabulary;

pub use deck::resolve_deck;
pub use export::{run_export, ExportOutcome};
pub use filter::{apply_filters, FilterEngine, Rejection};
pub use vocabulary::{VocabularyFetcher, LOOKUP_BATCH_SIZE};
