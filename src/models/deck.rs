//! Deck summaries from the user's deck list

use serde::Serialize;

/// A deck as listed by `list-user-decks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckSummary {
    pub id: String,
    pub name: String,
    pub vocabulary_count: i64,
    pub word_count: i64,
    /// Percent of vocabulary known
    pub known_coverage: f64,
    /// Percent of vocabulary being learned
    pub in_progress_coverage: f64,
    pub is_built_in: bool,
}

impl DeckSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vocabulary_count: 0,
            word_count: 0,
            known_coverage: 0.0,
            in_progress_coverage: 0.0,
            is_built_in: false,
        }
    }
}
