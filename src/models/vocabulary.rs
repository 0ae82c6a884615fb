//! Vocabulary records
//!
//! `DeckEntry` is what the deck listing returns; `VocabularyRecord` is the
//! entry after the detail lookup. `ExportRow` is the three-column projection
//! written to the CSV file.

use serde::Serialize;

use super::field::{CardState, Meanings, Numeric};
use super::ids::{SenseId, VocabId};

/// One row of a deck listing, before lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    pub vocab_id: Option<VocabId>,
    pub sense_id: Option<SenseId>,
    pub occurrences: Numeric,
}

impl DeckEntry {
    /// The identifier pair, if both halves are present
    pub fn pair(&self) -> Option<(VocabId, SenseId)> {
        Some((self.vocab_id?, self.sense_id?))
    }
}

/// A vocabulary entry with its lookup details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyRecord {
    pub vocab_id: VocabId,
    pub sense_id: SenseId,
    /// Occurrences in the deck, carried over from the listing
    pub occurrences: Numeric,
    pub spelling: Option<String>,
    pub reading: Option<String>,
    pub frequency_rank: Numeric,
    pub meanings: Meanings,
    pub card_level: Numeric,
    pub card_state: CardState,
    /// Epoch seconds
    pub due_at: Numeric,
}

impl VocabularyRecord {
    /// Create a record with every detail field missing
    pub fn new(vocab_id: VocabId, sense_id: SenseId) -> Self {
        Self {
            vocab_id,
            sense_id,
            occurrences: Numeric::Missing,
            spelling: None,
            reading: None,
            frequency_rank: Numeric::Missing,
            meanings: Meanings::Missing,
            card_level: Numeric::Missing,
            card_state: CardState::default(),
            due_at: Numeric::Missing,
        }
    }

    pub fn with_occurrences(mut self, occurrences: impl Into<Numeric>) -> Self {
        self.occurrences = occurrences.into();
        self
    }

    pub fn with_spelling(mut self, spelling: &str, reading: &str) -> Self {
        self.spelling = Some(spelling.to_string());
        self.reading = Some(reading.to_string());
        self
    }

    pub fn with_meanings(mut self, meanings: impl Into<Meanings>) -> Self {
        self.meanings = meanings.into();
        self
    }

    pub fn with_frequency_rank(mut self, rank: impl Into<Numeric>) -> Self {
        self.frequency_rank = rank.into();
        self
    }

    pub fn with_card_level(mut self, level: impl Into<Numeric>) -> Self {
        self.card_level = level.into();
        self
    }

    pub fn with_card_state(mut self, state: CardState) -> Self {
        self.card_state = state;
        self
    }

    pub fn with_due_at(mut self, due_at: impl Into<Numeric>) -> Self {
        self.due_at = due_at.into();
        self
    }

    /// Sort key for the export; missing or unreadable counts as 0
    pub fn occurrence_count(&self) -> i64 {
        self.occurrences.as_int().unwrap_or(0)
    }
}

/// A CSV row: expression, reading, meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Expression")]
    pub expression: String,
    #[serde(rename = "Reading")]
    pub reading: String,
    #[serde(rename = "Meaning")]
    pub meaning: String,
}

impl ExportRow {
    pub const HEADER: [&'static str; 3] = ["Expression", "Reading", "Meaning"];
}

impl From<&VocabularyRecord> for ExportRow {
    fn from(record: &VocabularyRecord) -> Self {
        Self {
            expression: record.spelling.clone().unwrap_or_default(),
            reading: record.reading.clone().unwrap_or_default(),
            meaning: record.meanings.joined(),
        }
    }
}
