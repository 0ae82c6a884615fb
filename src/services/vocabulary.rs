//! Vocabulary retrieval
//!
//! Lists a deck's vocabulary with occurrence counts, then looks up details in
//! fixed-size batches and carries each entry's occurrence count over to its
//! detailed record.

use std::collections::{HashMap, HashSet};

use crate::api::{JpdbClient, Transport};
use crate::error::ExportResult;
use crate::models::{DeckEntry, Numeric, SenseId, VocabId, VocabularyRecord};

/// Identifier pairs per `lookup-vocabulary` request
pub const LOOKUP_BATCH_SIZE: usize = 50;

pub struct VocabularyFetcher<'c, T: Transport> {
    client: &'c JpdbClient<T>,
    batch_size: usize,
}

impl<'c, T: Transport> VocabularyFetcher<'c, T> {
    pub fn new(client: &'c JpdbClient<T>) -> Self {
        Self {
            client,
            batch_size: LOOKUP_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// List the deck's entries in listing order
    pub fn list_entries(&self, deck_id: &str) -> ExportResult<Vec<DeckEntry>> {
        let entries = self.client.list_deck_vocabulary(deck_id)?;
        tracing::info!(deck_id, count = entries.len(), "deck vocabulary listed");
        Ok(entries)
    }

    /// Look up details for `entries`
    ///
    /// Entries missing either id are skipped, as is any pair jpdb reports as
    /// not found. Records come back in batch order. Any failed batch fails
    /// the whole lookup.
    pub fn lookup(&self, entries: &[DeckEntry]) -> ExportResult<Vec<VocabularyRecord>> {
        let mut occurrences: HashMap<VocabId, Numeric> = HashMap::new();
        let mut seen = HashSet::new();
        let mut pairs: Vec<(VocabId, SenseId)> = Vec::new();

        for entry in entries {
            let Some(pair) = entry.pair() else {
                tracing::debug!(?entry, "skipping entry without id pair");
                continue;
            };
            occurrences.insert(pair.0, entry.occurrences.clone());
            if seen.insert(pair) {
                pairs.push(pair);
            }
        }

        let batch_count = pairs.len().div_ceil(self.batch_size);
        let mut records = Vec::with_capacity(pairs.len());

        for (batch_index, batch) in pairs.chunks(self.batch_size).enumerate() {
            tracing::debug!(
                batch = batch_index + 1,
                of = batch_count,
                size = batch.len(),
                "looking up vocabulary batch"
            );
            let rows = self.client.lookup_vocabulary(batch)?;

            for (position, row) in rows.into_iter().enumerate() {
                let Some(details) = row else {
                    continue;
                };
                let Some(&(vocab_id, sense_id)) = batch.get(position) else {
                    tracing::warn!(position, "lookup returned more rows than requested");
                    continue;
                };

                records.push(VocabularyRecord {
                    vocab_id,
                    sense_id,
                    occurrences: occurrences
                        .get(&vocab_id)
                        .cloned()
                        .unwrap_or(Numeric::Value(0)),
                    spelling: details.spelling,
                    reading: details.reading,
                    frequency_rank: details.frequency_rank,
                    meanings: details.meanings,
                    card_level: details.card_level,
                    card_state: details.card_state,
                    due_at: Numeric::Missing,
                });
            }
        }

        tracing::info!(
            requested = pairs.len(),
            found = records.len(),
            batches = batch_count,
            "vocabulary lookup complete"
        );
        Ok(records)
    }
}
