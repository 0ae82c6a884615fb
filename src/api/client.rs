//! jpdb API operations
//!
//! Thin wrappers that build each request body and hand the response to the
//! matching decoder in [`super::wire`].

use serde_json::{json, Value};

use super::transport::Transport;
use super::wire::{self, VocabularyDetails, DECK_FIELDS, LOOKUP_FIELDS};
use crate::error::{ExportError, ExportResult};
use crate::models::{DeckEntry, DeckSummary, SenseId, VocabId};

/// Client for the four jpdb endpoints the exporter uses
#[derive(Debug)]
pub struct JpdbClient<T: Transport> {
    transport: T,
}

impl<T: Transport> JpdbClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Verify the API key
    ///
    /// A successful response that carries an `error` key is a rejection too.
    pub fn ping(&self) -> ExportResult<()> {
        let body = self.transport.post("ping", &json!({}))?;

        if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
            let message = body
                .get("error_message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(ExportError::AuthRejected(format!("API rejected key: {}", message)));
        }

        Ok(())
    }

    /// List the user's decks
    pub fn list_decks(&self) -> ExportResult<Vec<DeckSummary>> {
        let body = self
            .transport
            .post("list-user-decks", &json!({ "fields": DECK_FIELDS }))?;
        wire::decode_decks(&body)
    }

    /// List a deck's vocabulary with occurrence counts
    pub fn list_deck_vocabulary(&self, deck_id: &str) -> ExportResult<Vec<DeckEntry>> {
        let id: i64 = deck_id.trim().parse().map_err(|_| {
            ExportError::Validation(format!("Deck id must be an integer, got '{}'", deck_id))
        })?;

        let body = self.transport.post(
            "deck/list-vocabulary",
            &json!({ "id": id, "fetch_occurences": true }),
        )?;
        wire::decode_deck_vocabulary(&body)
    }

    /// Look up details for one batch of identifier pairs
    ///
    /// Slot `i` of the result answers `pairs[i]`; `None` means not found.
    pub fn lookup_vocabulary(
        &self,
        pairs: &[(VocabId, SenseId)],
    ) -> ExportResult<Vec<Option<VocabularyDetails>>> {
        let list: Vec<[u64; 2]> = pairs.iter().map(|(v, s)| [v.get(), s.get()]).collect();
        let body = self.transport.post(
            "lookup-vocabulary",
            &json!({ "list": list, "fields": LOOKUP_FIELDS }),
        )?;
        wire::decode_lookup(&body)
    }
}
