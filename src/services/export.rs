//! The export run
//!
//! Verify the key, settle the filter options, pick a deck, fetch its
//! vocabulary, filter, sort and write the CSV. Nothing is written unless
//! every fetch succeeded.

use std::path::PathBuf;

use crate::api::{JpdbClient, Transport};
use crate::error::{ExportError, ExportResult};
use crate::export::{export_anki_csv, sort_for_export};
use crate::models::ApiKey;
use crate::setup::ExportWizard;

use super::deck::resolve_deck;
use super::filter::apply_filters;
use super::vocabulary::VocabularyFetcher;

/// How an export run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The CSV file was written
    Exported { path: PathBuf, rows: usize },
    /// The deck has no vocabulary
    EmptyDeck,
    /// jpdb found none of the deck's vocabulary
    NothingFound,
}

/// Run a full export
///
/// `connect` builds the transport once the API key is known. `now` is the
/// reference time for due-date filtering, in epoch seconds.
pub fn run_export<T, C>(
    wizard: &mut ExportWizard<'_>,
    connect: C,
    now: i64,
) -> ExportResult<ExportOutcome>
where
    T: Transport,
    C: FnOnce(ApiKey) -> ExportResult<T>,
{
    let api_key = wizard.api_key()?;
    let client = JpdbClient::new(connect(api_key)?);

    client.ping().map_err(|e| {
        ExportError::AuthRejected(format!("API key validation failed: {}", e))
    })?;
    wizard.prompter().say("API Verified");

    let filter_config = wizard.filter_config()?;

    let decks = client.list_decks()?;
    let preset_deck = wizard.presets().deck_id().map(str::to_string);
    let deck_id = resolve_deck(preset_deck.as_deref(), &decks, wizard.prompter())?;
    wizard
        .prompter()
        .say(&format!("Selected Deck ID: {}", deck_id));

    let fetcher = VocabularyFetcher::new(&client);
    let entries = fetcher.list_entries(&deck_id)?;
    if entries.is_empty() {
        wizard.prompter().say("No vocabulary in deck.");
        return Ok(ExportOutcome::EmptyDeck);
    }

    let detailed = fetcher.lookup(&entries)?;
    if detailed.is_empty() {
        wizard.prompter().say("No detailed vocabulary returned.");
        return Ok(ExportOutcome::NothingFound);
    }

    let filtered = apply_filters(&detailed, &filter_config, now);
    let records = sort_for_export(filtered);
    wizard
        .prompter()
        .say(&format!("\nPrepared {} cards for export.", records.len()));

    let path = wizard.output_path()?;
    let rows = export_anki_csv(&records, &path)?;
    wizard
        .prompter()
        .say(&format!("Anki CSV saved to {}", path.display()));

    Ok(ExportOutcome::Exported { path, rows })
}
