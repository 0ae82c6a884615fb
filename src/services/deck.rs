//! Deck selection
//!
//! Picks the deck to export: a preset id when it names one of the user's
//! decks, otherwise an interactive choice from the numbered list.

use crate::display::format_deck_list;
use crate::error::{ExportError, ExportResult};
use crate::models::DeckSummary;
use crate::setup::Prompter;

/// Resolve the deck id to export
///
/// A preset id that doesn't match any deck is reported and selection falls
/// back to the prompt. The prompt repeats until it gets a number in `1..=N`.
pub fn resolve_deck(
    preset: Option<&str>,
    decks: &[DeckSummary],
    prompter: &mut dyn Prompter,
) -> ExportResult<String> {
    if let Some(preset) = preset {
        if let Some(deck) = decks.iter().find(|d| d.id == preset) {
            prompter.say(&format!("Using preset deck id {}", deck.id));
            return Ok(deck.id.clone());
        }
        tracing::warn!(deck_id = preset, "preset deck id not found");
        prompter.say(
            "Preset deck id not found in your account. Falling back to interactive selection.",
        );
    }

    if decks.is_empty() {
        return Err(ExportError::NoDecks);
    }

    prompter.say("\nYour decks:\n");
    prompter.say(&format_deck_list(decks));

    loop {
        let choice = prompter.ask("Please select deck number: ")?;
        if choice.is_empty() {
            prompter.say("Selection cannot be empty.");
            continue;
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=decks.len()).contains(&n) => return Ok(decks[n - 1].id.clone()),
            Ok(_) => prompter.say(&format!("Invalid number. Enter 1..{}.", decks.len())),
            Err(_) if choice.parse::<i64>().is_ok() => {
                prompter.say(&format!("Invalid number. Enter 1..{}.", decks.len()))
            }
            Err(_) => prompter.say("Invalid input. Enter a number."),
        }
    }
}
