//! Deck list formatting

use crate::models::DeckSummary;

/// Format decks as a numbered list, starting at 1
pub fn format_deck_list(decks: &[DeckSummary]) -> String {
    if decks.is_empty() {
        return "No user decks found.".to_string();
    }

    let mut output = String::new();
    for (index, deck) in decks.iter().enumerate() {
        output.push_str(&format!("{}: {}\n", index + 1, deck.name));
        output.push_str(&format!(
            "  id={}  vocabulary count: {} | word count: {} | known_coverage: {:.1}% | in_progress: {:.1}% | built-in: {}\n",
            deck.id,
            deck.vocabulary_count,
            deck.word_count,
            deck.known_coverage,
            deck.in_progress_coverage,
            deck.is_built_in,
        ));
    }

    output.trim_end().to_string()
}
