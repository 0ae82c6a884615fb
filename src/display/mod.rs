//! Terminal output formatting

pub mod deck;

pub use deck::format_deck_list;
