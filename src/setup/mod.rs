//! Interactive setup for an export run
//!
//! Resolves the API key, mode, filter options and output file from presets,
//! asking the user only for what is missing.

pub mod prompt;
pub mod steps;
pub mod wizard;

pub use prompt::{NoInputPrompter, Prompter, TerminalPrompter};
pub use wizard::{ExportWizard, Presets};
