//! Export command
//!
//! Flags here override the settings file; anything left unset is asked for
//! interactively (or rejected under `--no-input`).

use chrono::Utc;
use clap::Args;

use crate::api::HttpTransport;
use crate::config::{FilterPresets, Settings};
use crate::error::ExportResult;
use crate::models::ExportMode;
use crate::services::{run_export, ExportOutcome};
use crate::setup::{ExportWizard, Presets, Prompter};

/// Options for `export`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportArgs {
    /// Deck id to export (see `decks`)
    #[arg(short, long, env = "JPDB_DECK_ID")]
    pub deck: Option<String>,

    /// Filter mode: basic (1) or advanced (2)
    #[arg(short, long)]
    pub mode: Option<ExportMode>,

    /// Output CSV file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Drop words seen fewer times than this in the deck
    #[arg(long)]
    pub min_occurrences: Option<u64>,

    /// Drop cards due more than this many days from now (0 = no limit)
    #[arg(long)]
    pub max_days_until_due: Option<u64>,

    /// Drop cards above this level (0 = no limit)
    #[arg(long)]
    pub max_card_level: Option<u64>,

    /// Keep suspended, blacklisted and banished cards
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_banished: Option<bool>,

    /// Keep never-forget cards
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_never_forget: Option<bool>,

    /// Drop words ranked rarer than this (0 = no limit)
    #[arg(long)]
    pub max_frequency_rank: Option<u64>,

    /// Stop after this many cards (0 = all)
    #[arg(long)]
    pub max_results: Option<u64>,
}

impl ExportArgs {
    /// The flags as a preset layer
    pub fn presets(&self, api_key: Option<String>) -> Presets {
        Presets {
            api_key,
            deck_id: self.deck.clone(),
            mode: self.mode,
            output_file: self.output.clone(),
            filters: FilterPresets {
                min_occurrences: self.min_occurrences,
                max_days_until_due: self.max_days_until_due,
                max_card_level: self.max_card_level,
                include_banished: self.include_banished,
                include_never_forget: self.include_never_forget,
                max_frequency_rank: self.max_frequency_rank,
                max_results: self.max_results,
            },
        }
    }
}

/// Handle the export command
pub fn handle_export_command(
    settings: &Settings,
    args: &ExportArgs,
    api_key: Option<String>,
    prompter: &mut dyn Prompter,
) -> ExportResult<()> {
    let presets = Presets::from_settings(settings).overlay(args.presets(api_key));
    let mut wizard = ExportWizard::new(presets, prompter);

    let outcome = run_export(
        &mut wizard,
        |key| HttpTransport::new(&settings.api_base_url, key, &settings.retry),
        Utc::now().timestamp(),
    )?;

    match &outcome {
        ExportOutcome::Exported { path, rows } => {
            tracing::info!(path = %path.display(), rows, "export finished");
        }
        ExportOutcome::EmptyDeck | ExportOutcome::NothingFound => {
            tracing::info!(?outcome, "nothing to export");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ExportArgs,
    }

    fn parse(argv: &[&str]) -> ExportArgs {
        TestCli::try_parse_from(std::iter::once("test").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_no_flags_leave_everything_open() {
        let args = parse(&[]);
        let presets = args.presets(None);
        assert_eq!(presets.mode, None);
        assert_eq!(presets.output_file, None);
        assert_eq!(presets.filters, FilterPresets::default());
    }

    #[test]
    fn test_flags_become_presets() {
        let args = parse(&[
            "--mode",
            "advanced",
            "--output",
            "words.csv",
            "--min-occurrences",
            "3",
            "--max-frequency-rank",
            "10000",
            "--include-banished",
            "--include-never-forget",
            "false",
        ]);
        let presets = args.presets(Some("key".into()));

        assert_eq!(presets.api_key.as_deref(), Some("key"));
        assert_eq!(presets.mode, Some(ExportMode::Advanced));
        assert_eq!(presets.output_file.as_deref(), Some("words.csv"));
        assert_eq!(presets.filters.min_occurrences, Some(3));
        assert_eq!(presets.filters.max_frequency_rank, Some(10_000));
        assert_eq!(presets.filters.include_banished, Some(true));
        assert_eq!(presets.filters.include_never_forget, Some(false));
        assert_eq!(presets.filters.max_results, None);
    }

    #[test]
    fn test_mode_accepts_number() {
        assert_eq!(parse(&["-m", "1"]).mode, Some(ExportMode::Basic));
        assert!(TestCli::try_parse_from(["test", "--mode", "fancy"]).is_err());
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            deck_id: Some("1".into()),
            mode: Some(ExportMode::Basic),
            ..Settings::default()
        };
        let args = parse(&["--mode", "2"]);

        let presets = Presets::from_settings(&settings).overlay(args.presets(None));

        assert_eq!(presets.mode, Some(ExportMode::Advanced));
        assert_eq!(presets.output_file.as_deref(), Some("anki_import.csv"));
    }
}
