//! Mode and filter option steps
//!
//! Basic mode uses fixed defaults. Advanced mode takes each option from the
//! presets when set and asks for the rest.

use crate::config::FilterPresets;
use crate::error::ExportResult;
use crate::models::{ExportMode, FilterConfig};
use crate::setup::prompt::{ask_optional_u64, ask_yes_no, Prompter};

pub struct ModeStep;

impl ModeStep {
    pub fn run(preset: Option<ExportMode>, prompter: &mut dyn Prompter) -> ExportResult<ExportMode> {
        if let Some(mode) = preset {
            return Ok(mode);
        }

        let answer =
            prompter.ask("Choose mode - '1' (basic) or '2' (advanced) (default: basic): ")?;
        Ok(answer.parse().unwrap_or(ExportMode::Basic))
    }
}

pub struct FilterStep;

impl FilterStep {
    pub fn run(
        mode: ExportMode,
        presets: &FilterPresets,
        prompter: &mut dyn Prompter,
    ) -> ExportResult<FilterConfig> {
        if mode == ExportMode::Basic {
            return Ok(FilterConfig::basic());
        }

        let min_occurrences = match presets.min_occurrences {
            Some(n) => n,
            None => ask_optional_u64(prompter, "Minimum occurrences in deck [0]: ")?.unwrap_or(0),
        };

        let max_days_until_due = match presets.max_days_until_due {
            Some(n) => zero_is_unlimited(n),
            None => ask_optional_u64(prompter, "Maximum days until due (blank = no limit): ")?,
        };

        let max_card_level = match presets.max_card_level {
            Some(n) => zero_is_unlimited(n),
            None => ask_optional_u64(prompter, "Maximum card_level (blank = no limit): ")?,
        };

        let include_banished = match presets.include_banished {
            Some(b) => b,
            None => ask_yes_no(prompter, "Include banished cards? (Y/N) [N]: ", false)?,
        };

        let include_never_forget = match presets.include_never_forget {
            Some(b) => b,
            None => ask_yes_no(prompter, "Include never_forget cards? (Y/N) [N]: ", false)?,
        };

        let max_frequency_rank = match presets.max_frequency_rank {
            Some(n) => zero_is_unlimited(n),
            None => ask_optional_u64(
                prompter,
                "Maximum word frequency rank (blank = no limit; lower = more common): ",
            )?,
        };

        let max_results = match presets.max_results {
            Some(n) => n,
            None => ask_optional_u64(prompter, "Max results to import (0 = all) [0]: ")?.unwrap_or(0),
        };

        Ok(FilterConfig {
            min_occurrences,
            max_days_until_due,
            max_card_level,
            include_banished,
            include_never_forget,
            max_frequency_rank,
            max_results: usize::try_from(max_results).unwrap_or(usize::MAX),
        })
    }
}

/// Preset ceilings of 0 mean "no limit"
fn zero_is_unlimited(value: u64) -> Option<u64> {
    (value > 0).then_some(value)
}
