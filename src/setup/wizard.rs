//! Export option resolution
//!
//! Options are layered: built-in defaults, then the settings file, then
//! command-line flags and environment. Whatever is still unset after that is
//! asked for through the prompter. The result is handed to the pipeline as
//! plain values.

use std::path::PathBuf;

use crate::config::{FilterPresets, Settings};
use crate::error::ExportResult;
use crate::models::{ApiKey, ExportMode, FilterConfig};

use super::prompt::Prompter;
use super::steps::{CredentialsStep, FilterStep, ModeStep, OutputStep};

/// Preconfigured answers; `None` means "ask"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presets {
    pub api_key: Option<String>,
    pub deck_id: Option<String>,
    pub mode: Option<ExportMode>,
    pub output_file: Option<String>,
    pub filters: FilterPresets,
}

impl Presets {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            deck_id: settings.deck_id.clone(),
            mode: settings.mode,
            output_file: settings.output_file.clone(),
            filters: settings.filters.clone(),
        }
    }

    /// Layer `other` on top; values set in `other` win
    pub fn overlay(self, other: Presets) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            deck_id: other.deck_id.or(self.deck_id),
            mode: other.mode.or(self.mode),
            output_file: other.output_file.or(self.output_file),
            filters: self.filters.merged_with(&other.filters),
        }
    }

    /// Preset deck id, ignoring blanks
    pub fn deck_id(&self) -> Option<&str> {
        self.deck_id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Walks the user through whatever the presets leave open
pub struct ExportWizard<'p> {
    presets: Presets,
    prompter: &'p mut dyn Prompter,
}

impl<'p> ExportWizard<'p> {
    pub fn new(presets: Presets, prompter: &'p mut dyn Prompter) -> Self {
        Self { presets, prompter }
    }

    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    pub fn prompter(&mut self) -> &mut dyn Prompter {
        &mut *self.prompter
    }

    pub fn api_key(&mut self) -> ExportResult<ApiKey> {
        CredentialsStep::run(self.presets.api_key.as_deref(), &mut *self.prompter)
    }

    /// Resolve the mode, then the filter options for it
    pub fn filter_config(&mut self) -> ExportResult<FilterConfig> {
        let mode = ModeStep::run(self.presets.mode, &mut *self.prompter)?;
        tracing::info!(%mode, "export mode selected");
        let config = FilterStep::run(mode, &self.presets.filters, &mut *self.prompter)?;
        if mode == ExportMode::Advanced {
            self.prompter.say(&format!("\nFilter options:\n{}", config));
        }
        Ok(config)
    }

    pub fn output_path(&mut self) -> ExportResult<PathBuf> {
        OutputStep::run(self.presets.output_file.as_deref(), &mut *self.prompter)
    }
}
