//! Output file step

use std::path::PathBuf;

use crate::config::settings::DEFAULT_OUTPUT_FILE;
use crate::error::ExportResult;
use crate::setup::prompt::Prompter;

pub struct OutputStep;

impl OutputStep {
    pub fn run(preset: Option<&str>, prompter: &mut dyn Prompter) -> ExportResult<PathBuf> {
        if let Some(path) = preset.map(str::trim).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let answer = prompter.ask(&format!(
            "Output CSV filename (default {}): ",
            DEFAULT_OUTPUT_FILE
        ))?;
        if answer.is_empty() {
            Ok(PathBuf::from(DEFAULT_OUTPUT_FILE))
        } else {
            Ok(PathBuf::from(answer))
        }
    }
}
