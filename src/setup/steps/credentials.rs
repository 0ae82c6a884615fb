//! API key step
//!
//! Uses the configured key if there is one, otherwise asks for it with
//! hidden input.

use crate::error::{ExportError, ExportResult};
use crate::models::ApiKey;
use crate::setup::prompt::Prompter;

pub struct CredentialsStep;

impl CredentialsStep {
    pub fn run(preset: Option<&str>, prompter: &mut dyn Prompter) -> ExportResult<ApiKey> {
        if let Some(key) = preset.and_then(ApiKey::new) {
            return Ok(key);
        }

        let answer = prompter.ask_secret("Enter your JPDB API Key: ")?;
        ApiKey::new(&answer).ok_or_else(|| ExportError::Validation("API key required.".into()))
    }
}
