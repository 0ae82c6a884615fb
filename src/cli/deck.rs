//! Account commands: `decks` and `ping`

use crate::api::{HttpTransport, JpdbClient, Transport};
use crate::config::Settings;
use crate::display::format_deck_list;
use crate::error::ExportResult;
use crate::setup::steps::CredentialsStep;
use crate::setup::Prompter;

/// Resolve the API key and build a client against the configured endpoint
pub fn connect(
    settings: &Settings,
    api_key: Option<String>,
    prompter: &mut dyn Prompter,
) -> ExportResult<JpdbClient<HttpTransport>> {
    let preset = api_key.or_else(|| settings.api_key.clone());
    let key = CredentialsStep::run(preset.as_deref(), prompter)?;
    let transport = HttpTransport::new(&settings.api_base_url, key, &settings.retry)?;
    Ok(JpdbClient::new(transport))
}

/// Print the user's decks
pub fn list_decks<T: Transport>(
    client: &JpdbClient<T>,
    prompter: &mut dyn Prompter,
) -> ExportResult<()> {
    let decks = client.list_decks()?;
    prompter.say(&format_deck_list(&decks));
    Ok(())
}

/// Check the API key
pub fn verify_key<T: Transport>(
    client: &JpdbClient<T>,
    prompter: &mut dyn Prompter,
) -> ExportResult<()> {
    client.ping()?;
    prompter.say("API Verified");
    Ok(())
}

/// Handle the decks command
pub fn handle_decks_command(
    settings: &Settings,
    api_key: Option<String>,
    prompter: &mut dyn Prompter,
) -> ExportResult<()> {
    let client = connect(settings, api_key, prompter)?;
    list_decks(&client, prompter)
}

/// Handle the ping command
pub fn handle_ping_command(
    settings: &Settings,
    api_key: Option<String>,
    prompter: &mut dyn Prompter,
) -> ExportResult<()> {
    let client = connect(settings, api_key, prompter)?;
    verify_key(&client, prompter)
}
