//! `config` and `init` commands

use std::fmt::Write;

use crate::config::{ExportPaths, Settings};
use crate::error::ExportResult;

fn show<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "(ask)".to_string(), |v| v.to_string())
}

/// Paths and effective settings, with the API key masked
pub fn render_config(paths: &ExportPaths, settings: &Settings) -> String {
    let filters = &settings.filters;
    let mut out = String::new();

    let _ = writeln!(out, "jpdb-export Configuration");
    let _ = writeln!(out, "=========================");
    let _ = writeln!(out, "Config directory: {}", paths.config_dir().display());
    let _ = writeln!(
        out,
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Settings:");
    let _ = writeln!(out, "  API base URL:  {}", settings.api_base_url);
    let _ = writeln!(out, "  API key:       {}", settings.masked_api_key());
    let _ = writeln!(out, "  Deck id:       {}", show(settings.deck_id.as_deref()));
    let _ = writeln!(out, "  Mode:          {}", show(settings.mode));
    let _ = writeln!(out, "  Output file:   {}", show(settings.output_file.as_deref()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Filter presets:");
    let _ = writeln!(out, "  Minimum occurrences:  {}", show(filters.min_occurrences));
    let _ = writeln!(out, "  Max days until due:   {}", show(filters.max_days_until_due));
    let _ = writeln!(out, "  Max card level:       {}", show(filters.max_card_level));
    let _ = writeln!(out, "  Include banished:     {}", show(filters.include_banished));
    let _ = writeln!(out, "  Include never-forget: {}", show(filters.include_never_forget));
    let _ = writeln!(out, "  Max frequency rank:   {}", show(filters.max_frequency_rank));
    let _ = writeln!(out, "  Max results:          {}", show(filters.max_results));
    let _ = writeln!(out);
    let _ = writeln!(out, "Retry:");
    let _ = writeln!(out, "  Max attempts:  {}", settings.retry.max_attempts);
    let _ = writeln!(out, "  Backoff base:  {} ms", settings.retry.backoff_base_ms);
    let _ = write!(out, "  Timeout:       {} s", settings.retry.timeout_secs);

    out
}

/// Handle the config command
pub fn handle_config_command(paths: &ExportPaths, settings: &Settings) -> ExportResult<()> {
    println!("{}", render_config(paths, settings));
    Ok(())
}

/// Handle the init command
///
/// Writes the settings file, keeping any values already in it.
pub fn handle_init_command(paths: &ExportPaths, settings: &Settings) -> ExportResult<()> {
    let existed = paths.is_initialized();
    println!("Initializing jpdb-export at: {}", paths.config_dir().display());
    settings.save(paths)?;

    if existed {
        println!("Settings file updated: {}", paths.settings_file().display());
    } else {
        println!("Settings file created: {}", paths.settings_file().display());
    }
    println!();
    println!("Edit it to preset your API key, deck id and filters.");
    println!("Run 'jpdb-export decks' to see your deck ids.");
    Ok(())
}
