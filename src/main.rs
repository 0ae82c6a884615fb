use anyhow::Result;
use clap::{Parser, Subcommand};

use jpdb_export::cli::{
    handle_config_command, handle_decks_command, handle_export_command, handle_init_command,
    handle_ping_command, ExportArgs,
};
use jpdb_export::config::{ExportPaths, Settings};
use jpdb_export::setup::{NoInputPrompter, Prompter, TerminalPrompter};
use jpdb_export::ExportError;

#[derive(Parser)]
#[command(
    name = "jpdb-export",
    version,
    about = "Export jpdb.io deck vocabulary to an Anki-importable CSV",
    long_about = "jpdb-export fetches the vocabulary of one of your jpdb.io decks, \
                  filters it by occurrence count, due date, card level, card state \
                  and frequency, and writes an Expression,Reading,Meaning CSV \
                  that Anki can import."
)]
struct Cli {
    /// jpdb API key (bottom of https://jpdb.io/settings)
    #[arg(long, env = "JPDB_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Never prompt; missing values are errors
    #[arg(long, global = true)]
    no_input: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Export options when no subcommand is given
    #[command(flatten)]
    export: ExportArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a deck to CSV (the default)
    Export(ExportArgs),

    /// List your decks and their ids
    Decks,

    /// Check that the API key is accepted
    Ping,

    /// Write the settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\n{}", ExportError::Interrupted);
        std::process::exit(1);
    })?;

    let cli = Cli::parse();
    jpdb_export::logging::init_tracing(cli.verbose);

    let paths = ExportPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    let mut terminal = TerminalPrompter;
    let mut no_input = NoInputPrompter;
    let prompter: &mut dyn Prompter = if cli.no_input {
        &mut no_input
    } else {
        &mut terminal
    };

    let result = match cli.command {
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, &args, cli.api_key, prompter)
        }
        None => handle_export_command(&settings, &cli.export, cli.api_key, prompter),
        Some(Commands::Decks) => handle_decks_command(&settings, cli.api_key, prompter),
        Some(Commands::Ping) => handle_ping_command(&settings, cli.api_key, prompter),
        Some(Commands::Init) => handle_init_command(&paths, &settings),
        Some(Commands::Config) => handle_config_command(&paths, &settings),
    };

    match result {
        Err(ExportError::Interrupted) => {
            eprintln!("\n{}", ExportError::Interrupted);
            std::process::exit(1);
        }
        other => Ok(other?),
    }
}
