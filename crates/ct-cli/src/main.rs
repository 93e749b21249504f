use std::io;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ct_cli::commands::{ancestry, creator, durations, members};
use ct_cli::export::ExportSource;
use ct_cli::{CardArgs, Cli, Commands, Config};
use ct_core::CardId;

/// Resolve the export file and card ID for a command and open the export.
fn open_export(config: &Config, target: &CardArgs) -> Result<(ExportSource, CardId)> {
    let path = target
        .export
        .as_deref()
        .or(config.export_path.as_deref())
        .context("no board export given; pass --export or set export_path in config")?;
    let source = ExportSource::open(path, config.classifier())
        .with_context(|| format!("failed to open board export {}", path.display()))?;
    let card_id = CardId::new(target.card.as_str()).context("invalid --card")?;
    Ok((source, card_id))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let classifier = config.classifier();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Durations { target, json }) => {
            let (source, card_id) = open_export(&config, target)?;
            durations::run(&mut stdout, &source, &card_id, &classifier, Utc::now(), *json)?;
        }
        Some(Commands::Members { target, json }) => {
            let (source, card_id) = open_export(&config, target)?;
            members::run(&mut stdout, &source, &card_id, &classifier, Utc::now(), *json)?;
        }
        Some(Commands::Ancestry { target, json }) => {
            let (source, card_id) = open_export(&config, target)?;
            ancestry::run(&mut stdout, &source, &card_id, &classifier, *json)?;
        }
        Some(Commands::Creator { target }) => {
            let (source, card_id) = open_export(&config, target)?;
            creator::run(&mut stdout, &source, &card_id, &classifier)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
