//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Card timeline reports.
///
/// Reads a board export and reports how long cards spent in each list, who
/// was assigned to them, and which cards they were copied from.
#[derive(Debug, Parser)]
#[command(name = "ct", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show time spent in each list.
    Durations {
        #[command(flatten)]
        target: CardArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show time each member was assigned.
    Members {
        #[command(flatten)]
        target: CardArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the cards this card was copied from.
    Ancestry {
        #[command(flatten)]
        target: CardArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show who created the card.
    Creator {
        #[command(flatten)]
        target: CardArgs,
    },
}

/// Which card to report on, and where to read it from.
#[derive(Debug, Clone, Args)]
pub struct CardArgs {
    /// Card ID.
    #[arg(long)]
    pub card: String,

    /// Board export file (overrides `export_path` from config).
    #[arg(long)]
    pub export: Option<PathBuf>,
}
