//! CLI for the urlkit URL/URI toolbox.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_dirs, run_params, run_parse, run_relative, run_resolve};

/// Top-level CLI for the urlkit URL/URI toolbox.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: URL/URI decomposition and path resolution", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a URI into its components.
    Parse {
        /// URI to decompose.
        uri: String,
        /// Emit JSON instead of the text listing.
        #[arg(long)]
        json: bool,
    },

    /// Show the query and fragment parameters of a URI.
    Params {
        /// URI to read parameters from.
        uri: String,
        /// Emit JSON instead of the text listing.
        #[arg(long)]
        json: bool,
    },

    /// Apply `.`/`..` references to a base URI, left to right.
    Resolve {
        /// Base URI the references fold onto.
        base: String,
        /// References; an absolute one replaces the accumulator.
        #[arg(required = true)]
        refs: Vec<String>,
    },

    /// Shortest relative path from one URI to another.
    Relative {
        /// Starting URI.
        from: String,
        /// Target URI.
        to: String,
    },

    /// Show platform directories and the working directory.
    Dirs,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("dispatching {:?}", cli.command);

        match cli.command {
            CliCommand::Parse { uri, json } => run_parse(&uri, json)?,
            CliCommand::Params { uri, json } => run_params(&uri, json)?,
            CliCommand::Resolve { base, refs } => run_resolve(&base, &refs),
            CliCommand::Relative { from, to } => run_relative(&from, &to),
            CliCommand::Dirs => run_dirs(),
        }

        Ok(())
    }
}
