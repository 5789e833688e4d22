//! Command-line interface wiring for newsception-ml.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod analyze;
pub mod normalize;
pub mod serve;
pub mod summarize;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Sentiment, summarization and mock news-insight services", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Summarize(args) => summarize::run(args, settings).await,
            Commands::Normalize(args) => normalize::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve one of the HTTP services.
    Serve(serve::Args),
    /// Run the sentiment pipeline over text.
    Analyze(analyze::Args),
    /// Summarize text.
    Summarize(summarize::Args),
    /// Print the normalized form of text.
    Normalize(normalize::Args),
}
