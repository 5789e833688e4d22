//! CLI entry-point for one-off summaries.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    nlp::{Models, Summarize},
};

/// Args for the `summarize` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to summarize.
    #[arg(long)]
    pub text: String,
}

#[instrument(skip_all)]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let models = Models::from_settings(&settings);
    let summary = models.summarizer.summarize(&args.text).await?;
    info!(chars = summary.len(), "generated summary");
    println!("{summary}");
    Ok(())
}
