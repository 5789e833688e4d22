//! CLI entry-point for text normalization.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, nlp::normalize::Normalization};

/// Args for the `normalize` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to normalize.
    #[arg(long)]
    pub text: String,
    /// Force ASCII-only output regardless of `NORMALIZATION`.
    #[arg(long)]
    pub ascii: bool,
}

#[instrument(skip_all)]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mode = if args.ascii {
        Normalization::Ascii
    } else {
        settings.normalization
    };
    println!("{}", mode.apply(&args.text));
    Ok(())
}
