//! CLI entry-point for running the sentiment pipeline.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument};

use crate::{config::Settings, nlp::Models};

/// Args for the `analyze` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to analyse; repeat for several inputs.
    #[arg(long, required = true)]
    pub text: Vec<String>,
    /// Print score and summary alongside the label.
    #[arg(long)]
    pub detailed: bool,
}

#[instrument(skip_all, fields(inputs = args.text.len()))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let models = Models::from_settings(&settings);
    let analyzer = models.analyzer(&settings);

    let concurrency = 4usize;
    let reports = stream::iter(args.text.iter().enumerate())
        .map(|(idx, text)| {
            let analyzer = analyzer.clone();
            async move {
                analyzer
                    .report(text)
                    .await
                    .with_context(|| format!("analysing input #{idx}"))
            }
        })
        .buffered(concurrency)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    for report in reports {
        let line = if args.detailed {
            serde_json::to_string(&report)?
        } else {
            serde_json::to_string(&report.sentiment_label)?
        };
        println!("{line}");
    }
    info!("analysis finished");
    Ok(())
}
