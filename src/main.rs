//! Entry point wiring CLI dispatch to the services.

use anyhow::Result;
use newsception_ml::{cli::Cli, config::Settings, logging};
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, backend = %settings.backend, "starting command");
    cli.dispatch(settings).await
}
