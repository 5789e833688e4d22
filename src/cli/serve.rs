//! CLI entry-point for serving the HTTP API.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    api::{self, Service},
    config::Settings,
};

/// Run the Axum server.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Service to expose.
    #[arg(long, value_enum, default_value_t = Service::Combined)]
    pub service: Service,
    /// Port to bind; falls back to `PORT` (default 8000).
    #[arg(long)]
    pub port: Option<u16>,
    /// Host address; falls back to `HOST` (default 127.0.0.1).
    #[arg(long)]
    pub host: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let host = args.host.unwrap_or_else(|| settings.host.clone());
    let port = args.port.unwrap_or(settings.port);
    api::serve(settings, args.service, host, port).await
}
