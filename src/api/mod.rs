//! HTTP layer exposing the text services and the mock insight service.

pub mod error;
pub mod insights;
pub mod routes;
pub mod types;

use std::{fmt, net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use clap::ValueEnum;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::Settings,
    insights::InsightGenerator,
    nlp::{pipeline::Analyzer, Models},
};

/// Which service a `serve` process exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Service {
    /// Sentiment and summarizer endpoints plus a root message.
    #[default]
    Combined,
    /// `POST /sentimentanalysis` only.
    Sentiment,
    /// `POST /summarize` only.
    Summarizer,
    /// Mock news-insight endpoints.
    Insights,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Combined => "combined",
            Self::Sentiment => "sentiment",
            Self::Summarizer => "summarizer",
            Self::Insights => "insights",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub models: Models,
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(models: Models, analyzer: Analyzer) -> Self {
        Self {
            models,
            analyzer: Arc::new(analyzer),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let models = Models::from_settings(settings);
        let analyzer = models.analyzer(settings);
        Self::new(models, analyzer)
    }
}

#[derive(Clone)]
pub struct InsightState {
    pub generator: Arc<InsightGenerator>,
}

pub fn sentiment_router(state: AppState) -> Router {
    Router::new()
        .route("/sentimentanalysis", post(routes::sentiment_analysis))
        .with_state(state)
}

pub fn summarizer_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(routes::summarize))
        .with_state(state)
}

/// Both text services behind one listener.
pub fn combined_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .merge(sentiment_router(state.clone()))
        .merge(summarizer_router(state))
}

pub fn insights_router(state: InsightState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(insights::root))
        .route("/health", get(insights::health))
        .route("/analyze", post(insights::analyze))
        .route("/historical-context", post(insights::historical_context))
        .layer(cors)
        .with_state(state)
}

/// Router for `service`, wired from settings.
pub fn router(settings: &Settings, service: Service) -> Router {
    let router = match service {
        Service::Combined => combined_router(AppState::from_settings(settings)),
        Service::Sentiment => sentiment_router(AppState::from_settings(settings)),
        Service::Summarizer => summarizer_router(AppState::from_settings(settings)),
        Service::Insights => insights_router(InsightState {
            generator: Arc::new(InsightGenerator::from_settings(settings)),
        }),
    };
    router.layer(TraceLayer::new_for_http())
}

pub async fn serve(settings: Settings, service: Service, host: String, port: u16) -> Result<()> {
    let router = router(&settings, service);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;
    info!(%addr, %service, "serving newsception-ml API");
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
