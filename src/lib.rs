//! Sentiment, summarization and mock news-insight services.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod insights;
pub mod logging;
pub mod nlp;
