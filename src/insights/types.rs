//! Wire shapes of the mock news-insight service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub description: String,
    pub published_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub articles: Vec<Article>,
    pub topic: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoricalContextRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sentiment: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalTone {
    pub emotion: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claim {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub verifiability: i64,
    pub confidence: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedTerm {
    pub term: String,
    pub context: String,
    pub bias_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasAnalysis {
    pub coverage_tilt: String,
    pub loaded_terms: Vec<LoadedTerm>,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub perspective: String,
    pub stance: String,
    pub sentiment: String,
    pub sentiment_score: f64,
    pub summary: String,
    pub key_points: Vec<String>,
    pub credibility_score: i64,
    pub bias_score: i64,
    pub entities: Vec<Entity>,
    pub emotional_tones: Vec<EmotionalTone>,
    pub claims: Vec<Claim>,
    pub bias_analysis: BiasAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalEvent {
    pub date: NaiveDateTime,
    pub headline: String,
    pub summary: String,
    pub significance: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalContextResponse {
    pub events: Vec<HistoricalEvent>,
    pub key_developments: Vec<String>,
    pub related_topics: Vec<String>,
}
