//! Mock news-insight generator.
//!
//! Produces placeholder perspective/bias/claim records whose text comes from
//! topic keyword matching and whose numbers are drawn from fixed ranges. The
//! random source is injected so tests can seed it.

pub mod types;

use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::config::Settings;

use self::types::{
    AnalysisRequest, AnalysisResult, BiasAnalysis, Claim, EmotionalTone, Entity,
    HistoricalContextResponse, HistoricalEvent, LoadedTerm,
};

const SUMMARY_CHARS: usize = 200;

/// Randomized analysis records over a pluggable RNG.
pub struct InsightGenerator<R = StdRng> {
    rng: Mutex<R>,
}

impl InsightGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded when `INSIGHT_SEED` is set, entropy otherwise.
    pub fn from_settings(settings: &Settings) -> Self {
        match settings.insight_seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> InsightGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// One record per article; even positions support the topic, odd ones oppose it.
    pub fn analyze(&self, request: &AnalysisRequest) -> Vec<AnalysisResult> {
        let (stance_for, stance_against) = stance_pair(&request.topic);
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(articles = request.articles.len(), topic = %request.topic, "generating mock analysis");

        request
            .articles
            .iter()
            .enumerate()
            .map(|(idx, article)| {
                let support = idx % 2 == 0;
                let topic = request.topic.as_str();
                let sentiment_score = if support {
                    round2(rng.gen_range(0.3..=0.8))
                } else {
                    round2(rng.gen_range(-0.7..=-0.2))
                };
                let credibility_score = rng.gen_range(65..=95);
                let bias_score = if support {
                    rng.gen_range(20..=40)
                } else {
                    rng.gen_range(-40..=-20)
                };
                let verifiability = rng.gen_range(70..=90);
                let confidence = rng.gen_range(75..=95);

                let (perspective, polarity, loaded, tone, tilt, framing) = if support {
                    ("support", "positive", "breakthrough", "optimism", "center_right", "supportive")
                } else {
                    ("oppose", "negative", "concerning", "concern", "center_left", "critical")
                };
                let stance = if support { &stance_for } else { &stance_against };

                AnalysisResult {
                    perspective: perspective.to_string(),
                    stance: stance.clone(),
                    sentiment: polarity.to_string(),
                    sentiment_score,
                    summary: clip_summary(&article.description),
                    key_points: vec![
                        format!("Analysis of {topic} from this perspective"),
                        "Impact on stakeholders and policy".to_string(),
                        "Future implications and outlook".to_string(),
                    ],
                    credibility_score,
                    bias_score,
                    entities: vec![Entity {
                        name: topic.to_string(),
                        kind: "TOPIC".to_string(),
                        sentiment: polarity.to_string(),
                        score: sentiment_score.abs(),
                    }],
                    emotional_tones: vec![
                        EmotionalTone {
                            emotion: tone.to_string(),
                            score: 0.7,
                        },
                        EmotionalTone {
                            emotion: "analytical".to_string(),
                            score: 0.5,
                        },
                    ],
                    claims: vec![Claim {
                        text: format!("{topic} has significant implications for society"),
                        kind: "factual".to_string(),
                        verifiability,
                        confidence,
                    }],
                    bias_analysis: BiasAnalysis {
                        coverage_tilt: tilt.to_string(),
                        loaded_terms: vec![LoadedTerm {
                            term: loaded.to_string(),
                            context: format!("The {topic} development is described as {loaded}"),
                            bias_type: polarity.to_string(),
                        }],
                        reasoning: format!(
                            "Article shows {framing} stance based on language analysis and framing"
                        ),
                    },
                }
            })
            .collect()
    }
}

/// Supporting and opposing stance for a topic, chosen by keyword.
///
/// Matching is plain substring search on the lowercased topic, so `"detail"`
/// counts as an `ai` topic.
pub fn stance_pair(topic: &str) -> (String, String) {
    let lower = topic.to_lowercase();
    let has = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));

    let pair = if has(&["climate", "environment"]) {
        ("Urgent climate action needed", "Economic considerations prioritized")
    } else if has(&["ai", "tech"]) {
        ("Innovation and progress", "Regulation and safety concerns")
    } else if has(&["economic", "finance"]) {
        ("Growth-focused approach", "Sustainability-focused approach")
    } else if has(&["health", "medical"]) {
        ("Public health priority", "Individual liberty focus")
    } else {
        return (format!("Supporting {topic}"), format!("Critical of {topic}"));
    };
    (pair.0.to_string(), pair.1.to_string())
}

/// Timeline of three placeholder events relative to `today`.
pub fn historical_context(topic: &str, today: NaiveDate) -> HistoricalContextResponse {
    let last_year = today.year() - 1;
    let recent_month = if today.month() > 1 { today.month() - 1 } else { 1 };
    let sources = |a: &str, b: &str| vec![a.to_string(), b.to_string()];

    let events = vec![
        HistoricalEvent {
            date: midnight(last_year, 1, 15),
            headline: format!("Initial developments in {topic}"),
            summary: format!("The beginnings of the {topic} discussion in mainstream media"),
            significance: "Established foundation for current debates".to_string(),
            sources: sources("Historical archives", "News databases"),
        },
        HistoricalEvent {
            date: midnight(last_year, 6, 20),
            headline: format!("Major milestone in {topic}"),
            summary: format!("Significant progress and policy changes related to {topic}"),
            significance: "Shifted public discourse and policy direction".to_string(),
            sources: sources("Policy documents", "News reports"),
        },
        HistoricalEvent {
            date: midnight(today.year(), recent_month, 10),
            headline: format!("Recent developments in {topic}"),
            summary: format!("Latest updates and ongoing debates about {topic}"),
            significance: "Led to current situation and discussions".to_string(),
            sources: sources("Recent news", "Current reports"),
        },
    ];

    HistoricalContextResponse {
        events,
        key_developments: vec![
            format!("Initial research and awareness about {topic}"),
            "Policy discussions and legislative actions".to_string(),
            "Public debate and stakeholder engagement".to_string(),
            "Current status and future outlook".to_string(),
        ],
        related_topics: (1..=3).map(|n| format!("Related Topic {n}")).collect(),
    }
}

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("days 10, 15 and 20 exist in every month")
}

fn clip_summary(description: &str) -> String {
    if description.chars().count() > SUMMARY_CHARS {
        let head: String = description.chars().take(SUMMARY_CHARS).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_descriptions_are_clipped() {
        let long = "x".repeat(250);
        let clipped = clip_summary(&long);
        assert_eq!(clipped.chars().count(), 203);
        assert!(clipped.ends_with("..."));
        assert_eq!(clip_summary("short"), "short");
    }

    #[test]
    fn topic_keywords_pick_stances() {
        assert_eq!(stance_pair("AI regulation").0, "Innovation and progress");
        assert_eq!(stance_pair("Medical costs").1, "Individual liberty focus");
        assert_eq!(
            stance_pair("Elections"),
            ("Supporting Elections".to_string(), "Critical of Elections".to_string())
        );
    }

    #[test]
    fn january_uses_current_january() {
        let ctx = historical_context("x", NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(ctx.events[2].date.date(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(ctx.events[0].date.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }
}
