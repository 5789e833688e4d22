use chrono::NaiveDate;
use newsception_ml::insights::{
    historical_context,
    types::{AnalysisRequest, Article},
    InsightGenerator,
};
use serde_json::json;

fn article(n: usize, description: &str) -> Article {
    Article {
        title: format!("Story {n}"),
        url: format!("https://news.example/{n}"),
        source: "Example Wire".to_string(),
        description: description.to_string(),
        published_at: "2025-03-01T08:00:00Z".to_string(),
    }
}

fn request(topic: &str, count: usize) -> AnalysisRequest {
    AnalysisRequest {
        articles: (0..count).map(|n| article(n, "A short description.")).collect(),
        topic: topic.to_string(),
    }
}

#[test]
fn climate_topic_alternates_perspectives() {
    let generator = InsightGenerator::seeded(7);
    let results = generator.analyze(&request("climate change", 5));

    let perspectives: Vec<_> = results.iter().map(|r| r.perspective.as_str()).collect();
    assert_eq!(
        perspectives,
        ["support", "oppose", "support", "oppose", "support"]
    );
    for (idx, result) in results.iter().enumerate() {
        let expected = if idx % 2 == 0 {
            "Urgent climate action needed"
        } else {
            "Economic considerations prioritized"
        };
        assert_eq!(result.stance, expected);
    }
}

#[test]
fn numeric_fields_stay_in_range() {
    let generator = InsightGenerator::from_entropy();
    let results = generator.analyze(&request("tech layoffs", 200));

    for (idx, r) in results.iter().enumerate() {
        if idx % 2 == 0 {
            assert!((0.3..=0.8).contains(&r.sentiment_score), "{}", r.sentiment_score);
            assert!((20..=40).contains(&r.bias_score));
            assert_eq!(r.sentiment, "positive");
        } else {
            assert!((-0.7..=-0.2).contains(&r.sentiment_score), "{}", r.sentiment_score);
            assert!((-40..=-20).contains(&r.bias_score));
            assert_eq!(r.sentiment, "negative");
        }
        assert!((65..=95).contains(&r.credibility_score));
        assert!((70..=90).contains(&r.claims[0].verifiability));
        assert!((75..=95).contains(&r.claims[0].confidence));
        assert_eq!(r.entities[0].score, r.sentiment_score.abs());
        assert_eq!((r.sentiment_score * 100.0).round() / 100.0, r.sentiment_score);
    }
}

#[test]
fn same_seed_same_records() {
    let a = InsightGenerator::seeded(42).analyze(&request("health policy", 6));
    let b = InsightGenerator::seeded(42).analyze(&request("health policy", 6));
    assert_eq!(a, b);
}

#[test]
fn record_shape_matches_wire_format() {
    let generator = InsightGenerator::seeded(1);
    let results = generator.analyze(&request("Elections", 2));
    let value = serde_json::to_value(&results[1]).unwrap();

    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    for key in [
        "perspective",
        "stance",
        "sentiment",
        "sentimentScore",
        "summary",
        "keyPoints",
        "credibilityScore",
        "biasScore",
        "entities",
        "emotionalTones",
        "claims",
        "biasAnalysis",
    ] {
        assert!(keys.iter().any(|k| k == key), "missing {key}");
    }
    assert_eq!(value["stance"], "Critical of Elections");
    assert_eq!(value["entities"][0]["type"], "TOPIC");
    assert_eq!(value["claims"][0]["type"], "factual");
    assert_eq!(
        value["biasAnalysis"],
        json!({
            "coverageTilt": "center_left",
            "loadedTerms": [{
                "term": "concerning",
                "context": "The Elections development is described as concerning",
                "biasType": "negative"
            }],
            "reasoning": "Article shows critical stance based on language analysis and framing"
        })
    );
    assert_eq!(
        value["emotionalTones"],
        json!([
            { "emotion": "concern", "score": 0.7 },
            { "emotion": "analytical", "score": 0.5 }
        ])
    );
}

#[test]
fn historical_context_timeline() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    let value = serde_json::to_value(historical_context("climate change", today)).unwrap();

    assert_eq!(
        value,
        json!({
            "events": [
                {
                    "date": "2024-01-15T00:00:00",
                    "headline": "Initial developments in climate change",
                    "summary": "The beginnings of the climate change discussion in mainstream media",
                    "significance": "Established foundation for current debates",
                    "sources": ["Historical archives", "News databases"]
                },
                {
                    "date": "2024-06-20T00:00:00",
                    "headline": "Major milestone in climate change",
                    "summary": "Significant progress and policy changes related to climate change",
                    "significance": "Shifted public discourse and policy direction",
                    "sources": ["Policy documents", "News reports"]
                },
                {
                    "date": "2025-02-10T00:00:00",
                    "headline": "Recent developments in climate change",
                    "summary": "Latest updates and ongoing debates about climate change",
                    "significance": "Led to current situation and discussions",
                    "sources": ["Recent news", "Current reports"]
                }
            ],
            "keyDevelopments": [
                "Initial research and awareness about climate change",
                "Policy discussions and legislative actions",
                "Public debate and stakeholder engagement",
                "Current status and future outlook"
            ],
            "relatedTopics": ["Related Topic 1", "Related Topic 2", "Related Topic 3"]
        })
    );
}
