use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use newsception_ml::{
    error::{AnalysisError, Result},
    nlp::{
        normalize::Normalization,
        pipeline::{AnalysisOutcome, Analyzer},
        Classification, Classify, Summarize,
    },
};

#[derive(Default)]
struct CountingSummarizer {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl Summarize for CountingSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AnalysisError::InputTooLong {
                tokens: 2000,
                limit: 1024,
            });
        }
        Ok(format!("summary of {text}"))
    }
}

#[derive(Default)]
struct RecordingClassifier {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl Classify for RecordingClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        self.seen.lock().unwrap().push(text.to_string());
        let label = if text.contains("love") {
            "Very Positive"
        } else {
            "Neutral"
        };
        Ok(Classification {
            label: label.to_string(),
            score: 0.93,
        })
    }
}

fn analyzer(
    mode: Normalization,
    summarizer: Arc<CountingSummarizer>,
    classifier: Arc<RecordingClassifier>,
) -> Analyzer {
    Analyzer::new(mode, summarizer, classifier)
}

#[tokio::test]
async fn outcome_carries_only_the_label() {
    let summarizer = Arc::new(CountingSummarizer::default());
    let classifier = Arc::new(RecordingClassifier::default());
    let analyzer = analyzer(
        Normalization::Ascii,
        Arc::clone(&summarizer),
        Arc::clone(&classifier),
    );

    let outcome = analyzer.analyze("I love this!").await.unwrap();

    assert_eq!(
        outcome,
        AnalysisOutcome {
            sentiment_label: "Very Positive".to_string()
        }
    );
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json, serde_json::json!({ "sentimentLabel": "Very Positive" }));
}

#[tokio::test]
async fn classifier_sees_normalized_text() {
    let summarizer = Arc::new(CountingSummarizer::default());
    let classifier = Arc::new(RecordingClassifier::default());
    let analyzer = analyzer(
        Normalization::Ascii,
        summarizer,
        Arc::clone(&classifier),
    );

    analyzer.analyze("Check http://x.co NOW!!").await.unwrap();

    assert_eq!(*classifier.seen.lock().unwrap(), vec!["check  now".to_string()]);
}

#[tokio::test]
async fn multilingual_mode_keeps_non_latin_input() {
    let summarizer = Arc::new(CountingSummarizer::default());
    let classifier = Arc::new(RecordingClassifier::default());
    let analyzer = analyzer(
        Normalization::Multilingual,
        summarizer,
        Arc::clone(&classifier),
    );

    analyzer.analyze("Отличный день!").await.unwrap();

    assert_eq!(*classifier.seen.lock().unwrap(), vec!["отличный день".to_string()]);
}

#[tokio::test]
async fn report_keeps_summary_and_score() {
    let analyzer = analyzer(
        Normalization::Ascii,
        Arc::new(CountingSummarizer::default()),
        Arc::new(RecordingClassifier::default()),
    );

    let report = analyzer.report("Plain text.").await.unwrap();

    assert_eq!(report.summary, "summary of plain text");
    assert_eq!(report.score, 0.93);
    assert_eq!(report.sentiment_label, "Neutral");
}

#[tokio::test]
async fn summarizer_failure_stops_the_pipeline() {
    let summarizer = Arc::new(CountingSummarizer {
        fail: true,
        ..Default::default()
    });
    let classifier = Arc::new(RecordingClassifier::default());
    let analyzer = analyzer(
        Normalization::Ascii,
        summarizer,
        Arc::clone(&classifier),
    );

    let err = analyzer.analyze("anything").await.unwrap_err();

    assert!(matches!(err, AnalysisError::InputTooLong { .. }));
    assert!(classifier.seen.lock().unwrap().is_empty());
}
