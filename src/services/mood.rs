use crate::error::{ApiError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Mood labels for the free-text path. A separate, smaller vocabulary drives
/// the questionnaire path (`SurveyMood`); the two are never unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Bosan,
    Sedih,
    Senang,
    Semangat,
    Takut,
    Penasaran,
    Marah,
    Cinta,
    Tegang,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 9] = [
        MoodLabel::Bosan,
        MoodLabel::Sedih,
        MoodLabel::Senang,
        MoodLabel::Semangat,
        MoodLabel::Takut,
        MoodLabel::Penasaran,
        MoodLabel::Marah,
        MoodLabel::Cinta,
        MoodLabel::Tegang,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Bosan => "bosan",
            MoodLabel::Sedih => "sedih",
            MoodLabel::Senang => "senang",
            MoodLabel::Semangat => "semangat",
            MoodLabel::Takut => "takut",
            MoodLabel::Penasaran => "penasaran",
            MoodLabel::Marah => "marah",
            MoodLabel::Cinta => "cinta",
            MoodLabel::Tegang => "tegang",
        }
    }

    pub fn parse(raw: &str) -> Option<MoodLabel> {
        Self::ALL.into_iter().find(|mood| mood.as_str() == raw)
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword lists per mood, in resolution priority order: the first mood with
/// any keyword present in the lowered text wins, regardless of how specific
/// a later mood's keyword would have been.
const MOOD_KEYWORDS: &[(MoodLabel, &[&str])] = &[
    (
        MoodLabel::Bosan,
        &["bosan", "jenuh", "monoton", "capek", "rutinitas"],
    ),
    (
        MoodLabel::Sedih,
        &["sedih", "galau", "kecewa", "murung", "patah hati"],
    ),
    (
        MoodLabel::Senang,
        &["senang", "bahagia", "gembira", "suka", "ceria"],
    ),
    (
        MoodLabel::Semangat,
        &["semangat", "antusias", "energik", "excited"],
    ),
    (MoodLabel::Takut, &["takut", "cemas", "khawatir", "ngeri"]),
    (MoodLabel::Penasaran, &["penasaran", "ingin tahu", "curious"]),
    (MoodLabel::Marah, &["marah", "kesal", "jengkel", "emosi"]),
    (MoodLabel::Cinta, &["cinta", "sayang", "romantis", "love"]),
    (
        MoodLabel::Tegang,
        &["tegang", "stress", "tertekan", "pressure"],
    ),
];

const DEFAULT_MOOD: MoodLabel = MoodLabel::Bosan;

/// External single-shot text classifier capability. Returns the model's raw
/// one-word reply; validating it against the label set is the resolver's job.
#[async_trait]
pub trait MoodClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<String>;
}

/// Stand-in used when no classifier is configured. Resolution then runs on
/// keywords and the fixed default alone.
pub struct DisabledClassifier;

#[async_trait]
impl MoodClassifier for DisabledClassifier {
    async fn classify(&self, _text: &str) -> Result<String> {
        Err(ApiError::ClassifierError(
            "no mood classifier configured".to_string(),
        ))
    }
}

fn match_keywords(lowered: &str) -> Option<MoodLabel> {
    for (mood, keywords) in MOOD_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return Some(*mood);
        }
    }
    None
}

/// Maps arbitrary user text to a `MoodLabel`. The keyword pass and the fixed
/// default guarantee a mood on their own; the classifier only refines texts
/// the keywords miss.
#[derive(Clone)]
pub struct MoodResolver {
    classifier: Arc<dyn MoodClassifier>,
}

impl MoodResolver {
    pub fn new(classifier: Arc<dyn MoodClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn resolve(&self, text: &str) -> MoodLabel {
        let lowered = text.to_lowercase();

        if let Some(mood) = match_keywords(&lowered) {
            info!(mood = %mood, "Detected mood from keywords");
            return mood;
        }

        match self.classifier.classify(text).await {
            Ok(reply) => {
                let word = reply.trim().to_lowercase();
                if let Some(mood) = MoodLabel::parse(&word) {
                    info!(mood = %mood, "Detected mood from classifier");
                    return mood;
                }
                if let Some(mood) = MoodLabel::ALL
                    .into_iter()
                    .find(|mood| word.contains(mood.as_str()))
                {
                    info!(mood = %mood, reply = %word, "Extracted mood from classifier reply");
                    return mood;
                }
                warn!(reply = %word, "Classifier reply contained no known mood");
            }
            Err(err) => {
                warn!("Mood classifier unavailable: {}", err);
            }
        }

        if lowered.contains("capek") || lowered.contains("rutinitas") {
            return MoodLabel::Bosan;
        }

        debug!(mood = %DEFAULT_MOOD, "Falling back to default mood");
        DEFAULT_MOOD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubClassifier {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl StubClassifier {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MoodClassifier for StubClassifier {
        async fn classify(&self, _text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(reply) => Ok(reply.to_string()),
                None => Err(ApiError::ClassifierError("stubbed failure".to_string())),
            }
        }
    }

    fn resolver(classifier: Arc<StubClassifier>) -> MoodResolver {
        MoodResolver::new(classifier)
    }

    #[tokio::test]
    async fn test_keyword_match_skips_classifier() {
        let stub = Arc::new(StubClassifier::replying("senang"));
        let mood = resolver(stub.clone())
            .resolve("aku sangat bosan dengan rutinitas")
            .await;

        assert_eq!(mood, MoodLabel::Bosan);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_first_matching_mood_wins_by_declaration_order() {
        let stub = Arc::new(StubClassifier::failing());
        // "sedih" and "takut" both appear; sedih is declared earlier.
        let mood = resolver(stub)
            .resolve("aku takut besok dan sedih hari ini")
            .await;

        assert_eq!(mood, MoodLabel::Sedih);
    }

    #[tokio::test]
    async fn test_classifier_exact_reply_is_used() {
        let stub = Arc::new(StubClassifier::replying("senang"));
        let mood = resolver(stub.clone()).resolve("hari yang aneh").await;

        assert_eq!(mood, MoodLabel::Senang);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_classifier_reply_containing_label_is_extracted() {
        let stub = Arc::new(StubClassifier::replying("Mood: tegang."));
        let mood = resolver(stub).resolve("hari yang aneh").await;

        assert_eq!(mood, MoodLabel::Tegang);
    }

    #[tokio::test]
    async fn test_classifier_failure_falls_back_to_default() {
        let stub = Arc::new(StubClassifier::failing());
        let mood = resolver(stub).resolve("hari yang aneh").await;

        assert_eq!(mood, MoodLabel::Bosan);
    }

    #[tokio::test]
    async fn test_unusable_classifier_reply_falls_back_to_default() {
        let stub = Arc::new(StubClassifier::replying("gelisah"));
        let mood = resolver(stub).resolve("hari yang aneh").await;

        assert_eq!(mood, MoodLabel::Bosan);
    }

    #[tokio::test]
    async fn test_empty_text_degrades_to_default() {
        let stub = Arc::new(StubClassifier::failing());
        let mood = resolver(stub).resolve("").await;

        assert_eq!(mood, MoodLabel::Bosan);
    }

    #[test]
    fn test_parse_round_trips_every_label() {
        for mood in MoodLabel::ALL {
            assert_eq!(MoodLabel::parse(mood.as_str()), Some(mood));
        }
        assert_eq!(MoodLabel::parse("gembira"), None);
    }
}
