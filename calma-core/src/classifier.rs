use crate::capability::{CapabilityError, ClassificationCapability};
use crate::mood::MoodLabel;
use std::sync::Arc;
use tracing::{debug, warn};

/// A detected mood and how sure the model was about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodReading {
    pub mood: MoodLabel,
    /// Always within `[0, 1]`.
    pub confidence: f32,
}

/// Turns free text into a [`MoodReading`] through a sentiment capability.
#[derive(Clone)]
pub struct MoodClassifier {
    capability: Arc<dyn ClassificationCapability>,
}

impl MoodClassifier {
    pub fn new(capability: Arc<dyn ClassificationCapability>) -> Self {
        Self { capability }
    }

    /// Classifies `text` (which may be empty).
    ///
    /// Unknown raw labels become [`MoodLabel::Neutral`]. Capability errors are
    /// returned as-is, without a fallback mood.
    pub fn classify(&self, text: &str) -> Result<MoodReading, CapabilityError> {
        let raw = self.capability.classify(text).inspect_err(|e| {
            warn!(error = %e, "sentiment classification failed");
        })?;
        let mood = MoodLabel::from_sentiment(&raw.label);
        let confidence = if raw.score.is_nan() {
            0.0
        } else {
            raw.score.clamp(0.0, 1.0)
        };
        debug!(raw_label = %raw.label, %mood, confidence, "classified mood");
        Ok(MoodReading { mood, confidence })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{FailingCapability, StubClassifier};

    #[test]
    fn positive_is_happy() {
        let classifier = MoodClassifier::new(Arc::new(StubClassifier::new("POSITIVE", 0.9)));
        let reading = classifier.classify("I feel great today").unwrap();
        assert_eq!(reading.mood, MoodLabel::Happy);
        assert!((reading.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn negative_is_sad() {
        let classifier = MoodClassifier::new(Arc::new(StubClassifier::new("NEGATIVE", 0.7)));
        assert_eq!(classifier.classify("meh").unwrap().mood, MoodLabel::Sad);
    }

    #[test]
    fn unrecognized_label_is_neutral_not_an_error() {
        let classifier = MoodClassifier::new(Arc::new(StubClassifier::new("MIXED", 0.5)));
        let reading = classifier.classify("so-so").unwrap();
        assert_eq!(reading.mood, MoodLabel::Neutral);
    }

    #[test]
    fn empty_text_is_passed_through() {
        let stub = Arc::new(StubClassifier::new("NEUTRAL", 0.4));
        let classifier = MoodClassifier::new(stub.clone());
        classifier.classify("").unwrap();
        assert_eq!(stub.seen(), vec![String::new()]);
    }

    #[test]
    fn confidence_is_clamped() {
        let classifier = MoodClassifier::new(Arc::new(StubClassifier::new("POSITIVE", 1.7)));
        assert_eq!(classifier.classify("x").unwrap().confidence, 1.0);
    }

    #[test]
    fn failures_propagate() {
        let classifier = MoodClassifier::new(Arc::new(FailingCapability));
        let err = classifier.classify("anything").unwrap_err();
        assert!(matches!(err, CapabilityError::Unavailable(_)));
    }
}
