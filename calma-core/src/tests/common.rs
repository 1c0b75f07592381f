use crate::capability::{
    CapabilityError, ClassificationCapability, GenerationCapability, RawSentiment,
};
use crate::config::Config;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Mutex;

/// Test helper for a local timestamp at minute resolution.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config() -> Config {
    Config {
        inference_url: "http://localhost:9999/models".to_string(),
        generation_model: "test/generator".to_string(),
        sentiment_model: "test/sentiment".to_string(),
        api_token: None,
        request_timeout_secs: None,
        breath_phase_secs: 0,
        editor: None,
    }
}

/// Always answers with the same sentiment and remembers what it was asked.
pub struct StubClassifier {
    label: String,
    score: f32,
    seen: Mutex<Vec<String>>,
}

impl StubClassifier {
    pub fn new(label: &str, score: f32) -> Self {
        Self {
            label: label.to_string(),
            score,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl ClassificationCapability for StubClassifier {
    fn classify(&self, text: &str) -> Result<RawSentiment, CapabilityError> {
        self.seen.lock().unwrap().push(text.to_string());
        Ok(RawSentiment {
            label: self.label.clone(),
            score: self.score,
        })
    }
}

/// Always replies with the same text and records each call.
pub struct StubGenerator {
    reply: String,
    calls: Mutex<Vec<(String, usize, bool)>>,
}

impl StubGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, usize, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

impl GenerationCapability for StubGenerator {
    fn generate(
        &self,
        prompt: &str,
        max_length: usize,
        sample: bool,
    ) -> Result<String, CapabilityError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_length, sample));
        Ok(self.reply.clone())
    }
}

pub struct FailingCapability;

impl GenerationCapability for FailingCapability {
    fn generate(&self, _: &str, _: usize, _: bool) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unavailable("model is loading".to_string()))
    }
}

impl ClassificationCapability for FailingCapability {
    fn classify(&self, _: &str) -> Result<RawSentiment, CapabilityError> {
        Err(CapabilityError::Unavailable("model is loading".to_string()))
    }
}
