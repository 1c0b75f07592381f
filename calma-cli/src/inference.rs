//! Hosted model backends for the two dashboard capabilities.
//!
//! Both talk to a Hugging Face style inference endpoint: `POST {base}/{model}`
//! with `{"inputs": ..., "parameters": ...}`.

use anyhow::{Context, Result};
use calma_core::{
    CapabilityError, ClassificationCapability, Config, GenerationCapability, RawSentiment,
};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Clone)]
pub struct InferenceClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl InferenceClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url: config.inference_url.clone(),
            token: config.api_token.clone(),
        })
    }

    pub fn endpoint_for(&self, model: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), model)
    }

    fn post(&self, model: &str, body: &Value) -> Result<String, CapabilityError> {
        let url = self.endpoint_for(model);
        debug!(%url, "calling inference endpoint");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .map_err(|e| CapabilityError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| CapabilityError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(CapabilityError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

/// Text-to-text generation model (e.g. `google/flan-t5-large`).
pub struct HostedGenerator {
    client: InferenceClient,
    model: String,
}

impl HostedGenerator {
    pub fn new(client: InferenceClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

impl GenerationCapability for HostedGenerator {
    fn generate(
        &self,
        prompt: &str,
        max_length: usize,
        sample: bool,
    ) -> Result<String, CapabilityError> {
        let body = json!({
            "inputs": prompt,
            "parameters": { "max_length": max_length, "do_sample": sample },
            "options": { "wait_for_model": true },
        });
        let text = self.client.post(&self.model, &body)?;
        parse_generation(&text)
    }
}

/// Sentiment classification model (e.g. DistilBERT fine-tuned on SST-2).
pub struct HostedSentiment {
    client: InferenceClient,
    model: String,
}

impl HostedSentiment {
    pub fn new(client: InferenceClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

impl ClassificationCapability for HostedSentiment {
    fn classify(&self, text: &str) -> Result<RawSentiment, CapabilityError> {
        let body = json!({
            "inputs": text,
            "options": { "wait_for_model": true },
        });
        let text = self.client.post(&self.model, &body)?;
        parse_sentiment(&text)
    }
}

#[derive(Deserialize)]
struct Generated {
    generated_text: String,
}

#[derive(Deserialize)]
struct Scored {
    label: String,
    score: f32,
}

/// Pipelines answer either `[[{..}, {..}]]` or `[{..}, {..}]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SentimentPayload {
    Nested(Vec<Vec<Scored>>),
    Flat(Vec<Scored>),
}

fn parse_generation(body: &str) -> Result<String, CapabilityError> {
    let generated: Vec<Generated> =
        serde_json::from_str(body).map_err(|e| CapabilityError::Malformed(e.to_string()))?;
    generated
        .into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or_else(|| CapabilityError::Malformed("no generated text".to_string()))
}

/// Picks the highest scoring label.
fn parse_sentiment(body: &str) -> Result<RawSentiment, CapabilityError> {
    let payload: SentimentPayload =
        serde_json::from_str(body).map_err(|e| CapabilityError::Malformed(e.to_string()))?;
    let candidates = match payload {
        SentimentPayload::Nested(outer) => outer.into_iter().flatten().collect::<Vec<_>>(),
        SentimentPayload::Flat(flat) => flat,
    };
    candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|s| RawSentiment {
            label: s.label,
            score: s.score,
        })
        .ok_or_else(|| CapabilityError::Malformed("no sentiment labels".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let mut config = Config::default();
        config.inference_url = "http://localhost:8080/models/".to_string();
        let client = InferenceClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint_for("google/flan-t5-large"),
            "http://localhost:8080/models/google/flan-t5-large"
        );
    }

    #[test]
    fn generation_takes_first_text() {
        let body = r#"[{"generated_text": " Take it one step at a time. "}]"#;
        assert_eq!(
            parse_generation(body).unwrap(),
            " Take it one step at a time. "
        );
    }

    #[test]
    fn empty_generation_is_malformed() {
        assert!(matches!(
            parse_generation("[]"),
            Err(CapabilityError::Malformed(_))
        ));
        assert!(matches!(
            parse_generation(r#"{"error": "Model is loading"}"#),
            Err(CapabilityError::Malformed(_))
        ));
    }

    #[test]
    fn nested_sentiment_picks_top_score() {
        let body = r#"[[{"label":"NEGATIVE","score":0.02},{"label":"POSITIVE","score":0.98}]]"#;
        let raw = parse_sentiment(body).unwrap();
        assert_eq!(raw.label, "POSITIVE");
        assert!((raw.score - 0.98).abs() < 1e-6);
    }

    #[test]
    fn flat_sentiment_picks_top_score() {
        let body = r#"[{"label":"NEGATIVE","score":0.91},{"label":"POSITIVE","score":0.09}]"#;
        assert_eq!(parse_sentiment(body).unwrap().label, "NEGATIVE");
    }

    #[test]
    fn empty_sentiment_is_malformed() {
        assert!(parse_sentiment("[]").is_err());
        assert!(parse_sentiment("[[]]").is_err());
        assert!(parse_sentiment("not json").is_err());
    }
}
