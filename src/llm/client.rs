//! Remote generative-text service

use crate::error::{HinglishError, Result};
use anyhow::{bail, Context};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// One generation call: model, user content, system directive, sampling temperature
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub contents: String,
    pub system_instruction: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationResponse {
    pub text: Option<String>,
}

pub trait GenerativeTextService: Send + Sync {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = anyhow::Result<GenerationResponse>> + Send;
}

/// Client for the Gemini `generateContent` REST endpoint
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("hinglish-translator/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| HinglishError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

impl GenerativeTextService for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<GenerationResponse> {
        let url = self.endpoint(&request.model);
        debug!("POST {} ({} chars of content)", url, request.contents.len());

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentBody::from_request(request))
            .send()
            .await
            .context("request to generative-text service failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("generative-text service returned {}: {}", status, body);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("malformed generateContent response")?;

        Ok(GenerationResponse { text: parsed.text() })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

impl<'a> GenerateContentBody<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &request.contents }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: &request.system_instruction }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated. Thought parts are skipped.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.iter().all(|p| p.text.is_none()) {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-3-flash-preview".to_string(),
            contents: "How are you doing today?".to_string(),
            system_instruction: "Translate to Hinglish".to_string(),
            temperature: 0.7,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let req = request();
        let body = serde_json::to_value(GenerateContentBody::from_request(&req)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "How are you doing today?");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Translate to Hinglish");
        assert!(body["systemInstruction"].get("role").is_none());
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(
            "key",
            "https://generativelanguage.googleapis.com/v1beta/",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "thinking...", "thought": true},
                        {"text": "Aap kaise "},
                        {"text": "ho aaj?"}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 42}
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Aap kaise ho aaj?"));
    }

    #[test]
    fn test_response_without_text() {
        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert_eq!(blocked.text(), None);

        let no_parts: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "MAX_TOKENS"}]
        }))
        .unwrap();
        assert_eq!(no_parts.text(), None);
    }
}
