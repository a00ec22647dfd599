//! HTTP client for a Gemini-style generate-content endpoint.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::client::{AssistantClient, AssistantError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiAssistant {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiAssistant {
    pub fn new(api_key: SecretString) -> Self {
        Self::with_endpoint(api_key, DEFAULT_BASE_URL, DEFAULT_MODEL)
    }

    /// Point the client at an alternate endpoint or model, mainly for tests
    /// against a local stub.
    pub fn with_endpoint(
        api_key: SecretString,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[async_trait]
impl AssistantClient for GeminiAssistant {
    async fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        if prompt.trim().is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret(),
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let response = self.http.post(&url).json(&body).send().await.map_err(|e| {
            error!(error = %e, "assistant request failed");
            AssistantError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "assistant returned an error status");
            return Err(AssistantError::Request(format!("status {status}")));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = %e, "assistant response could not be decoded");
            AssistantError::Request(e.to_string())
        })?;

        let text: String = parsed
            .candidates
            .into_iter()
            .flatten()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use crate::client::{AssistantClient, AssistantError};

    use super::GeminiAssistant;

    fn client() -> GeminiAssistant {
        GeminiAssistant::new(SecretString::from("test-key".to_owned()))
    }

    #[tokio::test]
    async fn blank_prompts_are_rejected_before_any_request() {
        let error = client().complete("   ").await.expect_err("blank prompt");
        assert!(matches!(error, AssistantError::EmptyPrompt));
    }

    #[tokio::test]
    async fn transport_failures_collapse_to_a_request_error() {
        // Unroutable loopback port; no request should ever succeed here.
        let client = GeminiAssistant::with_endpoint(
            SecretString::from("test-key".to_owned()),
            "http://127.0.0.1:1",
            "gemini-2.5-flash",
        );
        let error = client.complete("שאלה").await.expect_err("connection refused");
        assert!(matches!(error, AssistantError::Request(_)));
        assert_eq!(error.user_message(), "אירעה שגיאה. נסה שוב.");
    }
}
