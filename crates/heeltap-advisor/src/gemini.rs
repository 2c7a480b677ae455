//! Gemini text-generation client
//!
//! One `generateContent` call per request: the prompt goes in as a single
//! user part, and the text parts of the first candidate come back joined.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AdvisorConfig;
use crate::error::{AdviceError, AdviceResult};
use crate::generator::TextGenerator;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Joined text of the first candidate; empty when the service sent none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Extract the generated text from a raw `generateContent` response body.
pub fn parse_response_text(body: &str) -> AdviceResult<String> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    Ok(response.text())
}

fn is_loopback(endpoint: &str) -> bool {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
        .is_some_and(|host| matches!(host.as_str(), "localhost" | "127.0.0.1" | "[::1]"))
}

/// Gemini client for advice generation
pub struct GeminiClient {
    config: AdvisorConfig,
    api_key: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Fails with `AdviceError::NotConfigured` when the config carries no key.
    pub fn new(config: AdvisorConfig) -> AdviceResult<Self> {
        let api_key = config.api_key.clone().ok_or(AdviceError::NotConfigured)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("heeltap-advisor/", env!("CARGO_PKG_VERSION")));
        // Local endpoints are never reached through a proxy.
        if is_loopback(&config.endpoint) {
            builder = builder.no_proxy();
        }
        let http_client = builder
            .build()
            .map_err(|e| AdviceError::Client(e.to_string()))?;

        Ok(GeminiClient {
            config,
            api_key,
            http_client,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> AdviceResult<String> {
        let url = self.config.generate_url();
        info!(model = %self.config.model, "Requesting advice");

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AdviceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let generated = parse_response_text(&text)?;
        debug!(chars = generated.len(), "Advice received");
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_parse_joins_first_candidate_parts() {
        let body = r##"{
            "candidates": [
                {"content": {"parts": [{"text": "# Tips\n"}, {"text": "- Keep it dry"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"##;
        assert_eq!(parse_response_text(body).unwrap(), "# Tips\n- Keep it dry");
    }

    #[test]
    fn test_parse_without_candidates_is_empty() {
        assert_eq!(parse_response_text("{}").unwrap(), "");
        assert_eq!(
            parse_response_text(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap(),
            ""
        );
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_response_text("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, AdviceError::MalformedResponse(_)));
    }

    #[test]
    fn test_loopback_detection() {
        assert!(is_loopback("http://127.0.0.1:8080"));
        assert!(is_loopback("http://localhost/v1beta"));
        assert!(!is_loopback("https://generativelanguage.googleapis.com/v1beta"));
        assert!(!is_loopback("not a url"));
    }

    #[test]
    fn test_client_requires_key() {
        let config = AdvisorConfig::new("http://localhost", "m");
        assert!(matches!(
            GeminiClient::new(config),
            Err(AdviceError::NotConfigured)
        ));
    }
}
