use crate::config::AiConfig;
use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::backend::{AnalysisBackend, BackendResponse};

/// Backend that calls the Google generative-language HTTP API
/// (`models/{model}:generateContent`).
pub struct GeminiBackend {
    base_url: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl GeminiBackend {
    pub fn new(config: &AiConfig, api_key: &str) -> Result<Self, CoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Config(format!("building HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.to_string(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

// ── Wire types for generateContent ──

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

impl AnalysisBackend for GeminiBackend {
    fn execute(&self, prompt: &str, json_schema: Option<&str>) -> Result<BackendResponse, CoreError> {
        let generation_config = match json_schema {
            Some(schema) => {
                let schema: Value = serde_json::from_str(schema).map_err(|e| {
                    CoreError::Config(format!("output schema is not valid JSON: {e}"))
                })?;
                Some(GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: schema,
                })
            }
            None => None,
        };

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
        };

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::ModelInvocation(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else if e.is_connect() {
                    CoreError::ModelInvocation(format!(
                        "could not connect to {}: {e}",
                        self.base_url
                    ))
                } else {
                    CoreError::ModelInvocation(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CoreError::ModelInvocation(format!(
                "provider returned HTTP {}: {}",
                status.as_u16(),
                truncate_for_error(&body)
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| CoreError::ModelInvocation(format!("unreadable provider response: {e}")))?;

        let (input_tokens, output_tokens) = parsed
            .usage_metadata
            .map(|u| (u.prompt_token_count, u.candidates_token_count))
            .unwrap_or((0, 0));

        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            CoreError::ModelInvocation("provider returned no candidates".to_string())
        })?;

        let text: String = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(CoreError::ModelInvocation(format!(
                "provider returned empty content (finish_reason: {reason})"
            )));
        }

        Ok(BackendResponse {
            text,
            input_tokens,
            output_tokens,
        })
    }
}

fn truncate_for_error(s: &str) -> &str {
    if s.len() <= 500 {
        s
    } else {
        let mut i = 500;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        &s[..i]
    }
}
