use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::provider::PlanProvider;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API provider implementation
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<usize>,
    candidates_token_count: Option<usize>,
    total_token_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetails {
    message: String,
    status: Option<String>,
    code: Option<i64>,
}

impl GeminiProvider {
    pub fn new(
        api_key: String,
        model: String,
        temperature: Option<f32>,
        max_output_tokens: Option<u32>,
    ) -> Self {
        Self {
            api_key,
            model,
            base_url: BASE_URL.to_string(),
            temperature,
            max_output_tokens,
        }
    }
}

/// Pull the textual payload out of a response: the parts of the first
/// candidate joined together, or `None` when no text is present at any
/// level.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

#[async_trait]
impl PlanProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let client = reqwest::Client::new();

        let generation_config = if self.temperature.is_some() || self.max_output_tokens.is_some() {
            Some(GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            })
        } else {
            None
        };

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config,
        };

        let response = client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            if let Ok(error_response) = serde_json::from_str::<GeminiError>(&response_text) {
                return Err(anyhow!(
                    "Gemini API error: {} (status: {:?}, code: {:?})",
                    error_response.error.message,
                    error_response.error.status,
                    error_response.error.code
                ));
            } else {
                return Err(anyhow!(
                    "Gemini API error (status {}): {}",
                    status,
                    response_text
                ));
            }
        }

        let gemini_response: GenerateContentResponse =
            serde_json::from_str(&response_text).context("Failed to parse Gemini response")?;

        if let Some(candidate) = gemini_response.candidates.first() {
            if candidate.finish_reason.as_deref() == Some("MAX_TOKENS") {
                warn!("Gemini response was truncated by the output token limit; the plan may be incomplete.");
            }
        }

        if let Some(usage) = &gemini_response.usage_metadata {
            info!(
                "Gemini token usage - Prompt: {:?}, Candidates: {:?}, Total: {:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Ok(extract_text(&gemini_response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_a_full_response() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {
                        "content": {"parts": [{"text": "Day 1: "}, {"text": "oatmeal."}]},
                        "finishReason": "STOP"
                    }
                ],
                "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 400, "totalTokenCount": 520}
            }"#,
        )
        .unwrap();
        assert_eq!(extract_text(&response).as_deref(), Some("Day 1: oatmeal."));
    }

    #[test]
    fn no_candidates_yields_none() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(&response), None);
    }

    #[test]
    fn candidate_without_content_yields_none() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(extract_text(&response), None);
    }

    #[test]
    fn empty_parts_yield_none() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert_eq!(extract_text(&response), None);
    }

    #[test]
    fn error_envelope_parses() {
        let err: GeminiError = serde_json::from_str(
            r#"{"error": {"message": "API key not valid", "status": "INVALID_ARGUMENT", "code": 400}}"#,
        )
        .unwrap();
        assert_eq!(err.error.message, "API key not valid");
        assert_eq!(err.error.code, Some(400));
    }

    #[test]
    fn request_body_uses_wire_names() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some("hello".to_string()),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: Some(2048),
            }),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }
}
