use crate::constants::{endpoints, models};
use crate::error::{FolioError, Result};
use crate::llm::traits::*;
use serde::{Deserialize, Serialize};

/// Client for the Generative Language `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: models::DEFAULT_GEMINI_MODEL.to_string(),
            base_url: endpoints::GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            endpoints::GEMINI_API_VERSION,
            self.model
        )
    }

    fn build_request_body(&self, request: &GenerateRequest) -> GenerateContentRequest {
        let system_instruction = if request.system_instruction.is_empty() {
            None
        } else {
            Some(Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            })
        };

        GenerateContentRequest {
            system_instruction,
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Joins the text parts of the first candidate. Missing pieces yield "".
fn extract_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
        .unwrap_or_else(|| body.to_string())
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let url = self.endpoint();
        let body = self.build_request_body(request);

        tracing::debug!(
            model = %self.model,
            prompt_len = request.prompt.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header(endpoints::GEMINI_API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(FolioError::Llm(format!(
                "Gemini API error ({}): {}",
                status,
                error_message(&response_text)
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)?;

        Ok(extract_text(parsed))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let client = GeminiClient::new("key");
        let body = client.build_request_body(&GenerateRequest::new("persona", "User: hi"));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "persona");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "User: hi");
    }

    #[test]
    fn test_empty_system_instruction_is_omitted() {
        let client = GeminiClient::new("key");
        let body = client.build_request_body(&GenerateRequest::new("", "hi"));
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new("key")
            .with_model("gemini-test")
            .with_base_url("http://localhost:9999/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}}]
        }))
        .unwrap();
        assert_eq!(extract_text(response), "Hello world");
    }

    #[test]
    fn test_extract_text_missing_candidates_is_empty() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(extract_text(response), "");
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "API key not valid");
        assert_eq!(error_message("plain failure"), "plain failure");
    }
}
