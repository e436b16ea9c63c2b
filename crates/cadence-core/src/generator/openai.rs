//! OpenAI chat-completions client.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use super::{CompletionClient, CompletionRequest, GenerationError};

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// HTTP client posting JSON-schema constrained chat completions.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenAiClient {
    /// Creates a client for the given endpoint, or [`DEFAULT_ENDPOINT`].
    pub fn new(endpoint: Option<String>) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cadence/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }

    fn request_body(request: &CompletionRequest) -> serde_json::Value {
        json!({
            "model": request.model,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.user_message},
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "study_plan",
                    "schema": request.response_schema,
                    "strict": false,
                },
            },
        })
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, GenerationError> {
        log::debug!("Requesting completion from {} ({})", self.endpoint, request.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&request.api_key)
            .json(&Self::request_body(request))
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => (parsed.error.code, parsed.error.message),
                Err(_) => (None, body),
            };
            log::warn!("Completion request failed with {status}: {message}");
            return Err(GenerationError::classify(
                Some(status.as_u16()),
                code.as_deref(),
                &message,
            ));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            api_key: "sk-test".to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: "system".to_string(),
            user_message: "user".to_string(),
            response_schema: json!({"type": "object"}),
        };
        let body = OpenAiClient::request_body(&request);

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "user");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "study_plan");
        assert_eq!(body["response_format"]["json_schema"]["schema"]["type"], "object");
    }

    #[test]
    fn test_completion_response_parsing() {
        let parsed: ChatCompletion =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":"{}"}}]}"#)
                .unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("{}"));

        let refusal: ChatCompletion =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(refusal.choices[0].message.content.is_none());
    }

    #[test]
    fn test_error_body_parsing() {
        let parsed: ApiErrorBody = serde_json::from_str(
            r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":"insufficient_quota"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.error.code.as_deref(), Some("insufficient_quota"));
    }
}
