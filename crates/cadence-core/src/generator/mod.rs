//! Study plan generation through an external completion service.
//!
//! [`StudyPlanGenerator`] validates the request, builds the prompt and a JSON
//! schema for [`StudyPlan`], and parses the reply. The transport sits behind
//! the [`CompletionClient`] trait; [`OpenAiClient`] is the production
//! implementation.

use std::future::Future;

use jiff::civil::Date;
use thiserror::Error;

use crate::models::StudyPlan;

pub mod openai;
pub mod prompt;

pub use openai::{OpenAiClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Why a generation request failed, worded for the end user.
///
/// Every failure ends the request; all are recoverable by trying again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Missing required fields")]
    MissingInput,
    #[error("Invalid API key format")]
    InvalidKeyFormat,
    #[error("Invalid API key")]
    InvalidKey,
    #[error("Rate limit exceeded. Please try again.")]
    RateLimited,
    #[error("Out of OpenAI credits. Please add credits to your account.")]
    QuotaExhausted,
    #[error("Model not available")]
    ModelUnavailable,
    #[error("No response from AI")]
    EmptyResponse,
    #[error("AI response did not match the study plan format: {0}")]
    MalformedResponse(String),
    /// Unclassified service error, carrying its message
    #[error("{0}")]
    Service(String),
    #[error("Failed to generate plan: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Maps a failed service response onto a user-facing error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::generator::GenerationError;
    ///
    /// assert_eq!(
    ///     GenerationError::classify(Some(401), None, "Incorrect API key provided"),
    ///     GenerationError::InvalidKey
    /// );
    /// assert_eq!(
    ///     GenerationError::classify(Some(429), Some("insufficient_quota"), "quota"),
    ///     GenerationError::QuotaExhausted
    /// );
    /// ```
    pub fn classify(status: Option<u16>, code: Option<&str>, message: &str) -> Self {
        // OpenAI reports exhausted credit as a 429, so quota wins over rate limiting
        if status == Some(401) || message.contains("Incorrect") {
            GenerationError::InvalidKey
        } else if code == Some("insufficient_quota") || message.contains("quota") {
            GenerationError::QuotaExhausted
        } else if status == Some(429) {
            GenerationError::RateLimited
        } else if message.contains("model") {
            GenerationError::ModelUnavailable
        } else if message.trim().is_empty() {
            GenerationError::Service("Failed to generate plan".to_string())
        } else {
            GenerationError::Service(message.to_string())
        }
    }
}

/// One completion request, ready to send.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
    pub user_message: String,
    /// JSON schema the reply must conform to
    pub response_schema: serde_json::Value,
}

/// Transport to a text-completion service.
pub trait CompletionClient: Send + Sync {
    /// Sends the request and returns the reply content, `None` if the
    /// service answered without any.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<Option<String>, GenerationError>> + Send;
}

/// JSON schema of [`StudyPlan`] as sent with each request.
pub fn study_plan_schema() -> serde_json::Value {
    let mut schema = schemars::schema_for!(StudyPlan);
    if let Some(object) = schema.as_object_mut() {
        object.insert("additionalProperties".to_string(), false.into());
    }
    schema.to_value()
}

/// Builds study plans from free-text schedule descriptions.
pub struct StudyPlanGenerator<C> {
    client: C,
    model: String,
}

impl<C: CompletionClient> StudyPlanGenerator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generates a plan for the week containing `today`.
    ///
    /// The input must be non-blank and the key must carry the `sk-` prefix.
    /// The reply must parse as a complete [`StudyPlan`] with seven days;
    /// anything else fails the request as a whole.
    pub async fn generate(
        &self,
        input: &str,
        api_key: &str,
        today: Date,
    ) -> Result<StudyPlan, GenerationError> {
        if input.trim().is_empty() || api_key.trim().is_empty() {
            return Err(GenerationError::MissingInput);
        }
        if !api_key.trim().starts_with("sk-") {
            return Err(GenerationError::InvalidKeyFormat);
        }

        let request = CompletionRequest {
            api_key: api_key.trim().to_string(),
            model: self.model.clone(),
            system_prompt: prompt::SYSTEM_PROMPT.to_string(),
            user_message: prompt::user_message(today, input),
            response_schema: study_plan_schema(),
        };

        let content = self
            .client
            .complete(&request)
            .await?
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        parse_plan(&content)
    }
}

/// Parses a reply into a plan, rejecting anything that is not a complete
/// seven-day plan.
pub fn parse_plan(content: &str) -> Result<StudyPlan, GenerationError> {
    let plan: StudyPlan = serde_json::from_str(content)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
    plan.validate_shape()
        .map_err(GenerationError::MalformedResponse)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use jiff::civil::date;
    use serde_json::json;

    use super::*;

    /// Replays one canned reply and records the request it was given.
    struct CannedClient {
        reply: Result<Option<String>, GenerationError>,
        seen: Mutex<Option<CompletionRequest>>,
    }

    impl CannedClient {
        fn new(reply: Result<Option<String>, GenerationError>) -> Self {
            Self {
                reply,
                seen: Mutex::new(None),
            }
        }
    }

    impl CompletionClient for CannedClient {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<Option<String>, GenerationError> {
            *self.seen.lock().unwrap() = Some(request.clone());
            self.reply.clone()
        }
    }

    fn plan_json(days: usize) -> String {
        let day = json!({
            "day": "Monday",
            "date": "Oct 14",
            "sessions": [{"time": "8:00 AM - 10:00 AM", "type": "study", "title": "Anatomy", "icon": "📚", "focus": "Bones"}]
        });
        json!({
            "urgent": [],
            "days": vec![day; days],
            "stats": {"totalHours": 2, "subjects": [{"name": "Anatomy", "hours": 2, "color": "#8B5CF6"}]},
            "tips": ["Sleep well"]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_generate_parses_valid_plan() {
        let generator = StudyPlanGenerator::new(CannedClient::new(Ok(Some(plan_json(7)))));
        let plan = generator
            .generate("Classes Mon-Wed", "sk-abc", date(2024, 10, 15))
            .await
            .unwrap();
        assert_eq!(plan.days.len(), 7);

        let seen = generator.client.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.model, DEFAULT_MODEL);
        assert_eq!(seen.api_key, "sk-abc");
        assert!(seen.user_message.contains("Today is Tuesday, Oct 15."));
        assert!(seen.user_message.contains("Classes Mon-Wed"));
    }

    #[tokio::test]
    async fn test_generate_rejects_bad_input_before_calling_service() {
        let generator = StudyPlanGenerator::new(CannedClient::new(Ok(Some(plan_json(7)))));
        let today = date(2024, 10, 15);

        assert_eq!(
            generator.generate("   ", "sk-abc", today).await.unwrap_err(),
            GenerationError::MissingInput
        );
        assert_eq!(
            generator.generate("text", "", today).await.unwrap_err(),
            GenerationError::MissingInput
        );
        assert_eq!(
            generator.generate("text", "pk-abc", today).await.unwrap_err(),
            GenerationError::InvalidKeyFormat
        );
        assert!(generator.client.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_generate_empty_reply() {
        for reply in [None, Some("  ".to_string())] {
            let generator = StudyPlanGenerator::new(CannedClient::new(Ok(reply)));
            assert_eq!(
                generator
                    .generate("text", "sk-abc", date(2024, 10, 15))
                    .await
                    .unwrap_err(),
                GenerationError::EmptyResponse
            );
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_partial_plans() {
        let generator = StudyPlanGenerator::new(CannedClient::new(Ok(Some(plan_json(5)))));
        let err = generator
            .generate("text", "sk-abc", date(2024, 10, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));

        let generator =
            StudyPlanGenerator::new(CannedClient::new(Ok(Some("not json".to_string()))));
        let err = generator
            .generate("text", "sk-abc", date(2024, 10, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_passes_service_errors_through() {
        let generator =
            StudyPlanGenerator::new(CannedClient::new(Err(GenerationError::RateLimited)))
                .with_model("gpt-4o");
        assert_eq!(
            generator
                .generate("text", "sk-abc", date(2024, 10, 15))
                .await
                .unwrap_err(),
            GenerationError::RateLimited
        );
        let seen = generator.client.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.model, "gpt-4o");
    }

    #[test]
    fn test_classify_service_failures() {
        assert_eq!(
            GenerationError::classify(Some(401), None, ""),
            GenerationError::InvalidKey
        );
        assert_eq!(
            GenerationError::classify(Some(400), None, "Incorrect API key provided"),
            GenerationError::InvalidKey
        );
        assert_eq!(
            GenerationError::classify(Some(429), None, "Too many requests"),
            GenerationError::RateLimited
        );
        assert_eq!(
            GenerationError::classify(Some(429), Some("insufficient_quota"), ""),
            GenerationError::QuotaExhausted
        );
        assert_eq!(
            GenerationError::classify(Some(404), None, "The model `gpt-9` does not exist"),
            GenerationError::ModelUnavailable
        );
        assert_eq!(
            GenerationError::classify(Some(500), None, "Server exploded"),
            GenerationError::Service("Server exploded".to_string())
        );
        assert_eq!(
            GenerationError::classify(Some(500), None, "").to_string(),
            "Failed to generate plan"
        );
    }

    #[test]
    fn test_schema_describes_plan() {
        let schema = study_plan_schema();
        assert_eq!(schema["additionalProperties"], json!(false));
        let required = schema["required"].as_array().unwrap();
        for field in ["urgent", "days", "stats", "tips"] {
            assert!(required.contains(&json!(field)), "{field}");
        }
    }
}
