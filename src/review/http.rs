// Chat-completions reviewer over HTTP.
//
// Sends the prompt as a single user message at temperature 0 and returns
// the first choice. Works against OpenAI and the many self-hosted servers
// that speak the same API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{ManuscriptReviewer, ReviewFeedback};

pub const DEFAULT_REVIEW_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_REVIEW_MODEL: &str = "gpt-4o-mini";

/// Reviewer backed by a chat completions endpoint.
pub struct HttpReviewer {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl HttpReviewer {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ManuscriptReviewer for HttpReviewer {
    async fn review(&self, prompt: &str) -> Result<ReviewFeedback> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call review API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Review API returned {}: {}", status, body);
        }

        let result: ChatResponse = response
            .json()
            .await
            .context("Failed to parse review API response")?;

        let content = first_choice_content(&result)
            .context("Review API response contained no choices")?
            .to_string();

        debug!(
            model = %result.model,
            prompt_chars = prompt.chars().count(),
            feedback_chars = content.chars().count(),
            "Received review"
        );

        Ok(ReviewFeedback {
            model: result.model,
            content,
            reviewed_at: Utc::now().to_rfc3339(),
        })
    }
}

fn first_choice_content(response: &ChatResponse) -> Option<&str> {
    response
        .choices
        .first()
        .map(|choice| choice.message.content.as_str())
}

// --- Chat completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}
