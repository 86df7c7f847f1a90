// Reviewer trait and the feedback it returns.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Feedback text from the external reviewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFeedback {
    /// Model that produced the feedback, as reported by the provider
    pub model: String,
    pub content: String,
    /// RFC 3339 timestamp of when the response was received
    pub reviewed_at: String,
}

/// Sends a finished review prompt to an evaluator. Implementations are
/// async because every real provider sits behind HTTP.
#[async_trait]
pub trait ManuscriptReviewer: Send + Sync {
    async fn review(&self, prompt: &str) -> Result<ReviewFeedback>;
}
