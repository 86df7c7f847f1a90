// Data models — the records that cross the boundary with the calling layer.
//
// Input profiles come from the caller's store; sanitized profiles and
// integrity metadata go back out into API responses. Field names are
// camelCase on the wire to match the web front end.

use serde::{Deserialize, Deserializer, Serialize};

/// An author's identity value. The platform uses both numeric row ids and
/// string ids, so either is accepted and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorId {
    Number(i64),
    Text(String),
}

impl AuthorId {
    /// Parse a command-line or path value: canonical integers become
    /// `Number`, anything else (including "007") is kept as text so the
    /// string form never changes.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => AuthorId::Number(n),
            _ => AuthorId::Text(raw.to_string()),
        }
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorId::Number(n) => write!(f, "{n}"),
            AuthorId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for AuthorId {
    fn from(n: i64) -> Self {
        AuthorId::Number(n)
    }
}

impl From<&str> for AuthorId {
    fn from(s: &str) -> Self {
        AuthorId::Text(s.to_string())
    }
}

/// An internal author record as stored by the platform.
///
/// `is_minor` is decided upstream from verified birth date and guardian
/// consent. Nothing in this crate derives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    pub id: AuthorId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_minor: bool,
    #[serde(default)]
    pub pen_name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

/// Treat an explicit JSON `null` the same as a missing key. Store rows
/// often carry NULL surnames.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Display label shown instead of an age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "Youth Author")]
    YouthAuthor,
    #[serde(rename = "Author")]
    Author,
}

impl AgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::YouthAuthor => "Youth Author",
            AgeCategory::Author => "Author",
        }
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A public-safe author record.
///
/// Has no email, birth date or numeric age field, so a sanitized minor
/// profile cannot carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedAuthorProfile {
    pub id: AuthorId,
    pub display_name: String,
    pub avatar: String,
    pub age_display: AgeCategory,
    pub is_minor: bool,
    pub pen_name: Option<String>,
}

/// Paste telemetry for one submission, with the derived ratio and flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityMetadata {
    pub paste_count: i64,
    pub total_characters: i64,
    pub paste_ratio: f64,
    pub is_flagged: bool,
}

/// What the editor sends when a submission is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionTelemetry {
    pub task: String,
    pub manuscript_text: String,
    #[serde(default)]
    pub paste_count: i64,
    #[serde(default)]
    pub total_characters: i64,
}

/// Integrity metadata plus the prompt ready for the external reviewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEvaluation {
    pub integrity: IntegrityMetadata,
    pub prompt: String,
}
