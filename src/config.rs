use std::env;

use anyhow::{Context, Result};

use crate::integrity::score::IntegrityThresholds;
use crate::review::http::{DEFAULT_REVIEW_API_URL, DEFAULT_REVIEW_MODEL};
use crate::sanitize::emoji::AvatarPool;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every value has a
/// default except the review API key.
#[derive(Debug, Clone)]
pub struct Config {
    /// Emoji pool and adult fallback avatar
    pub avatar_pool: AvatarPool,
    /// Paste-ratio flag threshold
    pub thresholds: IntegrityThresholds,
    /// Chat completions endpoint for the manuscript reviewer
    pub review_api_url: String,
    pub review_api_key: String,
    pub review_model: String,
    /// Web listener address (INKGUARD_BIND, INKGUARD_PORT)
    pub bind: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            avatar_pool: AvatarPool::default(),
            thresholds: IntegrityThresholds::default(),
            review_api_url: DEFAULT_REVIEW_API_URL.to_string(),
            review_api_key: String::new(),
            review_model: DEFAULT_REVIEW_MODEL.to_string(),
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        // Unset or blank values fall back to the stock glyphs and avatar
        let avatar_pool = AvatarPool::new(
            env::var("INKGUARD_AVATAR_EMOJI")
                .map(|list| parse_emoji_list(&list))
                .unwrap_or_default(),
            env::var("INKGUARD_DEFAULT_AVATAR").unwrap_or_default(),
        );

        let thresholds = match env::var("INKGUARD_FLAG_THRESHOLD") {
            Ok(raw) => IntegrityThresholds {
                flag_threshold: parse_threshold(&raw)?,
            },
            Err(_) => defaults.thresholds,
        };

        let port = match env::var("INKGUARD_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("INKGUARD_PORT is not a valid port: {raw:?}"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            avatar_pool,
            thresholds,
            review_api_url: env::var("REVIEW_API_URL").unwrap_or(defaults.review_api_url),
            review_api_key: env::var("REVIEW_API_KEY").unwrap_or_default(),
            review_model: env::var("REVIEW_MODEL").unwrap_or(defaults.review_model),
            bind: env::var("INKGUARD_BIND").unwrap_or(defaults.bind),
            port,
        })
    }

    /// Check that the reviewer is configured.
    /// Call this before any operation that sends a prompt to the model.
    pub fn require_reviewer(&self) -> Result<()> {
        if self.review_api_key.is_empty() {
            anyhow::bail!(
                "REVIEW_API_KEY not set. Add it to your .env file.\n\
                 Set REVIEW_API_URL and REVIEW_MODEL too if you are not using the default provider."
            );
        }
        Ok(())
    }
}

/// Split a comma-separated emoji list. Blank entries are dropped by
/// `AvatarPool::new`.
pub fn parse_emoji_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|e| e.trim().to_string()).collect()
}

/// Parse a flag threshold. Must be a finite number.
pub fn parse_threshold(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("INKGUARD_FLAG_THRESHOLD is not a number: {raw:?}"))?;
    if !value.is_finite() {
        anyhow::bail!("INKGUARD_FLAG_THRESHOLD must be finite, got {raw:?}");
    }
    Ok(value)
}
