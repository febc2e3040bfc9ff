pub mod gemini;

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use self::gemini::GeminiClient;

/// Shortest credential the completion service could plausibly accept.
/// Anything below this is treated as "not configured" rather than an error.
pub const MIN_API_KEY_LEN: usize = 20;

pub fn is_configured(api_key: &str) -> bool {
    api_key.trim().len() >= MIN_API_KEY_LEN
}

#[derive(Deserialize, Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

/// Any transport failure, non-success status, or empty completion collapses
/// into this one error; callers route every variant to the fallback path.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service returned an empty response")]
    Empty,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, CompletionError>;
}

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

pub fn new_client(
    config: &CompletionConfig
) -> Result<Arc<dyn CompletionClient>, Box<dyn std::error::Error + Send + Sync>> {
    let client = GeminiClient::from_config(config)?;
    Ok(Arc::new(client))
}
