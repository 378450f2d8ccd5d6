//! Google Gemini text generation client.

pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::Result;

pub use http::GeminiClient;

/// One-shot text completion, the seam between the fetcher and the remote model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` once and return the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
