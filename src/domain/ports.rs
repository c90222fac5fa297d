use crate::utils::error::Result;
use async_trait::async_trait;

/// A text-generation provider, called once per request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Display name reported by the API.
    fn provider_name(&self) -> &str;

    /// Whether credentials are present; no network call is made.
    fn is_configured(&self) -> bool;

    /// Sends a single prompt and returns the raw generated text, which may be
    /// empty when the provider produced no content.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
