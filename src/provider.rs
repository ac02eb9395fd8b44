use anyhow::Result;
use async_trait::async_trait;

/// Trait representing a plan-generation backend.
#[async_trait]
pub trait PlanProvider: Send + Sync {
    /// Name of the provider.
    fn name(&self) -> &str;

    /// Model identifier used for generation.
    fn model_name(&self) -> &str;

    /// Send a prompt and return the textual payload of the response.
    ///
    /// `Ok(None)` means the service answered but the response carried
    /// no text; transport and API errors surface as `Err`.
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;
}
