use crate::utils::error::Result;
use async_trait::async_trait;

/// Port to the external text-completion service: prompt in, completion text
/// out. One call per upload; no retry or chunking happens behind this trait.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
