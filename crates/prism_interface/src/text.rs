//! Text generation backend trait.

use async_trait::async_trait;
use prism_core::CompletionRequest;
use prism_error::PrismResult;

/// A hosted service that turns a prompt into text.
///
/// Implementations make exactly one request per call and do not retry.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Generate text for the request.
    ///
    /// # Errors
    ///
    /// Any transport, authentication, quota or response-shape failure.
    async fn complete(&self, request: &CompletionRequest) -> PrismResult<String>;

    /// Provider name for logs.
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: TextBackend + ?Sized> TextBackend for std::sync::Arc<T> {
    async fn complete(&self, request: &CompletionRequest) -> PrismResult<String> {
        (**self).complete(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
