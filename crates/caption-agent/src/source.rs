//! Generation port.

use async_trait::async_trait;

use crate::client::CaptionClient;
use crate::error::Result;
use caption_models::GenerationRequest;

/// The dispatcher's generation seam.
///
/// Implemented by [`CaptionClient`] in production; tests substitute a
/// fake to script successes and failures.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Produce one caption, bounded by the client's request timeout.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

#[async_trait]
impl CaptionSource for CaptionClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.generate_caption(request).await
    }
}
