//! The seam between the pipeline and a model service.

use crate::GenerateContentRequest;
use async_trait::async_trait;
use autoscreenwriter_core::ResponseChunk;
use autoscreenwriter_error::StreamError;
use futures_util::Stream;
use std::pin::Pin;

/// Lazily produced response chunks.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<ResponseChunk, StreamError>> + Send>>;

/// A generative model that answers with a stream of chunks.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Start a streaming generation.
    ///
    /// Errors returned here happen before any chunk exists (connection
    /// refused, non-success status). Failures after that arrive as items of
    /// the returned stream.
    async fn stream_generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<ChunkStream, StreamError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
