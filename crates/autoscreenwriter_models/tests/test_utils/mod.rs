//! Test utilities for model tests.
//!
//! This module provides a scripted in-memory model.

use async_trait::async_trait;
use autoscreenwriter_core::ResponseChunk;
use autoscreenwriter_error::StreamError;
use autoscreenwriter_models::{ChunkStream, GenerateContentRequest, GenerativeModel};
use std::sync::Mutex;

/// Model that replays a fixed chunk script and records requests.
pub struct MockModel {
    name: String,
    start_error: Option<StreamError>,
    script: Vec<Result<ResponseChunk, StreamError>>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

#[allow(dead_code)]
impl MockModel {
    /// Model answering with `script` on every call.
    pub fn new(name: &str, script: Vec<Result<ResponseChunk, StreamError>>) -> Self {
        Self {
            name: name.to_string(),
            start_error: None,
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Model answering with one text chunk per fragment.
    pub fn with_text(name: &str, fragments: &[&str]) -> Self {
        Self::new(
            name,
            fragments
                .iter()
                .map(|f| Ok(ResponseChunk::from_text(*f)))
                .collect(),
        )
    }

    /// Model whose call fails before streaming.
    pub fn failing(name: &str, error: StreamError) -> Self {
        Self {
            start_error: Some(error),
            ..Self::new(name, Vec::new())
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().expect("Mock lock poisoned").clone()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn stream_generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<ChunkStream, StreamError> {
        self.requests
            .lock()
            .expect("Mock lock poisoned")
            .push(request.clone());
        if let Some(error) = &self.start_error {
            return Err(error.clone());
        }
        Ok(Box::pin(futures_util::stream::iter(self.script.clone())))
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
