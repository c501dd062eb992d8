//! Streaming client for Vertex AI Gemini models.

use crate::vertex::decode_chunks;
use crate::{ChunkStream, GenerateContentRequest, GenerativeModel, VertexConfig};
use async_trait::async_trait;
use autoscreenwriter_error::{ConfigError, ConfigErrorKind, StreamError, StreamErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for one Gemini model on Vertex AI.
#[derive(Clone)]
pub struct VertexClient {
    client: Client,
    model: String,
    endpoint: String,
    access_token: String,
}

impl std::fmt::Debug for VertexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl VertexClient {
    /// Creates a client for `model` using the connection settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::HttpClient`] if the HTTP client cannot be built.
    #[instrument(skip(config), fields(project = %config.project(), region = %config.region()))]
    pub fn new(config: &VertexConfig, model: &str) -> Result<Self, ConfigError> {
        let model = model.to_string();
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }
        let client = builder
            .build()
            .map_err(|e| ConfigErrorKind::HttpClient(e.to_string()))?;
        let endpoint = config.stream_endpoint(&model);

        debug!(model = %model, url = %endpoint, "Created Vertex AI client");

        Ok(Self {
            client,
            model,
            endpoint,
            access_token: config.access_token().clone(),
        })
    }

    /// Streaming endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeModel for VertexClient {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn stream_generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<ChunkStream, StreamError> {
        debug!(
            contents = request.contents().len(),
            temperature = request.generation_config().temperature(),
            "Sending streaming request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                StreamError::new(StreamErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read error body: {}>", e));
            error!(status = %status, error = %message, "API error");
            return Err(StreamError::new(StreamErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let stream: ChunkStream = Box::pin(decode_chunks(response.bytes_stream()));
        Ok(stream)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
