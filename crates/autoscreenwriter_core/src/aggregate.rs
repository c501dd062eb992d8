//! Streamed response aggregation.
//!
//! Chunks are consumed once, in order, as they arrive. A chunk whose text
//! cannot be extracted is handled by the [`AggregationPolicy`] and never
//! stops aggregation. A failure of the stream itself ends aggregation
//! immediately and no partial text is returned.

use crate::ResponseChunk;
use autoscreenwriter_error::StreamError;
use derive_getters::Getters;
use futures_util::{Stream, StreamExt, pin_mut};
use serde::{Deserialize, Serialize};

/// How unreadable chunks are treated and how fragments are joined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum AggregationPolicy {
    /// Unreadable chunks become empty fragments; fragments join with `" "`.
    PlainText,
    /// Unreadable chunks are dropped; fragments join with `""`.
    Vision,
}

impl AggregationPolicy {
    /// Separator placed between fragments.
    pub fn separator(self) -> &'static str {
        match self {
            AggregationPolicy::PlainText => " ",
            AggregationPolicy::Vision => "",
        }
    }

    /// Whether an unreadable chunk leaves an empty placeholder.
    pub fn keeps_placeholders(self) -> bool {
        matches!(self, AggregationPolicy::PlainText)
    }
}

/// Final text of an aggregation plus chunk accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_more::Display)]
#[display("{text}")]
pub struct AggregatedResponse {
    /// Joined text
    text: String,
    /// Chunks received from the stream
    chunks: usize,
    /// Chunks whose text could not be extracted
    failed_chunks: usize,
}

impl AggregatedResponse {
    /// Consume into the joined text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Incremental aggregation state.
///
/// `accept` is the per-chunk transition; `finish` moves to the terminal
/// state by value, so no chunk can be accepted afterwards.
#[derive(Debug, Clone)]
pub struct Aggregator {
    policy: AggregationPolicy,
    fragments: Vec<String>,
    chunks: usize,
    failed_chunks: usize,
}

impl Aggregator {
    /// Start an empty aggregation.
    pub fn new(policy: AggregationPolicy) -> Self {
        Self {
            policy,
            fragments: Vec::new(),
            chunks: 0,
            failed_chunks: 0,
        }
    }

    /// Policy in effect.
    pub fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Extract one chunk's text and record it.
    ///
    /// Returns the fragment appended to the result, or `None` when the chunk
    /// was dropped.
    pub fn accept(&mut self, chunk: &ResponseChunk) -> Option<&str> {
        self.chunks += 1;
        match chunk.text() {
            Ok(text) => {
                self.fragments.push(text);
            }
            Err(e) => {
                self.failed_chunks += 1;
                tracing::debug!(
                    chunk = self.chunks,
                    policy = %self.policy,
                    error = %e,
                    "Chunk has no extractable text"
                );
                if !self.policy.keeps_placeholders() {
                    return None;
                }
                self.fragments.push(String::new());
            }
        }
        self.fragments.last().map(String::as_str)
    }

    /// Join the collected fragments.
    pub fn finish(self) -> AggregatedResponse {
        AggregatedResponse {
            text: self.fragments.join(self.policy.separator()),
            chunks: self.chunks,
            failed_chunks: self.failed_chunks,
        }
    }
}

/// Consume a chunk stream and join its text under `policy`.
///
/// # Errors
///
/// Returns the first [`StreamError`] the stream yields. Text gathered
/// before the error is discarded.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::{AggregationPolicy, ResponseChunk, aggregate};
/// use futures_util::stream;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let chunks = stream::iter(vec![
///     Ok(ResponseChunk::from_text("Hello")),
///     Ok(ResponseChunk::from_text("world")),
/// ]);
/// let response = aggregate(chunks, AggregationPolicy::PlainText).await.unwrap();
/// assert_eq!(response.text(), "Hello world");
/// # }
/// ```
pub async fn aggregate<S>(
    stream: S,
    policy: AggregationPolicy,
) -> Result<AggregatedResponse, StreamError>
where
    S: Stream<Item = Result<ResponseChunk, StreamError>>,
{
    aggregate_with(stream, policy, |_| {}).await
}

/// Like [`aggregate`], calling `on_fragment` with each fragment as soon as
/// its chunk arrives.
///
/// Placeholders kept by [`AggregationPolicy::PlainText`] are reported as
/// empty fragments. The final text is identical to [`aggregate`]'s.
#[tracing::instrument(skip_all, fields(policy = %policy))]
pub async fn aggregate_with<S, F>(
    stream: S,
    policy: AggregationPolicy,
    mut on_fragment: F,
) -> Result<AggregatedResponse, StreamError>
where
    S: Stream<Item = Result<ResponseChunk, StreamError>>,
    F: FnMut(&str),
{
    pin_mut!(stream);
    let mut aggregator = Aggregator::new(policy);

    while let Some(item) = stream.next().await {
        let chunk = item.inspect_err(|e| {
            tracing::error!(
                chunks_received = aggregator.chunks,
                error = %e,
                "Response stream failed"
            );
        })?;
        if let Some(fragment) = aggregator.accept(&chunk) {
            on_fragment(fragment);
        }
    }

    let response = aggregator.finish();
    tracing::info!(
        chunks = response.chunks,
        failed_chunks = response.failed_chunks,
        chars = response.text.len(),
        "Aggregated response stream"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_reports_placeholder() {
        let mut aggregator = Aggregator::new(AggregationPolicy::PlainText);
        assert_eq!(aggregator.accept(&ResponseChunk::blocked("SAFETY")), Some(""));
    }

    #[test]
    fn test_accept_drops_under_vision() {
        let mut aggregator = Aggregator::new(AggregationPolicy::Vision);
        assert_eq!(aggregator.accept(&ResponseChunk::blocked("SAFETY")), None);
        let response = aggregator.finish();
        assert_eq!(*response.chunks(), 1);
        assert_eq!(*response.failed_chunks(), 1);
        assert_eq!(response.text(), "");
    }
}
