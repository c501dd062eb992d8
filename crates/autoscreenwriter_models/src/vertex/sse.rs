//! Server-sent event handling for `alt=sse` responses.
//!
//! Event framing (CR, LF or CRLF line endings, multi-line `data:` fields,
//! comments) is left to `eventsource-stream`; this module turns each event's
//! data into a [`ResponseChunk`] or a [`StreamError`].

use autoscreenwriter_core::ResponseChunk;
use autoscreenwriter_error::{StreamError, StreamErrorKind};
use eventsource_stream::{EventStreamError, Eventsource};
use futures_util::{Stream, StreamExt, pin_mut};
use serde::Deserialize;
use std::fmt::Display;

/// Error object the service may emit in place of a chunk.
#[derive(Debug, Clone, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventPayload {
    Error { error: ServiceError },
    Chunk(ResponseChunk),
}

/// Decode an SSE byte stream into response chunks.
///
/// The first error ends the stream.
pub fn decode_chunks<S, B, E>(
    body: S,
) -> impl Stream<Item = Result<ResponseChunk, StreamError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
{
    async_stream::try_stream! {
        let events = body.eventsource();
        pin_mut!(events);
        while let Some(event) = events.next().await {
            let event = event.map_err(event_error)?;
            if let Some(chunk) = parse_data(&event.data)? {
                yield chunk;
            }
        }
    }
}

fn event_error<E: Display>(err: EventStreamError<E>) -> StreamError {
    match err {
        EventStreamError::Transport(e) => {
            tracing::error!(error = %e, "Response body interrupted");
            StreamError::new(StreamErrorKind::Transport(format!("Body read failed: {}", e)))
        }
        other => {
            tracing::warn!(error = %other, "Failed to frame stream event");
            StreamError::new(StreamErrorKind::MalformedEvent(other.to_string()))
        }
    }
}

/// Parse the data of one event. Blank data carries no chunk.
fn parse_data(data: &str) -> Result<Option<ResponseChunk>, StreamError> {
    if data.trim().is_empty() {
        return Ok(None);
    }

    let payload: EventPayload = serde_json::from_str(data).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse stream event");
        StreamError::new(StreamErrorKind::MalformedEvent(e.to_string()))
    })?;

    match payload {
        EventPayload::Chunk(chunk) => Ok(Some(chunk)),
        EventPayload::Error { error } => {
            tracing::error!(
                code = ?error.code,
                status = ?error.status,
                message = %error.message,
                "Service sent error event"
            );
            Err(StreamError::new(StreamErrorKind::Server(error.message)))
        }
    }
}
