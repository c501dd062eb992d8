//! Vertex AI Gemini provider.
//!
//! Talks to the `streamGenerateContent` REST method with `alt=sse`, so each
//! server-sent event carries one response chunk.

mod client;
mod sse;

pub use client::VertexClient;
pub use sse::decode_chunks;
