//! Model service integration for Autoscreenwriter.
//!
//! [`GenerativeModel`] is the seam the pipeline talks to; [`VertexClient`]
//! implements it against Vertex AI. [`ModelRegistry`] holds the story and
//! vision models for the life of the process.

mod config;
mod generate;
mod media;
mod model;
mod registry;
mod request;
pub mod vertex;

pub use self::config::{TEXT_MODEL, VISION_MODEL, VertexConfig, VertexConfigBuilder};
pub use generate::{
    generate_text_response, generate_text_response_with, generate_vision_response,
    story_request, vision_request,
};
pub use media::{file_part, image_mime_type, inline_part};
pub use model::{ChunkStream, GenerativeModel};
pub use registry::ModelRegistry;
pub use request::{GenerateContentRequest, GenerateContentRequestBuilder};
pub use vertex::VertexClient;
