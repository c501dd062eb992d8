//! Autoscreenwriter: write a chaptered story with Gemini.
//!
//! A [`StoryRequest`] becomes a prompt through [`build_prompt`]; the
//! [`StoryPipeline`] sends it to the story model from a [`ModelRegistry`]
//! and aggregates the streamed reply.
//!
//! # Examples
//!
//! ```no_run
//! use autoscreenwriter::{
//!     Creativity, ModelRegistry, StoryLength, StoryPipeline, StoryRequest, VertexConfig,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VertexConfig::load(None)?;
//! let registry = ModelRegistry::from_config(&config)?.install()?;
//!
//! let request = StoryRequest::builder()
//!     .length(StoryLength::Short)
//!     .creativity(Creativity::High)
//!     .build()?;
//!
//! let outcome = StoryPipeline::new(registry).generate(&request).await?;
//! println!("{}", outcome.story());
//! # Ok(())
//! # }
//! ```

mod pipeline;

pub use autoscreenwriter_core::*;
pub use autoscreenwriter_error::*;
pub use autoscreenwriter_models::{
    ChunkStream, GenerateContentRequest, GenerativeModel, ModelRegistry, TEXT_MODEL, VISION_MODEL,
    VertexClient, VertexConfig, file_part, generate_text_response, generate_text_response_with,
    generate_vision_response, image_mime_type, inline_part, story_request, vision_request,
};
pub use pipeline::{StoryOutcome, StoryPipeline};
