//! Core types for the Autoscreenwriter story generator.
//!
//! This crate owns the two pieces of logic that do not depend on any model
//! service: turning a [`StoryRequest`] into a [`Prompt`], and folding a stream
//! of [`ResponseChunk`]s into an [`AggregatedResponse`].

mod aggregate;
mod chunk;
mod content;
mod generation;
mod observability;
mod prompt;
mod safety;
mod story;

pub use aggregate::{AggregatedResponse, AggregationPolicy, Aggregator, aggregate, aggregate_with};
pub use chunk::{Candidate, ResponseChunk, SafetyRating, UsageMetadata};
pub use content::{Blob, Content, FileData, Part};
pub use generation::{GenerationConfig, MAX_OUTPUT_TOKENS, VISION_TEMPERATURE};
pub use observability::{LogFormat, init_tracing};
pub use prompt::{Prompt, build_prompt};
pub use safety::{HarmBlockThreshold, HarmCategory, SafetySettings};
pub use story::{
    Creativity, PREMISE_OPTIONS, StoryLength, StoryPremise, StoryRequest, StoryRequestBuilder,
    StoryRequestBuilderError,
};
