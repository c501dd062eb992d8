//! Request body for `streamGenerateContent`.

use autoscreenwriter_core::{Content, GenerationConfig, SafetySettings};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::Serialize;

/// Generation request sent to the model service.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation contents
    contents: Vec<Content>,
    /// Sampling parameters
    generation_config: GenerationConfig,
    /// Per-category safety thresholds; omitted means service defaults
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    safety_settings: Option<SafetySettings>,
}

impl GenerateContentRequest {
    /// Creates a new builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }

    /// Request with every field given.
    pub fn new(
        contents: Vec<Content>,
        generation_config: GenerationConfig,
        safety_settings: Option<SafetySettings>,
    ) -> Self {
        Self {
            contents,
            generation_config,
            safety_settings,
        }
    }
}
