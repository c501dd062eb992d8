//! End-to-end story generation.

use autoscreenwriter_core::{
    AggregatedResponse, GenerationConfig, Prompt, StoryRequest, build_prompt,
};
use autoscreenwriter_error::AutoscreenwriterResult;
use autoscreenwriter_models::{ModelRegistry, generate_text_response_with};
use derive_getters::Getters;
use tracing::{info, instrument};

/// What one generation produced.
#[derive(Debug, Clone, Getters)]
pub struct StoryOutcome {
    /// Prompt sent to the model
    prompt: Prompt,
    /// Settings sent with it
    config: GenerationConfig,
    /// Aggregated story text
    story: AggregatedResponse,
}

/// Builds the prompt, streams the story, and aggregates it.
///
/// Input is validated by default: empty character fields are rejected
/// before anything is sent. [`StoryPipeline::permissive`] turns that off
/// and sends whatever the request renders to.
#[derive(Debug, Clone, Copy)]
pub struct StoryPipeline<'a> {
    registry: &'a ModelRegistry,
    validate_input: bool,
}

impl<'a> StoryPipeline<'a> {
    /// Pipeline over the given models, validating input.
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self {
            registry,
            validate_input: true,
        }
    }

    /// Skip input validation.
    pub fn permissive(self) -> Self {
        Self {
            validate_input: false,
            ..self
        }
    }

    /// Generate a story.
    ///
    /// # Errors
    ///
    /// Fails on invalid input (unless permissive) or when the response
    /// stream breaks. Unreadable chunks are not errors.
    pub async fn generate(&self, request: &StoryRequest) -> AutoscreenwriterResult<StoryOutcome> {
        self.generate_with(request, |_| {}).await
    }

    /// Generate a story, calling `on_fragment` as text arrives.
    #[instrument(skip_all, fields(model = self.registry.text().model_name(), validate = self.validate_input))]
    pub async fn generate_with<F>(
        &self,
        request: &StoryRequest,
        on_fragment: F,
    ) -> AutoscreenwriterResult<StoryOutcome>
    where
        F: FnMut(&str),
    {
        if self.validate_input {
            request.validate()?;
        }

        let (prompt, config) = build_prompt(request);
        let story =
            generate_text_response_with(self.registry.text(), &prompt, config, on_fragment).await?;

        info!(
            chunks = story.chunks(),
            failed_chunks = story.failed_chunks(),
            "Story generated"
        );
        Ok(StoryOutcome {
            prompt,
            config,
            story,
        })
    }
}
