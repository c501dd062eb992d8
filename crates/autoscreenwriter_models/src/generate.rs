//! Story and vision generation over a [`GenerativeModel`].

use crate::{GenerateContentRequest, GenerativeModel};
use autoscreenwriter_core::{
    AggregatedResponse, AggregationPolicy, Content, GenerationConfig, Part, Prompt,
    SafetySettings, aggregate_with,
};
use autoscreenwriter_error::{
    AutoscreenwriterResult, StreamError, ValidationError, ValidationErrorKind,
};
use tracing::instrument;

/// Request for the story path: one text part, every harm category set to
/// block nothing.
pub fn story_request(prompt: &Prompt, config: GenerationConfig) -> GenerateContentRequest {
    GenerateContentRequest::new(
        vec![Content::user(vec![Part::text(prompt.as_str())])],
        config,
        Some(SafetySettings::block_none()),
    )
}

/// Request for the vision path: the given parts with the fixed vision
/// config and service-default safety settings.
///
/// # Errors
///
/// Fails when `parts` is empty.
pub fn vision_request(parts: Vec<Part>) -> Result<GenerateContentRequest, ValidationError> {
    if parts.is_empty() {
        return Err(ValidationErrorKind::EmptyContent.into());
    }
    Ok(GenerateContentRequest::new(
        vec![Content::user(parts)],
        GenerationConfig::vision_default(),
        None,
    ))
}

/// Stream a story and join it with [`AggregationPolicy::PlainText`].
pub async fn generate_text_response(
    model: &dyn GenerativeModel,
    prompt: &Prompt,
    config: GenerationConfig,
) -> Result<AggregatedResponse, StreamError> {
    generate_text_response_with(model, prompt, config, |_| {}).await
}

/// Like [`generate_text_response`], reporting fragments as they arrive.
#[instrument(skip_all, fields(model = model.model_name()))]
pub async fn generate_text_response_with<F>(
    model: &dyn GenerativeModel,
    prompt: &Prompt,
    config: GenerationConfig,
    on_fragment: F,
) -> Result<AggregatedResponse, StreamError>
where
    F: FnMut(&str),
{
    let request = story_request(prompt, config);
    let stream = model.stream_generate_content(&request).await?;
    aggregate_with(stream, AggregationPolicy::PlainText, on_fragment).await
}

/// Stream a multimodal answer and join it with [`AggregationPolicy::Vision`].
#[instrument(skip_all, fields(model = model.model_name(), parts = parts.len()))]
pub async fn generate_vision_response(
    model: &dyn GenerativeModel,
    parts: Vec<Part>,
) -> AutoscreenwriterResult<AggregatedResponse> {
    let request = vision_request(parts)?;
    let stream = model.stream_generate_content(&request).await?;
    Ok(aggregate_with(stream, AggregationPolicy::Vision, |_| {}).await?)
}
