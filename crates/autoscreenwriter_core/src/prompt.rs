//! Prompt construction from a story request.

use crate::{GenerationConfig, StoryRequest};
use serde::{Deserialize, Serialize};

/// Rendered prompt text.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the prompt text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render the story prompt and its generation settings.
///
/// Pure and infallible: the same request always yields the same prompt and
/// config, and empty fields simply render empty. Use
/// [`StoryRequest::validate`] beforehand to reject them.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::{build_prompt, Creativity, StoryLength, StoryRequest};
///
/// let request = StoryRequest::builder()
///     .length(StoryLength::Long)
///     .creativity(Creativity::High)
///     .build()
///     .unwrap();
///
/// let (prompt, config) = build_prompt(&request);
/// assert!(prompt.as_str().contains("exactly 10 chapters"));
/// assert!(prompt.as_str().contains("story_premise: Love,Adventure"));
/// assert_eq!(*config.temperature(), 0.95);
/// ```
#[tracing::instrument(skip(request), fields(length = %request.length(), creativity = %request.creativity()))]
pub fn build_prompt(request: &StoryRequest) -> (Prompt, GenerationConfig) {
    let text = format!(
        "Write a {length} story based on the following premise: \n\n\
         character_name: {name} \n\n\
         character_type: {kind} \n\n\
         character_persona: {persona} \n\n\
         character_location: {location} \n\n\
         story_premise: {premise} \n\n\
         The story must have exactly {chapters} chapters.\n\
         Important point is that each chapter should be generated based on the premise given above.\n\
         First start by giving the book introduction, chapter introductions and then each chapter. \
         It should also have a proper ending.\n\
         The book should have prologue and epilogue.\n",
        length = request.length(),
        name = request.character_name(),
        kind = request.character_type(),
        persona = request.character_persona(),
        location = request.character_location(),
        premise = request.story_premise().joined(),
        chapters = request.length().chapter_count(),
    );
    let config = GenerationConfig::for_creativity(*request.creativity());

    tracing::debug!(
        prompt_len = text.len(),
        temperature = config.temperature(),
        "Built story prompt"
    );

    (Prompt(text), config)
}
