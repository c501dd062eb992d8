//! Story request types.

use autoscreenwriter_error::{ValidationError, ValidationErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Premise tags offered to the user.
pub const PREMISE_OPTIONS: [&str; 8] = [
    "Love",
    "Adventure",
    "Mystery",
    "Horror",
    "Comedy",
    "Sci-Fi",
    "Fantasy",
    "Thriller",
];

/// Requested story length.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StoryLength {
    /// Five chapters.
    Short,
    /// Ten chapters.
    Long,
}

impl StoryLength {
    /// Number of chapters the prompt asks for.
    pub fn chapter_count(self) -> u8 {
        match self {
            StoryLength::Short => 5,
            StoryLength::Long => 10,
        }
    }
}

/// Discrete creativity control.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::Creativity;
///
/// let creativity: Creativity = "high".parse().unwrap();
/// assert_eq!(creativity.temperature(), 0.95);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Creativity {
    /// Conservative sampling.
    Low,
    /// Adventurous sampling.
    High,
}

impl Creativity {
    /// Sampling temperature for this level.
    pub fn temperature(self) -> f32 {
        match self {
            Creativity::Low => 0.30,
            Creativity::High => 0.95,
        }
    }
}

/// Ordered set of premise tags.
///
/// Tags keep the order they were selected in. Duplicates, empty tags and tags
/// containing a comma are rejected, so the comma-joined form always splits
/// back into the same tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StoryPremise(Vec<String>);

impl StoryPremise {
    /// Build a premise from tags in selection order.
    pub fn new<I, S>(tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut premise = Self::default();
        for tag in tags {
            premise.insert(tag)?;
        }
        Ok(premise)
    }

    /// The premise preselected on the form: Love and Adventure.
    pub fn form_default() -> Self {
        Self(vec!["Love".to_string(), "Adventure".to_string()])
    }

    /// Append a tag, keeping selection order.
    pub fn insert(&mut self, tag: impl Into<String>) -> Result<(), ValidationError> {
        let tag = tag.into().trim().to_string();
        if tag.is_empty() {
            return Err(ValidationErrorKind::EmptyPremise.into());
        }
        if tag.contains(',') {
            return Err(ValidationErrorKind::PremiseContainsComma(tag).into());
        }
        if self.0.contains(&tag) {
            return Err(ValidationErrorKind::DuplicatePremise(tag).into());
        }
        self.0.push(tag);
        Ok(())
    }

    /// Tags in selection order.
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` when no tag is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags joined with `,` and no padding.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl TryFrom<Vec<String>> for StoryPremise {
    type Error = ValidationError;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(tags)
    }
}

impl From<StoryPremise> for Vec<String> {
    fn from(premise: StoryPremise) -> Self {
        premise.0
    }
}

/// Everything needed to write a story prompt.
///
/// Text fields default to the values the form shows before the user edits
/// anything. Length and creativity have no default and must be chosen.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::{Creativity, StoryLength, StoryRequest};
///
/// let request = StoryRequest::builder()
///     .length(StoryLength::Short)
///     .creativity(Creativity::Low)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.character_name(), "Mittens");
/// assert_eq!(request.story_premise().joined(), "Love,Adventure");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StoryRequest {
    /// Name of the main character
    #[builder(default = "\"Mittens\".to_string()")]
    character_name: String,
    /// What kind of being the character is
    #[builder(default = "\"Cat\".to_string()")]
    character_type: String,
    /// Personality description
    #[builder(default = "\"Mitten is a very friendly cat.\".to_string()")]
    character_persona: String,
    /// Where the character lives
    #[builder(default = "\"Andromeda Galaxy\".to_string()")]
    character_location: String,
    /// Selected premise tags
    #[builder(default = "StoryPremise::form_default()")]
    story_premise: StoryPremise,
    /// Story length
    length: StoryLength,
    /// Creativity level
    creativity: Creativity,
}

impl StoryRequest {
    /// Creates a new builder for StoryRequest.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }

    /// Reject empty or whitespace-only text fields.
    ///
    /// Prompt building never calls this; callers that want strict input
    /// check it first.
    #[tracing::instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("character_name", &self.character_name),
            ("character_type", &self.character_type),
            ("character_persona", &self.character_persona),
            ("character_location", &self.character_location),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                tracing::debug!(field = name, "Rejecting empty story field");
                return Err(ValidationErrorKind::EmptyField(name).into());
            }
        }
        Ok(())
    }
}

impl From<StoryRequestBuilderError> for ValidationError {
    #[track_caller]
    fn from(err: StoryRequestBuilderError) -> Self {
        let field = match err {
            StoryRequestBuilderError::UninitializedField(name) => name.to_string(),
            StoryRequestBuilderError::ValidationError(message) => message,
        };
        ValidationError::new(ValidationErrorKind::MissingField(field))
    }
}
