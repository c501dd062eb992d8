//! Harm-category safety settings.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Harm categories the service moderates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum HarmCategory {
    /// Harassment
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    #[strum(serialize = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    /// Hate speech
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    #[strum(serialize = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    /// Sexually explicit content
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    #[strum(serialize = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    /// Dangerous content
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    #[strum(serialize = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Blocking threshold for a harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    /// Never block
    BlockNone,
    /// Block only high-probability harm
    BlockOnlyHigh,
    /// Block medium and high
    BlockMediumAndAbove,
    /// Block low and above
    BlockLowAndAbove,
}

/// Per-category thresholds, serialized as the service's list of
/// `{category, threshold}` objects.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::{HarmBlockThreshold, HarmCategory, SafetySettings};
///
/// let settings = SafetySettings::block_none();
/// assert_eq!(settings.len(), 4);
/// assert_eq!(
///     settings.threshold(HarmCategory::HateSpeech),
///     Some(HarmBlockThreshold::BlockNone)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafetySettings(BTreeMap<HarmCategory, HarmBlockThreshold>);

impl SafetySettings {
    /// Every category set to [`HarmBlockThreshold::BlockNone`].
    pub fn block_none() -> Self {
        use strum::IntoEnumIterator;
        Self(
            HarmCategory::iter()
                .map(|category| (category, HarmBlockThreshold::BlockNone))
                .collect(),
        )
    }

    /// Set the threshold for one category.
    pub fn set(&mut self, category: HarmCategory, threshold: HarmBlockThreshold) {
        self.0.insert(category, threshold);
    }

    /// Threshold configured for a category.
    pub fn threshold(&self, category: HarmCategory) -> Option<HarmBlockThreshold> {
        self.0.get(&category).copied()
    }

    /// Number of configured categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct SafetySetting<'a> {
    category: &'a HarmCategory,
    threshold: &'a HarmBlockThreshold,
}

impl Serialize for SafetySetting<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SafetySetting", 2)?;
        state.serialize_field("category", self.category)?;
        state.serialize_field("threshold", self.threshold)?;
        state.end()
    }
}

impl Serialize for SafetySettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.0
                .iter()
                .map(|(category, threshold)| SafetySetting { category, threshold }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_list() {
        let json = serde_json::to_value(SafetySettings::block_none()).unwrap();
        let list = json.as_array().expect("array");
        assert_eq!(list.len(), 4);
        assert_eq!(list[0]["category"], "HARM_CATEGORY_HARASSMENT");
        assert!(list.iter().all(|s| s["threshold"] == "BLOCK_NONE"));
    }
}
