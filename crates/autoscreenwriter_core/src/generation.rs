//! Sampling parameters sent with each generation call.

use crate::Creativity;
use autoscreenwriter_error::{ValidationError, ValidationErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Output token limit shared by the story and vision paths.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Fixed temperature of the vision path.
pub const VISION_TEMPERATURE: f32 = 0.1;

/// Generation settings, serialized in the service's camelCase form.
///
/// # Examples
///
/// ```
/// use autoscreenwriter_core::{Creativity, GenerationConfig};
///
/// let config = GenerationConfig::for_creativity(Creativity::Low);
/// assert_eq!(*config.temperature(), 0.30);
/// assert_eq!(*config.max_output_tokens(), 2048);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature in `[0, 1]`
    temperature: f32,
    /// Maximum number of tokens to generate
    max_output_tokens: u32,
}

impl GenerationConfig {
    /// Create a config, rejecting values outside the supported range.
    pub fn new(temperature: f32, max_output_tokens: u32) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ValidationErrorKind::TemperatureOutOfRange(temperature.to_string()).into());
        }
        if max_output_tokens == 0 {
            return Err(ValidationErrorKind::ZeroMaxOutputTokens.into());
        }
        Ok(Self {
            temperature,
            max_output_tokens,
        })
    }

    /// Story path settings for a creativity level.
    pub fn for_creativity(creativity: Creativity) -> Self {
        Self {
            temperature: creativity.temperature(),
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    /// Fixed settings of the vision path.
    pub fn vision_default() -> Self {
        Self {
            temperature: VISION_TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}
