//! Vertex AI connection settings.

use autoscreenwriter_error::{ConfigError, ConfigErrorKind};
use derive_getters::Getters;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Model used for story generation.
pub const TEXT_MODEL: &str = "gemini-1.0-pro";

/// Model used for image-and-text generation.
pub const VISION_MODEL: &str = "gemini-1.0-pro-vision";

/// Environment variables that override file settings, by config key.
const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("project", "GCP_PROJECT"),
    ("region", "GCP_REGION"),
    ("access_token", "VERTEX_ACCESS_TOKEN"),
];

/// Connection settings for Vertex AI.
///
/// Loaded from an optional TOML file, then `AUTOSCREENWRITER_*` variables,
/// then `GCP_PROJECT`, `GCP_REGION` and `VERTEX_ACCESS_TOKEN`.
#[derive(Clone, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct VertexConfig {
    /// Google Cloud project ID
    project: String,
    /// Google Cloud region, e.g. "us-central1"
    region: String,
    /// OAuth2 bearer token
    access_token: String,
    /// Story model name
    #[serde(default = "default_text_model")]
    #[builder(default = "TEXT_MODEL.to_string()")]
    text_model: String,
    /// Vision model name
    #[serde(default = "default_vision_model")]
    #[builder(default = "VISION_MODEL.to_string()")]
    vision_model: String,
    /// Whole-request timeout; none by default
    #[serde(default)]
    #[builder(default)]
    request_timeout_secs: Option<u64>,
    /// Base URL override, e.g. for a proxy
    #[serde(default)]
    #[builder(default)]
    api_endpoint: Option<String>,
}

fn default_text_model() -> String {
    TEXT_MODEL.to_string()
}

fn default_vision_model() -> String {
    VISION_MODEL.to_string()
}

impl std::fmt::Debug for VertexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexConfig")
            .field("project", &self.project)
            .field("region", &self.region)
            .field("access_token", &"<redacted>")
            .field("text_model", &self.text_model)
            .field("vision_model", &self.vision_model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("api_endpoint", &self.api_endpoint)
            .finish()
    }
}

impl VertexConfig {
    /// Creates a new builder for VertexConfig.
    pub fn builder() -> VertexConfigBuilder {
        VertexConfigBuilder::default()
    }

    /// Load settings from `path` (or the default locations) and the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, std::env::vars().collect())
    }

    /// Load settings from `path` (or the default locations) and an explicit
    /// environment map.
    ///
    /// Without a path, `autoscreenwriter.toml` in the working directory and
    /// `<config dir>/autoscreenwriter/config.toml` are read when present.
    #[tracing::instrument(skip(env))]
    pub fn load_from(path: Option<&Path>, env: HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("text_model", TEXT_MODEL)
            .and_then(|b| b.set_default("vision_model", VISION_MODEL))
            .map_err(|e| ConfigErrorKind::Load(e.to_string()))?;

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Reading config file");
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(dir) = dirs::config_dir() {
                    let user_file = dir.join("autoscreenwriter").join("config.toml");
                    builder = builder.add_source(config::File::from(user_file).required(false));
                }
                builder =
                    builder.add_source(config::File::with_name("autoscreenwriter").required(false));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("AUTOSCREENWRITER").source(Some(env.clone())),
        );

        for (key, var) in ENV_OVERRIDES {
            if let Some(value) = env.get(var).filter(|v| !v.is_empty()) {
                builder = builder
                    .set_override(key, value.as_str())
                    .map_err(|e| ConfigErrorKind::Load(format!("{}: {}", var, e)))?;
            }
        }

        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigErrorKind::Load(e.to_string()))?;

        config.check()?;
        tracing::info!(
            project = %config.project,
            region = %config.region,
            text_model = %config.text_model,
            "Loaded Vertex AI settings"
        );
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("project (GCP_PROJECT)", &self.project),
            ("region (GCP_REGION)", &self.region),
            ("access_token (VERTEX_ACCESS_TOKEN)", &self.access_token),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigErrorKind::EmptyValue(name).into());
            }
        }
        Ok(())
    }

    /// Base URL of the regional endpoint.
    pub fn base_url(&self) -> String {
        self.api_endpoint
            .clone()
            .unwrap_or_else(|| format!("https://{}-aiplatform.googleapis.com", self.region))
    }

    /// Streaming endpoint for a model.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoscreenwriter_models::VertexConfig;
    ///
    /// let config = VertexConfig::builder()
    ///     .project("demo")
    ///     .region("us-central1")
    ///     .access_token("token")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     config.stream_endpoint("gemini-1.0-pro"),
    ///     "https://us-central1-aiplatform.googleapis.com/v1/projects/demo/locations/us-central1/publishers/google/models/gemini-1.0-pro:streamGenerateContent?alt=sse"
    /// );
    /// ```
    pub fn stream_endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:streamGenerateContent?alt=sse",
            self.base_url().trim_end_matches('/'),
            self.project,
            self.region,
            model
        )
    }
}
