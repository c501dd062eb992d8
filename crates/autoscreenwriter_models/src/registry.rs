//! Process-wide model handles.
//!
//! The registry is built once at startup, installed with
//! [`ModelRegistry::install`], and never torn down. Code that generates
//! takes a `&ModelRegistry` explicitly rather than reaching for the global.

use crate::{GenerativeModel, VertexClient, VertexConfig};
use autoscreenwriter_error::{ConfigError, ConfigErrorKind};
use std::sync::{Arc, OnceLock};

static REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

/// The story model and the vision model.
#[derive(Clone)]
pub struct ModelRegistry {
    text: Arc<dyn GenerativeModel>,
    vision: Arc<dyn GenerativeModel>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("text", &self.text.model_name())
            .field("vision", &self.vision.model_name())
            .finish()
    }
}

impl ModelRegistry {
    /// Registry over arbitrary model implementations.
    pub fn new(text: Arc<dyn GenerativeModel>, vision: Arc<dyn GenerativeModel>) -> Self {
        Self { text, vision }
    }

    /// Vertex AI clients for the configured text and vision models.
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &VertexConfig) -> Result<Self, ConfigError> {
        let text = VertexClient::new(config, config.text_model())?;
        let vision = VertexClient::new(config, config.vision_model())?;
        Ok(Self::new(Arc::new(text), Arc::new(vision)))
    }

    /// Install this registry as the process-wide instance.
    ///
    /// # Errors
    ///
    /// Fails if a registry is already installed; the existing one is kept.
    pub fn install(self) -> Result<&'static ModelRegistry, ConfigError> {
        let mut installed = false;
        let registry = REGISTRY.get_or_init(|| {
            installed = true;
            self
        });
        if !installed {
            return Err(ConfigErrorKind::RegistryInstalled.into());
        }
        tracing::info!(
            text = registry.text.model_name(),
            vision = registry.vision.model_name(),
            "Installed model registry"
        );
        Ok(registry)
    }

    /// The installed registry, if any.
    pub fn global() -> Option<&'static ModelRegistry> {
        REGISTRY.get()
    }

    /// Story model.
    pub fn text(&self) -> &dyn GenerativeModel {
        self.text.as_ref()
    }

    /// Vision model.
    pub fn vision(&self) -> &dyn GenerativeModel {
        self.vision.as_ref()
    }
}
