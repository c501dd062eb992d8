//! Vision command handler.

use autoscreenwriter::{
    AutoscreenwriterResult, ConfigError, ConfigErrorKind, ModelRegistry, Part, file_part, generate_vision_response,
    image_mime_type, inline_part,
};
use std::path::{Path, PathBuf};

fn mime_for(path: &Path) -> Result<&'static str, ConfigError> {
    image_mime_type(path).ok_or_else(|| {
        ConfigError::new(ConfigErrorKind::InputFile(format!(
            "cannot tell the image type of {}; use png, jpeg, webp, gif or heic",
            path.display()
        )))
    })
}

/// Collect the prompt and media into request parts, text first.
pub fn vision_parts(
    prompt: &str,
    images: &[PathBuf],
    file_uris: &[String],
) -> AutoscreenwriterResult<Vec<Part>> {
    let mut parts = vec![Part::text(prompt)];

    for path in images {
        let mime = mime_for(path)?;
        let bytes = std::fs::read(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::InputFile(format!(
                "failed to read image {}: {}",
                path.display(),
                e
            )))
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), mime, "Attaching image");
        parts.push(inline_part(mime, &bytes));
    }

    for uri in file_uris {
        let mime = mime_for(Path::new(uri))?;
        parts.push(file_part(mime, uri));
    }

    Ok(parts)
}

/// Handles the vision command.
#[tracing::instrument(skip(registry, prompt))]
pub async fn handle_vision_command(
    registry: &ModelRegistry,
    prompt: &str,
    images: &[PathBuf],
    file_uris: &[String],
) -> AutoscreenwriterResult<()> {
    let parts = vision_parts(prompt, images, file_uris)?;
    let response = generate_vision_response(registry.vision(), parts).await?;
    println!("{}", response);
    Ok(())
}
