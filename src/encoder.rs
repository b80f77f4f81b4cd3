//! Converts prompt strings and staged uploads into content parts.
//!
//! This is the one place the per-kind payload shapes diverge: image and
//! document uploads use the flat inline-data shape, audio nests its payload
//! one level deeper. Callers only pass a [`MediaKind`]; the shape never
//! leaks past this module.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    artifact::UploadedArtifact,
    error::GatewayError,
    models::{AudioData, InlineData, MediaKind, Part},
};

/// Wraps a prompt string as a text part.
pub fn encode_text(prompt: impl Into<String>) -> Part {
    Part::text(prompt)
}

/// Reads the artifact's bytes, base64-encodes them, and wraps them in the
/// part shape for `kind` together with the artifact's MIME type.
///
/// # Errors
///
/// Returns [`GatewayError::ArtifactRead`] if the staged file cannot be read.
pub async fn encode_media(
    artifact: &UploadedArtifact,
    kind: MediaKind,
) -> Result<Part, GatewayError> {
    let bytes = tokio::fs::read(artifact.path())
        .await
        .map_err(GatewayError::ArtifactRead)?;

    let inline_data = InlineData {
        mime_type: artifact.mime_type().to_string(),
        data: STANDARD.encode(&bytes),
    };

    Ok(match kind {
        MediaKind::Image | MediaKind::Document => Part::InlineData { inline_data },
        MediaKind::Audio => Part::InlineAudio {
            inline_data: AudioData { audio: inline_data },
        },
    })
}
