//! Transient storage for uploaded artifacts.
//!
//! An uploaded file lives on disk only for the duration of the request that
//! carried it. The store assigns each upload a fresh storage key, so
//! concurrent requests never contend, and [`ArtifactStore::release`] is
//! called exactly once per staged artifact on every exit path of the owning
//! handler.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{error::GatewayError, models::MediaKind};

/// One file received from a request, staged in the transient store.
///
/// Owned by the handler of the request that carried it; never shared across
/// requests or retained after the response is sent.
#[derive(Debug)]
pub struct UploadedArtifact {
    path: PathBuf,
    mime_type: String,
    size_bytes: u64,
}

impl UploadedArtifact {
    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The MIME type resolved for the upload.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Size of the staged file in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Stores uploaded files under a dedicated directory for the duration of one
/// request each.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Writes an upload to disk under a fresh storage key and resolves its
    /// MIME type: the declared multipart content type wins, then a guess from
    /// the original filename, then the kind's fallback.
    pub async fn stage(
        &self,
        kind: MediaKind,
        bytes: &[u8],
        declared_mime: Option<&str>,
        original_name: Option<&str>,
    ) -> Result<UploadedArtifact, GatewayError> {
        let path = self.root.join(Uuid::new_v4().to_string());
        tokio::fs::write(&path, bytes)
            .await
            .map_err(GatewayError::ArtifactStage)?;

        let mime_type = resolve_mime(kind, declared_mime, original_name);
        debug!(kind = %kind, path = %path.display(), size = bytes.len(), "staged upload");

        Ok(UploadedArtifact {
            path,
            mime_type,
            size_bytes: bytes.len() as u64,
        })
    }

    /// Deletes the artifact's storage. A failure here never becomes the
    /// request outcome; it is logged and dropped.
    pub async fn release(&self, artifact: UploadedArtifact) {
        if let Err(err) = tokio::fs::remove_file(&artifact.path).await {
            warn!(path = %artifact.path.display(), error = %err, "failed to remove upload");
        } else {
            debug!(path = %artifact.path.display(), "released upload");
        }
    }
}

fn resolve_mime(kind: MediaKind, declared: Option<&str>, original_name: Option<&str>) -> String {
    if let Some(declared) = declared.filter(|m| !m.is_empty()) {
        return declared.to_string();
    }
    original_name
        .and_then(|name| mime_guess::from_path(name).first())
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| kind.fallback_mime().to_string())
}
