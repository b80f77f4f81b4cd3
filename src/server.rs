//! HTTP surface of the gateway: router, shared state, and the four request
//! handlers.
//!
//! Each handler owns at most one staged upload for the lifetime of its
//! request. Staging happens only after validation, and everything fallible
//! after staging runs in a scoped step whose outcome is captured so release
//! is unconditional before the result propagates.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{
    artifact::{ArtifactStore, UploadedArtifact},
    client::GenerationBackend,
    encoder,
    error::GatewayError,
    models::{MediaKind, Request},
};

/// Process-wide state shared by all request tasks. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn GenerationBackend>,
    store: ArtifactStore,
}

impl AppState {
    /// Creates the shared state from a generation backend and an artifact
    /// store.
    pub fn new(backend: Arc<dyn GenerationBackend>, store: ArtifactStore) -> Self {
        Self { backend, store }
    }
}

/// Builds the gateway router with its four generation endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-text", post(generate_text))
        .route("/generate-from-image", post(generate_from_image))
        .route("/generate-from-document", post(generate_from_document))
        .route("/generate-from-audio", post(generate_from_audio))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct GenerateTextBody {
    prompt: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    output: String,
}

async fn generate_text(
    State(state): State<AppState>,
    Json(body): Json<GenerateTextBody>,
) -> Result<Json<GenerateResponse>, GatewayError> {
    let prompt = body
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or_else(|| GatewayError::validation("Prompt is required"))?;

    let request = Request::from_prompt(prompt)?;
    let output = state.backend.generate(request).await?;
    Ok(Json(GenerateResponse { output }))
}

async fn generate_from_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, GatewayError> {
    handle_media(state, multipart, MediaKind::Image).await
}

async fn generate_from_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, GatewayError> {
    handle_media(state, multipart, MediaKind::Document).await
}

async fn generate_from_audio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, GatewayError> {
    handle_media(state, multipart, MediaKind::Audio).await
}

/// Drives one media request: drain the multipart body, validate, stage,
/// generate, and release the staged artifact on every exit path.
async fn handle_media(
    state: AppState,
    multipart: Multipart,
    kind: MediaKind,
) -> Result<Json<GenerateResponse>, GatewayError> {
    let upload = drain_multipart(multipart, kind).await?;
    let Some(file) = upload.file else {
        return Err(GatewayError::validation(kind.missing_file_message()));
    };

    let artifact = state
        .store
        .stage(
            kind,
            &file.bytes,
            file.content_type.as_deref(),
            file.file_name.as_deref(),
        )
        .await?;

    let outcome = generate_with_artifact(&state, &artifact, upload.prompt, kind).await;
    state.store.release(artifact).await;

    let output = outcome?;
    Ok(Json(GenerateResponse { output }))
}

async fn generate_with_artifact(
    state: &AppState,
    artifact: &UploadedArtifact,
    prompt: Option<String>,
    kind: MediaKind,
) -> Result<String, GatewayError> {
    let media = encoder::encode_media(artifact, kind).await?;
    let request = Request::for_media(kind, prompt, media)?;
    state.backend.generate(request).await
}

struct UploadFields {
    file: Option<FilePayload>,
    prompt: Option<String>,
}

struct FilePayload {
    bytes: Bytes,
    content_type: Option<String>,
    file_name: Option<String>,
}

/// Collects the file field named for `kind` and an optional `prompt` field.
/// Unknown fields are skipped. Nothing is written to disk here, so a
/// malformed body leaves no artifact behind.
async fn drain_multipart(
    mut multipart: Multipart,
    kind: MediaKind,
) -> Result<UploadFields, GatewayError> {
    let mut fields = UploadFields {
        file: None,
        prompt: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| GatewayError::validation(err.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(name) if name == kind.field_name() => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| GatewayError::validation(err.to_string()))?;
                fields.file = Some(FilePayload {
                    bytes,
                    content_type,
                    file_name,
                });
            }
            Some("prompt") => {
                fields.prompt = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| GatewayError::validation(err.to_string()))?,
                );
            }
            _ => {}
        }
    }

    Ok(fields)
}
