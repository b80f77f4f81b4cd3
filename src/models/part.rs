//! Common part model used in both requests and responses.

use serde::{Deserialize, Serialize};

/// One unit of a multimodal request: a text instruction or an encoded media
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A text part containing a string value
    Text {
        /// The text content of the part
        text: String,
    },
    /// A part carrying inline media data (image or document)
    #[serde(rename_all = "camelCase")]
    InlineData {
        /// The inline data content of the part
        inline_data: InlineData,
    },
    /// A part carrying inline audio data. The payload nests one level deeper
    /// than the image/document shape; the backend contract may depend on
    /// this, so it is preserved rather than normalized.
    #[serde(rename_all = "camelCase")]
    InlineAudio {
        /// The nested audio payload of the part
        inline_data: AudioData,
    },
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Base64-encoded bytes plus their declared MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// The MIME type of the inline data
    pub mime_type: String,
    /// The base64-encoded data content
    pub data: String,
}

/// Wrapper for the audio payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioData {
    /// The encoded audio bytes and their MIME type
    pub audio: InlineData,
}

/// The kind of media artifact a request carries. Carries the per-kind policy:
/// multipart field name, validation message, instruction text, and the MIME
/// type assumed when nothing better is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// An uploaded image
    Image,
    /// An uploaded document
    Document,
    /// An uploaded audio clip
    Audio,
}

impl MediaKind {
    /// The multipart field the file is expected under.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Audio => "audio",
        }
    }

    /// The validation message returned when the file field is absent.
    pub fn missing_file_message(&self) -> &'static str {
        match self {
            Self::Image => "Image file is required",
            Self::Document => "Document file is required",
            Self::Audio => "Audio file is required",
        }
    }

    /// The instruction text placed ahead of the media part. Only the image
    /// kind honors a caller-supplied prompt; document and audio use fixed
    /// instructions.
    pub fn instruction(&self, prompt: Option<String>) -> String {
        match self {
            Self::Image => prompt
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "Describe the image".to_string()),
            Self::Document => "Analyze the document".to_string(),
            Self::Audio => "Transcribe or analyze the audio".to_string(),
        }
    }

    /// The MIME type assumed when the upload declares none and the filename
    /// gives no hint.
    pub fn fallback_mime(&self) -> &'static str {
        match self {
            Self::Image => "image/jpeg",
            Self::Document | Self::Audio => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}
