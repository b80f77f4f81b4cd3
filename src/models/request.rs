//! Request models for the Gemini AI API, plus the composer that turns
//! ordered content parts into a request.
//!
//! The composer is the single place that decides part ordering: instruction
//! text always precedes the media payload, so the handlers never arrange
//! parts themselves.

use serde::Serialize;

use super::{MediaKind, Part};
use crate::error::GatewayError;

/// A request to the Gemini AI API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The contents of the request, including the prompt text.
    pub contents: Vec<Content>,
}

/// A content object containing parts of the request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// The parts that make up the content.
    pub parts: Vec<Part>,
}

impl Request {
    /// Composes a request from an ordered sequence of parts.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmptyRequest`] if the sequence is empty; a
    /// request with no parts must never reach the backend.
    pub fn compose(parts: Vec<Part>) -> Result<Self, GatewayError> {
        if parts.is_empty() {
            return Err(GatewayError::EmptyRequest);
        }
        Ok(Self {
            contents: vec![Content { parts }],
        })
    }

    /// Composes a text-only request from a prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Result<Self, GatewayError> {
        Self::compose(vec![Part::text(prompt)])
    }

    /// Composes a media request: the kind's instruction text first, then the
    /// encoded media part.
    pub fn for_media(
        kind: MediaKind,
        prompt: Option<String>,
        media: Part,
    ) -> Result<Self, GatewayError> {
        Self::compose(vec![Part::text(kind.instruction(prompt)), media])
    }

    /// The ordered parts of the request.
    pub fn parts(&self) -> &[Part] {
        self.contents
            .first()
            .map(|content| content.parts.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InlineData;

    fn media_part() -> Part {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".into(),
                data: "AAEC".into(),
            },
        }
    }

    #[test]
    fn composing_zero_parts_is_rejected() {
        assert!(matches!(
            Request::compose(vec![]),
            Err(GatewayError::EmptyRequest)
        ));
    }

    #[test]
    fn text_request_holds_a_single_text_part() {
        let request = Request::from_prompt("hello").unwrap();
        assert_eq!(request.parts(), &[Part::text("hello")]);
    }

    #[test]
    fn instruction_always_precedes_the_media_part() {
        for kind in [MediaKind::Image, MediaKind::Document, MediaKind::Audio] {
            for prompt in [None, Some("what is this".to_string())] {
                let request = Request::for_media(kind, prompt.clone(), media_part()).unwrap();
                let parts = request.parts();
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[0], Part::text(kind.instruction(prompt)));
                assert_eq!(parts[1], media_part());
            }
        }
    }
}
