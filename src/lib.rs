#![deny(missing_docs)]

//! A multimodal HTTP gateway for the Google Gemini AI API.
//!
//! The gateway accepts text prompts and single-file uploads (image, document,
//! audio), normalizes them into an ordered sequence of content parts, forwards
//! the composed request to the generation backend, and returns the generated
//! text. Uploads are staged on local disk only for the duration of their
//! request and are removed on every exit path.

pub mod artifact;
pub mod client;
pub mod config;
pub mod encoder;
pub mod error;
pub mod models;
pub mod server;

pub use client::{GenerationBackend, GenerativeModel};
pub use error::GatewayError;
