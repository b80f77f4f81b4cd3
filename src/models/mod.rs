//! Data structures for the Gemini AI API requests and responses.

mod model_params;
mod part;
mod request;
mod request_type;
mod response;

pub use model_params::ModelParams;
pub use part::{AudioData, InlineData, MediaKind, Part};
pub use request::{Content, Request};
pub use request_type::RequestType;
pub use response::{Candidate, CandidateContent, Response, UsageMetadata};
