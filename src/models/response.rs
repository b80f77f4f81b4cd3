//! Response models for the Gemini AI API.

use serde::Deserialize;

use super::Part;

/// A response from the Gemini AI API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The generated candidates from the model.
    pub candidates: Vec<Candidate>,
    /// Metadata about token usage.
    pub usage_metadata: Option<UsageMetadata>,
    /// The version of the model used.
    pub model_version: Option<String>,
}

impl Response {
    /// Gets the text content from all candidates' text parts.
    pub fn text(&self) -> String {
        self.candidates
            .iter()
            .flat_map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| match part {
                        Part::Text { text } => Some(text.clone()),
                        _ => None,
                    })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A candidate response from the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate response.
    pub content: CandidateContent,
    /// The reason why the generation finished.
    pub finish_reason: Option<String>,
}

/// The content of a single candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// The parts that make up the candidate content.
    pub parts: Vec<Part>,
    /// The role the content was generated under.
    pub role: Option<String>,
}

/// Metadata about token usage in the request and response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    pub prompt_token_count: i32,
    /// Number of tokens in the generated candidates.
    pub candidates_token_count: Option<i32>,
    /// Total number of tokens used.
    pub total_token_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_all_candidate_text_parts() {
        let response: Response = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "hello" }, { "text": "world" }], "role": "model" },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 1, "candidatesTokenCount": 2, "totalTokenCount": 3 },
            "modelVersion": "gemini-1.5-flash"
        }))
        .unwrap();
        assert_eq!(response.text(), "hello world");
    }
}
