//! Client implementation for the Gemini AI API.

use async_trait::async_trait;

use crate::{
    error::GatewayError,
    models::{ModelParams, Request, RequestType, Response},
};

/// Default API endpoint for Google's Generative AI service
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version
const DEFAULT_API_VERSION: &str = "v1beta";

/// The generation capability the gateway depends on.
///
/// One method, held behind a trait object in shared state, so handlers are
/// testable against a stub without a network dependency. Any failure is
/// reported through [`GatewayError::Backend`] carrying the backend's own
/// description; no retries happen at this layer.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Sends a composed request to the backend and returns the generated
    /// text.
    async fn generate(&self, request: Request) -> Result<String, GatewayError>;
}

/// A client for the real Gemini AI API.
#[derive(Debug, Clone)]
pub struct GenerativeModel {
    api_key: String,
    params: ModelParams,
    client: reqwest::Client,
}

impl GenerativeModel {
    /// Creates a new model client with the specified API key and parameters.
    pub fn new(api_key: impl Into<String>, params: impl Into<ModelParams>) -> Self {
        Self {
            api_key: api_key.into(),
            params: params.into(),
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, request_type: RequestType) -> String {
        format!(
            "{}/{}/models/{}:{}?key={}",
            DEFAULT_BASE_URL, DEFAULT_API_VERSION, self.params.model, request_type, self.api_key
        )
    }

    /// Posts the request and maps transport and API failures uniformly onto
    /// [`GatewayError::Backend`].
    async fn make_request(&self, url: &str, request: &Request) -> Result<Response, GatewayError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|err| GatewayError::backend(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GatewayError::backend(format!(
                "Request failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|err| GatewayError::backend(err.to_string()))
    }
}

#[async_trait]
impl GenerationBackend for GenerativeModel {
    async fn generate(&self, request: Request) -> Result<String, GatewayError> {
        let url = self.build_url(RequestType::GenerateContent);
        let response = self.make_request(&url, &request).await?;
        Ok(response.text())
    }
}
