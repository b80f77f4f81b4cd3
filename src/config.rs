//! Process configuration read from the environment at startup.

use std::path::PathBuf;

use crate::error::GatewayError;

/// Default model identifier
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
/// Default directory for transient uploads
const DEFAULT_UPLOAD_DIR: &str = "uploads";
/// Fixed listening port
const PORT: u16 = 3000;

/// Gateway configuration, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API credential for the generation backend.
    pub api_key: String,
    /// Model identifier to generate with.
    pub model: String,
    /// Directory transient uploads are staged under.
    pub upload_dir: PathBuf,
    /// Port the gateway listens on.
    pub port: u16,
}

impl GatewayConfig {
    /// Loads configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// * `GEMINI_API_KEY` - required backend credential
    /// * `GEMINI_MODEL` - optional model override
    /// * `UPLOAD_DIR` - optional staging directory override
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = std::env::var("GEMINI_API_KEY")?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());

        Ok(Self {
            api_key,
            model,
            upload_dir: PathBuf::from(upload_dir),
            port: PORT,
        })
    }
}
