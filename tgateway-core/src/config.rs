//! Gateway configuration

use crate::{ConfigError, EnvLoader, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://gatewayapi.telegram.org";

/// Default header carrying the report timestamp
pub const DEFAULT_TIMESTAMP_HEADER: &str = "X-Request-Timestamp";

/// Default header carrying the report signature
pub const DEFAULT_SIGNATURE_HEADER: &str = "X-Request-Signature";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Settings for receiving delivery reports
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebhookSettings {
    /// Header carrying the report timestamp
    pub timestamp_header: String,

    /// Header carrying the report signature
    pub signature_header: String,

    /// Freshness window for report timestamps (in seconds)
    pub timestamp_tolerance: u64,

    /// Maximum accepted report body in bytes
    pub max_body_size: usize,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            timestamp_header: DEFAULT_TIMESTAMP_HEADER.to_string(),
            signature_header: DEFAULT_SIGNATURE_HEADER.to_string(),
            timestamp_tolerance: 300,  // 5 minutes
            max_body_size: 64 * 1024, // 64KB
        }
    }
}

/// Configuration for a gateway account.
///
/// The access token authenticates API calls and keys report signatures.
/// It is never printed by `Debug`.
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    access_token: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Report receiving settings
    #[serde(default)]
    pub webhook: WebhookSettings,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl GatewayConfig {
    /// Create a configuration with defaults for everything but the token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: default_base_url(),
            webhook: WebhookSettings::default(),
        }
    }

    /// Create a builder for custom configuration
    pub fn builder(access_token: impl Into<String>) -> GatewayConfigBuilder {
        GatewayConfigBuilder::new(access_token)
    }

    /// The account access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Load configuration from `TELEGRAM_GATEWAY_*` variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn from_env() -> Result<Self> {
        EnvLoader::load_dotenv()?;
        Self::from_loader(&EnvLoader::default())
    }

    /// Load configuration through an explicit loader
    pub fn from_loader(loader: &EnvLoader) -> Result<Self> {
        let mut builder = Self::builder(loader.load_var("ACCESS_TOKEN")?);

        if let Some(base_url) = loader.load_opt("BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Some(tolerance) = loader.load_opt("TIMESTAMP_TOLERANCE") {
            let seconds = tolerance.trim().parse().map_err(|_| {
                ConfigError::ParseError(format!(
                    "{} must be a number of seconds, got {:?}",
                    loader.full_key("TIMESTAMP_TOLERANCE"),
                    tolerance
                ))
            })?;
            builder = builder.timestamp_tolerance(seconds);
        }

        builder.build()
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), ?format, "Loading gateway configuration");

        match format {
            FileFormat::Json => Self::from_json_str(&content),
            FileFormat::Toml => Self::from_toml_str(&content),
        }
    }

    /// Check the configuration for values the gateway would refuse
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "access token must not be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "base URL must use https: {}",
                self.base_url
            )));
        }

        if self.webhook.timestamp_header.is_empty() || self.webhook.signature_header.is_empty() {
            return Err(ConfigError::ValidationError(
                "webhook header names must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("webhook", &self.webhook)
            .finish()
    }
}

/// Builder for GatewayConfig
#[derive(Debug, Clone)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Create a new builder with default settings
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            config: GatewayConfig::new(access_token),
        }
    }

    /// Set the API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the timestamp header name
    pub fn timestamp_header(mut self, name: impl Into<String>) -> Self {
        self.config.webhook.timestamp_header = name.into();
        self
    }

    /// Set the signature header name
    pub fn signature_header(mut self, name: impl Into<String>) -> Self {
        self.config.webhook.signature_header = name.into();
        self
    }

    /// Set timestamp tolerance for report verification
    pub fn timestamp_tolerance(mut self, seconds: u64) -> Self {
        self.config.webhook.timestamp_tolerance = seconds;
        self
    }

    /// Set maximum report body size
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.webhook.max_body_size = size;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<GatewayConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
