//! Configuration for the report receiver

use tgateway_core::{DEFAULT_SIGNATURE_HEADER, DEFAULT_TIMESTAMP_HEADER, WebhookSettings};
use tgateway_integrity::DEFAULT_TOLERANCE_SECS;

/// Configuration for the report receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverConfig {
    /// Header carrying the report timestamp
    pub timestamp_header: String,

    /// Header carrying the report signature
    pub signature_header: String,

    /// Timestamp tolerance for signature verification (in seconds)
    pub timestamp_tolerance: u64,

    /// Maximum body size in bytes
    pub max_body_size: usize,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            timestamp_header: DEFAULT_TIMESTAMP_HEADER.to_string(),
            signature_header: DEFAULT_SIGNATURE_HEADER.to_string(),
            timestamp_tolerance: DEFAULT_TOLERANCE_SECS,
            max_body_size: 64 * 1024, // 64KB
        }
    }
}

impl ReceiverConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ReceiverConfigBuilder {
        ReceiverConfigBuilder::new()
    }
}

impl From<&WebhookSettings> for ReceiverConfig {
    fn from(settings: &WebhookSettings) -> Self {
        Self {
            timestamp_header: settings.timestamp_header.clone(),
            signature_header: settings.signature_header.clone(),
            timestamp_tolerance: settings.timestamp_tolerance,
            max_body_size: settings.max_body_size,
        }
    }
}

/// Builder for ReceiverConfig
#[derive(Debug, Clone, Default)]
pub struct ReceiverConfigBuilder {
    config: ReceiverConfig,
}

impl ReceiverConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: ReceiverConfig::default(),
        }
    }

    /// Set the timestamp header name
    pub fn timestamp_header(mut self, name: impl Into<String>) -> Self {
        self.config.timestamp_header = name.into();
        self
    }

    /// Set the signature header name
    pub fn signature_header(mut self, name: impl Into<String>) -> Self {
        self.config.signature_header = name.into();
        self
    }

    /// Set timestamp tolerance for signature verification
    pub fn timestamp_tolerance(mut self, seconds: u64) -> Self {
        self.config.timestamp_tolerance = seconds;
        self
    }

    /// Set maximum body size
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReceiverConfig {
        self.config
    }
}
