//! # Telegram Gateway Core
//!
//! Shared building blocks for talking to the Telegram Gateway API:
//!
//! - **Configuration**: access token and report settings from code, environment
//!   variables (`TELEGRAM_GATEWAY_*`, with `.env` support), TOML or JSON
//! - **API errors**: classification of the gateway's error codes, including
//!   `FLOOD_WAIT_<n>` back-off hints
//! - **Parameter limits**: the bounds the gateway enforces on codes,
//!   payloads and time-to-live values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tgateway_core::GatewayConfig;
//!
//! // Reads TELEGRAM_GATEWAY_ACCESS_TOKEN (and optional overrides)
//! let config = GatewayConfig::from_env()?;
//! println!("Using {}", config.base_url);
//! # Ok::<(), tgateway_core::ConfigError>(())
//! ```

mod api_error;
mod config;
mod env;
mod error;
pub mod limits;

pub use api_error::{ApiErrorCode, GatewayApiError};
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_SIGNATURE_HEADER, DEFAULT_TIMESTAMP_HEADER, FileFormat,
    GatewayConfig, GatewayConfigBuilder, WebhookSettings,
};
pub use env::{ENV_PREFIX, EnvLoader};
pub use error::{ConfigError, Result, ValidationError};
