// Environment variable loading

use crate::{ConfigError, Result};
use std::env;

/// Prefix shared by every gateway environment variable
pub const ENV_PREFIX: &str = "TELEGRAM_GATEWAY";

/// Environment variable loader
pub struct EnvLoader {
    prefix: Option<String>,
    lookup: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl EnvLoader {
    /// Create a loader reading the process environment
    pub fn new(prefix: Option<String>) -> Self {
        Self::with_lookup(prefix, |key| env::var(key).ok())
    }

    /// Create a loader reading variables from `lookup` instead of the process
    pub fn with_lookup<F>(prefix: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            prefix,
            lookup: Box::new(lookup),
        }
    }

    /// Load `.env` from the working directory into the process environment.
    ///
    /// A missing file is not an error.
    pub fn load_dotenv() -> Result<()> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::LoadError(format!("Failed to read .env: {}", e))),
        }
    }

    /// Full variable name for `key`
    pub fn full_key(&self, key: &str) -> String {
        if let Some(ref prefix) = self.prefix {
            format!("{}_{}", prefix, key.to_uppercase())
        } else {
            key.to_uppercase()
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = self.full_key(key);
        (self.lookup)(&full_key).ok_or(ConfigError::MissingVar(full_key))
    }

    /// Load an optional environment variable
    pub fn load_opt(&self, key: &str) -> Option<String> {
        (self.lookup)(&self.full_key(key))
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(ENV_PREFIX.to_string()))
    }
}
