//! Configuration management for rozbijacz
//!
//! Settings are read once from environment variables at startup, optionally
//! overridden from the command line, and then shared read-only with every
//! request handler.
//!
//! # Environment Variables
//!
//! - `GOOGLE_API_KEY`: Gemini credential. A missing key is reported as a startup
//!   warning only; the server still starts and every stage call then fails.
//! - `ROZBIJACZ_MODEL`: Gemini model name - default: "gemini-2.5-flash"
//! - `ROZBIJACZ_API_BASE_URL`: API base URL - default: Generative Language v1beta
//! - `ROZBIJACZ_BIND`: Listen address - default: "127.0.0.1:5000"
//! - `ROZBIJACZ_REQUEST_TIMEOUT`: Backend timeout in seconds - default: unset,
//!   meaning backend calls are never timed out
//! - `ROZBIJACZ_STATIC_DIR`: Directory holding `index.html` - default: "static"
//! - `ROZBIJACZ_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use rozbijacz::RozbijaczConfig;
//!
//! let config = RozbijaczConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! if let Err(e) = config.check_credentials() {
//!     eprintln!("warning: {}", e);
//! }
//! let client = config.create_client().expect("client");
//! ```

use crate::llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::llm::{BackendError, GeminiClient, GeminiClientConfig, SafetyPolicy};
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOG_LEVEL: &str = "info";
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Backend credential not present in the environment
    #[error("Missing API key. Set the GOOGLE_API_KEY environment variable")]
    MissingApiKey,

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },

    /// Backend initialization failed
    #[error("Backend initialization failed: {0}")]
    BackendInitError(#[from] BackendError),
}

/// Process-wide configuration
///
/// `Default::default()` loads from environment variables with fallback defaults.
#[derive(Clone)]
pub struct RozbijaczConfig {
    /// Gemini API key
    pub api_key: Option<String>,

    /// Gemini model name
    pub model: String,

    /// Generative Language API base URL
    pub endpoint: String,

    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Backend request timeout in seconds; `None` disables the timeout
    pub request_timeout_secs: Option<u64>,

    /// Directory served at `/` and `/static`
    pub static_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for RozbijaczConfig {
    fn default() -> Self {
        let api_key = env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty());

        let model = env::var("ROZBIJACZ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let endpoint =
            env::var("ROZBIJACZ_API_BASE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let bind_addr =
            env::var("ROZBIJACZ_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let request_timeout_secs = env::var("ROZBIJACZ_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        let static_dir = env::var("ROZBIJACZ_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let log_level = env::var("ROZBIJACZ_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            api_key,
            model,
            endpoint,
            bind_addr,
            request_timeout_secs,
            static_dir,
            log_level,
        }
    }
}

impl RozbijaczConfig {
    /// Validates the configuration
    ///
    /// Checks that:
    /// - The bind address parses as a socket address
    /// - A configured timeout is between 1 second and 10 minutes
    /// - Log level is valid
    ///
    /// The API key is deliberately not checked here; see [`Self::check_credentials`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        if let Some(secs) = self.request_timeout_secs {
            if secs == 0 {
                return Err(ConfigError::ValidationFailed(
                    "Request timeout must be at least 1 second".to_string(),
                ));
            }
            if secs > MAX_REQUEST_TIMEOUT_SECS {
                return Err(ConfigError::ValidationFailed(
                    "Request timeout cannot exceed 10 minutes".to_string(),
                ));
            }
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Model name cannot be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Reports a missing backend credential.
    ///
    /// Callers treat this as a warning: the process keeps running and stage
    /// calls fail individually with a configuration error.
    pub fn check_credentials(&self) -> Result<(), ConfigError> {
        match self.api_key {
            Some(_) => Ok(()),
            None => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError {
                field: "bind_addr".to_string(),
                error: e.to_string(),
            })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn gemini_config(&self) -> GeminiClientConfig {
        GeminiClientConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            timeout: self.request_timeout(),
            safety: SafetyPolicy::unfiltered(),
        }
    }

    /// Builds the Gemini client, once per process
    pub fn create_client(&self) -> Result<Arc<GeminiClient>, ConfigError> {
        let client = GeminiClient::new(self.gemini_config())?;
        Ok(Arc::new(client))
    }
}

impl fmt::Debug for RozbijaczConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RozbijaczConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("bind_addr", &self.bind_addr)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("static_dir", &self.static_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl fmt::Display for RozbijaczConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rozbijacz Configuration:")?;
        writeln!(
            f,
            "  API Key: {}",
            if self.api_key.is_some() { "set" } else { "MISSING" }
        )?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Endpoint: {}", self.endpoint)?;
        writeln!(f, "  Bind: {}", self.bind_addr)?;
        match self.request_timeout_secs {
            Some(secs) => writeln!(f, "  Request Timeout: {}s", secs)?,
            None => writeln!(f, "  Request Timeout: none")?,
        }
        writeln!(f, "  Static Dir: {}", self.static_dir.display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn remove(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    fn base_config() -> RozbijaczConfig {
        RozbijaczConfig {
            api_key: Some("key".to_string()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout_secs: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::remove(API_KEY_ENV),
            EnvGuard::remove("ROZBIJACZ_MODEL"),
            EnvGuard::remove("ROZBIJACZ_API_BASE_URL"),
            EnvGuard::remove("ROZBIJACZ_BIND"),
            EnvGuard::remove("ROZBIJACZ_REQUEST_TIMEOUT"),
            EnvGuard::remove("ROZBIJACZ_STATIC_DIR"),
            EnvGuard::remove("ROZBIJACZ_LOG_LEVEL"),
        ];

        let config = RozbijaczConfig::default();

        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert!(config.request_timeout_secs.is_none());
        assert!(config.request_timeout().is_none());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        let _guards = vec![
            EnvGuard::set(API_KEY_ENV, "abc"),
            EnvGuard::set("ROZBIJACZ_MODEL", "gemini-2.5-pro"),
            EnvGuard::set("ROZBIJACZ_REQUEST_TIMEOUT", "45"),
            EnvGuard::set("ROZBIJACZ_LOG_LEVEL", "DEBUG"),
        ];

        let config = RozbijaczConfig::default();

        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_blank_api_key_counts_as_missing() {
        let _guard = EnvGuard::set(API_KEY_ENV, "   ");

        let config = RozbijaczConfig::default();

        assert!(matches!(
            config.check_credentials(),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_missing_key_does_not_fail_validation() {
        let config = RozbijaczConfig {
            api_key: None,
            ..base_config()
        };
        assert!(config.validate().is_ok());
        assert!(config.check_credentials().is_err());
    }

    #[test]
    fn test_validation_timeout_bounds() {
        let config = RozbijaczConfig {
            request_timeout_secs: Some(0),
            ..base_config()
        };
        assert!(config.validate().is_err());

        let config = RozbijaczConfig {
            request_timeout_secs: Some(601),
            ..base_config()
        };
        assert!(config.validate().is_err());

        let config = RozbijaczConfig {
            request_timeout_secs: Some(600),
            ..base_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_bind_addr() {
        let config = RozbijaczConfig {
            bind_addr: "not-an-address".to_string(),
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_validation_log_level() {
        let config = RozbijaczConfig {
            log_level: "verbose".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gemini_config_carries_unfiltered_policy() {
        let config = RozbijaczConfig {
            request_timeout_secs: Some(30),
            ..base_config()
        };
        let gemini = config.gemini_config();

        assert_eq!(gemini.safety, SafetyPolicy::unfiltered());
        assert_eq!(gemini.timeout, Some(Duration::from_secs(30)));
        assert_eq!(gemini.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_display_and_debug_hide_key() {
        let config = RozbijaczConfig {
            api_key: Some("super-secret".to_string()),
            ..base_config()
        };

        let display = config.to_string();
        assert!(display.contains("API Key: set"));
        assert!(display.contains("Request Timeout: none"));
        assert!(!display.contains("super-secret"));
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn test_create_client() {
        let client = base_config().create_client().unwrap();
        assert_eq!(crate::llm::LLMClient::name(client.as_ref()), "gemini");
    }
}
