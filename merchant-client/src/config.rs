//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | MERCHANT_API_URL | http://localhost:8080 | Backend base URL |
//! | MERCHANT_API_TOKEN | (none) | Bearer token |
//! | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
//! | MERCHANT_PLATFORM | native | `native` or `web` |
//! | MERCHANT_CAN_BULK_EDIT | true | Capability flag for bulk edits |
//! | MERCHANT_CAN_DELETE | true | Capability flag for bulk deletes |
//! | SEARCH_DEBOUNCE_MS | 300 | Search input debounce |
//! | LOG_LEVEL | info | Log level / filter directive |
//! | LOG_DIR | (none) | Directory for daily rolling log files |

use std::str::FromStr;
use std::time::Duration;

/// Target platform the client runs on
///
/// Drag-to-reorder is only available on native targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Native,
    Web,
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "ios" | "android" => Ok(Platform::Native),
            "web" => Ok(Platform::Web),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

/// Client-side capability flags
///
/// The backend stays the authority; these only block actions early with a
/// readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_bulk_edit: bool,
    pub can_delete: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            can_bulk_edit: true,
            can_delete: true,
        }
    }
}

/// Client configuration for connecting to the merchant backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    pub platform: Platform,

    pub capabilities: Capabilities,

    /// Delay before a search input triggers a reload
    pub search_debounce_ms: u64,

    /// Log level or `EnvFilter` directive
    pub log_level: String,

    /// Directory for rolling log files; stdout only when unset
    pub log_dir: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            platform: Platform::Native,
            capabilities: Capabilities::default(),
            search_debounce_ms: 300,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::new("http://localhost:8080");
        Self {
            base_url: std::env::var("MERCHANT_API_URL").unwrap_or(defaults.base_url),
            token: std::env::var("MERCHANT_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            timeout: env_parse("REQUEST_TIMEOUT_SECS").unwrap_or(defaults.timeout),
            platform: env_parse("MERCHANT_PLATFORM").unwrap_or(defaults.platform),
            capabilities: Capabilities {
                can_bulk_edit: env_parse("MERCHANT_CAN_BULK_EDIT")
                    .unwrap_or(defaults.capabilities.can_bulk_edit),
                can_delete: env_parse("MERCHANT_CAN_DELETE")
                    .unwrap_or(defaults.capabilities.can_delete),
            },
            search_debounce_ms: env_parse("SEARCH_DEBOUNCE_MS")
                .unwrap_or(defaults.search_debounce_ms),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_search_debounce(mut self, millis: u64) -> Self {
        self.search_debounce_ms = millis;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
