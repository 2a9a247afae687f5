use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

/// Proxy service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Whether LAN access is allowed
    /// - false: loopback only, 127.0.0.1 (default)
    /// - true: bind 0.0.0.0
    #[serde(default)]
    pub allow_lan_access: bool,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream API key (`GEMINI_API_KEY`). An absent key is not a
    /// startup failure: generate requests answer 500 while the static
    /// page keeps serving.
    #[serde(default)]
    pub gemini_api_key: Option<Secret<String>>,

    /// Model identifier used for upstream calls
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative-language API
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,

    /// HTML document served at the root path
    #[serde(default = "default_page_path")]
    pub page_path: String,

    /// Outbound request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false,
            port: default_port(),
            gemini_api_key: None,
            model: default_model(),
            upstream_base_url: default_upstream_base_url(),
            page_path: default_page_path(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_port() -> u16 {
    8045
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-09-2025".to_string()
}

fn default_upstream_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_page_path() -> String {
    "static/index.html".to_string()
}

fn default_request_timeout() -> u64 {
    120
}

impl ProxyConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }

    /// Get the actual listen address
    /// - `allow_lan_access` = false: returns "127.0.0.1" (default)
    /// - `allow_lan_access` = true: returns "0.0.0.0"
    pub fn get_bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}
