//! Service configuration
//!
//! Client settings loaded from a YAML file with environment overrides.
//! A minimal config is just a base URL and credentials:
//!
//! ```yaml
//! base_url: https://api.warden.cloud
//! auth:
//!   type: api_key
//!   api_key: k-xxxx
//!   token_url: https://api.warden.cloud/oauth/token
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, ThrottleConfig};
use crate::types::{BackoffType, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_base_url() -> String {
    "https://api.warden.cloud".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_throttle() -> Option<ThrottleConfig> {
    Some(ThrottleConfig::default())
}

/// Client configuration for the Warden service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL for all API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retries for a failed request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// Client-side throttle; null disables it
    #[serde(default = "default_throttle")]
    pub throttle: Option<ThrottleConfig>,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            throttle: default_throttle(),
            auth: AuthConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&contents)?;
        config.apply_env();
        Ok(config)
    }

    /// Build configuration from defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Apply `WARDEN_*` environment variables on top of this config
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from the given lookup (separated out for testing)
    fn apply_env_from<F: Fn(&str) -> Option<String>>(&mut self, get: F) {
        if let Some(base_url) = get("WARDEN_BASE_URL").none_if_empty() {
            self.base_url = base_url;
        }

        // Credentials from the environment win over the file: a bearer token
        // if present, otherwise an API key.
        if let Some(token) = get("WARDEN_TOKEN").none_if_empty() {
            self.auth = AuthConfig::Bearer { token };
        } else if let Some(api_key) = get("WARDEN_API_KEY").none_if_empty() {
            let token_url = get("WARDEN_TOKEN_URL")
                .none_if_empty()
                .unwrap_or_else(|| format!("{}/oauth/token", self.base_url.trim_end_matches('/')));
            self.auth = AuthConfig::ApiKey { api_key, token_url };
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(Error::InvalidConfigValue {
                field: "base_url".to_string(),
                message: format!("not a valid URL: {}", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfigValue {
                field: "timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Derive the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(100),
                Duration::from_secs(60),
            );

        builder = match self.throttle {
            Some(throttle) => builder.throttle(throttle),
            None => builder.no_throttle(),
        };

        builder.build()
    }
}
