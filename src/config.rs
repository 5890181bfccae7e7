//! Provider configuration
//!
//! Connection settings an embedding host needs to build its Operations Center
//! client. Values come from a configuration document or from `SPOC_*`
//! environment variables.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::{Error, Result};

pub const ENV_USERNAME: &str = "SPOC_USERNAME";
pub const ENV_PASSWORD: &str = "SPOC_PASSWORD";
pub const ENV_ENDPOINT: &str = "SPOC_ENDPOINT";
pub const ENV_URL_SCHEME: &str = "SPOC_URL_SCHEME";
pub const ENV_SSL_VERIFY: &str = "SPOC_SSL_VERIFY";

/// Operations Center connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Operations Center username
    pub username: String,

    /// Operations Center password
    #[serde(deserialize_with = "crate::secret_string::deserialize")]
    pub password: SecretString,

    /// Operations Center host, optionally with port
    pub endpoint: String,

    /// URL scheme of the REST API
    #[serde(default = "default_url_scheme")]
    pub url_scheme: String,

    /// Verify the server certificate
    #[serde(default = "default_ssl_verify")]
    pub ssl_verify: bool,
}

fn default_url_scheme() -> String {
    "https".to_string()
}

fn default_ssl_verify() -> bool {
    true
}

impl ProviderConfig {
    /// Load configuration from `SPOC_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_var_or_none)
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::config(format!("{} must be set", key)))
        };

        let ssl_verify = match lookup(ENV_SSL_VERIFY) {
            Some(value) => value.parse().map_err(|_| {
                Error::config(format!("{} must be true or false, got '{}'", ENV_SSL_VERIFY, value))
            })?,
            None => default_ssl_verify(),
        };

        let config = Self {
            username: required(ENV_USERNAME)?,
            password: SecretString::new(required(ENV_PASSWORD)?.into()),
            endpoint: required(ENV_ENDPOINT)?,
            url_scheme: lookup(ENV_URL_SCHEME).unwrap_or_else(default_url_scheme),
            ssl_verify,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::config("username must not be empty"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(Error::config("password must not be empty"));
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::config("endpoint must not be empty"));
        }
        if self.endpoint.contains("://") {
            return Err(Error::config(format!(
                "endpoint '{}' must be a host[:port], set the scheme separately",
                self.endpoint
            )));
        }
        match self.url_scheme.as_str() {
            "http" | "https" => Ok(()),
            other => Err(Error::config(format!(
                "Invalid URL scheme '{}': must be one of: http, https",
                other
            ))),
        }
    }

    /// Base URL of the Operations Center REST API
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.url_scheme, self.endpoint.trim_end_matches('/'))
    }

    /// User agent the remote client should send
    pub fn user_agent(&self) -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// Read an environment variable, treating empty or whitespace-only values as unset.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
