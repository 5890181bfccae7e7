//! Error types for the SPOC client provider

use thiserror::Error;

use crate::remote::RemoteError;

/// Result type alias using the provider's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Provider error types
#[derive(Error, Debug)]
pub enum Error {
    /// Remote value outside the yes/no vocabulary
    #[error("Unable to parse '{value}' as a yes/no boolean")]
    MalformedBooleanEncoding { value: String },

    /// Stored identifier cannot be split into (server, name)
    #[error("Malformed client identifier: {0}")]
    MalformedIdentifier(String),

    /// A client with the same identity is already registered
    #[error("A node with name {name} already exists on server {server_name}")]
    AlreadyExists { server_name: String, name: String },

    /// Client not found
    #[error("Client not found: {0}")]
    NotFound(String),

    /// Remote service call failed
    #[error(transparent)]
    RemoteCallFailed(#[from] RemoteError),

    /// Creation-only attribute changed during an update
    #[error("Attribute '{attribute}' cannot be changed without recreating the client")]
    ImmutableAttributeChanged { attribute: &'static str },

    /// Remote service returned a value outside an attribute's vocabulary
    #[error("Unexpected value '{value}' for attribute '{attribute}'")]
    UnexpectedValue {
        attribute: &'static str,
        value: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML rendering error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Metrics exposition error
    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a malformed identifier error
    pub fn malformed_identifier(msg: impl Into<String>) -> Self {
        Error::MalformedIdentifier(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedBooleanEncoding { .. } => "malformed_boolean",
            Error::MalformedIdentifier(_) => "malformed_identifier",
            Error::AlreadyExists { .. } => "already_exists",
            Error::NotFound(_) => "not_found",
            Error::RemoteCallFailed(_) => "remote_call_failed",
            Error::ImmutableAttributeChanged { .. } => "immutable_attribute",
            Error::UnexpectedValue { .. } => "unexpected_value",
            Error::Validation(_) => "validation",
            Error::Config(_) => "config",
            Error::Serialization(_) | Error::Yaml(_) => "serialization",
            Error::Metrics(_) => "metrics",
        }
    }
}
