//! Operations Center remote interface
//!
//! The reconcilers never talk HTTP themselves. They consume the capability set
//! below, which an embedding host implements on top of its REST client.

mod types;

pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Result type for remote calls
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Failure reported by the remote-service client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Request never produced a response
    #[error("{call} request failed: {message}")]
    Transport { call: &'static str, message: String },

    /// Response carried a non-success status
    #[error("{call} returned HTTP {status}: {message}")]
    Status {
        call: &'static str,
        status: u16,
        message: String,
    },
}

impl RemoteError {
    /// Create a transport error
    pub fn transport(call: &'static str, message: impl Into<String>) -> Self {
        RemoteError::Transport {
            call,
            message: message.into(),
        }
    }

    /// Create a status error
    pub fn status(call: &'static str, status: u16, message: impl Into<String>) -> Self {
        RemoteError::Status {
            call,
            status,
            message: message.into(),
        }
    }
}

/// Client operations exposed by the Operations Center REST API.
///
/// Timeouts, retries and authentication belong to the implementor; the
/// reconcilers propagate every error unchanged.
#[async_trait]
pub trait OperationsCenter: Send + Sync {
    /// List every client visible to the configured credentials.
    async fn list_clients(&self) -> RemoteResult<Vec<BackupClient>>;

    /// Fetch client details.
    ///
    /// `Ok(None)` means the service answered successfully with an empty
    /// payload, which is how it reports an unknown client.
    async fn client_details(&self, server: &str, name: &str)
        -> RemoteResult<Option<ClientDetails>>;

    /// Fetch the at-risk flag of a client.
    async fn at_risk(&self, server: &str, name: &str) -> RemoteResult<AtRisk>;

    /// List the schedules a client is associated with in a policy domain.
    async fn schedules(
        &self,
        server: &str,
        domain: &str,
        name: &str,
    ) -> RemoteResult<Vec<ClientSchedule>>;

    /// List the filespaces of a client.
    async fn filespaces(&self, server: &str, name: &str) -> RemoteResult<Vec<Filespace>>;

    /// Register a new client node.
    async fn register_client(
        &self,
        server: &str,
        request: &RegisterClientRequest,
    ) -> RemoteResult<()>;

    /// Lock a client node.
    async fn lock(&self, server: &str, name: &str) -> RemoteResult<()>;

    /// Unlock a client node.
    async fn unlock(&self, server: &str, name: &str) -> RemoteResult<()>;

    /// Replace the password of a client node.
    async fn update_password(&self, server: &str, name: &str, password: &str)
        -> RemoteResult<()>;

    /// Move a client into a policy domain and associate it with a schedule.
    async fn assign_schedule(
        &self,
        server: &str,
        name: &str,
        domain: &str,
        schedule: Option<&str>,
    ) -> RemoteResult<()>;

    /// Decommission a client node. The record stays on the server.
    async fn decommission(&self, server: &str, name: &str) -> RemoteResult<()>;
}
