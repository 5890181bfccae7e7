//! Shared provider context
//!
//! Holds the single Operations Center handle that every lifecycle operation
//! and lookup reuses.

use std::sync::Arc;

use tracing::info;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::reconcilers::{ClientQuery, ClientReconciler};
use crate::remote::OperationsCenter;

/// Shared context for all resources
pub struct Provider<C: ?Sized> {
    /// Operations Center client
    pub remote: Arc<C>,
}

impl<C: OperationsCenter + ?Sized> Provider<C> {
    /// Create a new context
    pub fn new(remote: Arc<C>) -> Self {
        Self { remote }
    }

    /// Reconciler for the client resource
    pub fn clients(&self) -> ClientReconciler<C> {
        ClientReconciler::new(self.remote.clone())
    }

    /// Read-only client lookup
    pub fn client_query(&self) -> ClientQuery<C> {
        ClientQuery::new(self.remote.clone())
    }
}

impl<C: OperationsCenter> Provider<C> {
    /// Validate the configuration and build the remote client with `connect`
    pub fn configure<F>(config: &ProviderConfig, connect: F) -> Result<Self>
    where
        F: FnOnce(&ProviderConfig) -> Result<C>,
    {
        config.validate()?;
        let remote = connect(config)?;
        info!(
            base_url = %config.base_url(),
            ssl_verify = config.ssl_verify,
            "Configured Operations Center client"
        );
        Ok(Self::new(Arc::new(remote)))
    }
}
