//! Reconcilers for SPOC backup clients
//!
//! This module contains the business logic behind each lifecycle operation.
//! Reconcilers are responsible for:
//! - Validating desired state
//! - Issuing Operations Center calls in a fixed order
//! - Normalizing what the server reports back

pub mod client;
pub mod client_query;

pub use client::ClientReconciler;
pub use client_query::{ClientQuery, QueryOptions};

use std::future::Future;

use crate::error::Result;
use crate::metrics;

/// Record count, duration and failure kind of one lifecycle operation
async fn tracked<T, F>(operation: &'static str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let _timer = metrics::RECONCILE_DURATION
        .with_label_values(&[operation])
        .start_timer();
    metrics::RECONCILIATIONS.with_label_values(&[operation]).inc();

    let result = fut.await;
    if let Err(e) = &result {
        metrics::RECONCILIATION_ERRORS
            .with_label_values(&[operation, e.kind()])
            .inc();
    }
    result
}
