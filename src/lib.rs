//! SPOC client provider
//!
//! Reconciles declarative backup-client registrations against the IBM
//! Spectrum Protect Operations Center REST API.

pub mod adapters;
pub mod config;
pub mod error;
pub mod metrics;
pub mod provider;
pub mod reconcilers;
pub mod remote;
pub mod resource;
mod secret_string;
pub mod telemetry;

pub use error::{Error, Result};
