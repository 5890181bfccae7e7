//! Resource models managed by the provider

mod client;
mod client_query;

pub use client::*;
pub use client_query::*;

use schemars::schema_for;

use crate::error::Result;

/// Generate the JSON schemas of all resource types as YAML documents
pub fn generate_schemas() -> Result<Vec<String>> {
    let schemas = [
        serde_json::to_value(schema_for!(ClientResource))?,
        serde_json::to_value(schema_for!(ClientQueryResult))?,
    ];

    schemas
        .iter()
        .map(|schema| Ok(serde_yaml::to_string(schema)?))
        .collect()
}
