//! Resource schema generator
//!
//! This binary prints the JSON schemas of the resources managed by the
//! provider as YAML documents.
//!
//! Usage: cargo run --bin schemagen > docs/schemas.yaml

use spoc_provider::{resource::generate_schemas, telemetry};
use tracing::info;

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let schemas = generate_schemas()?;
    info!(count = schemas.len(), "Generated resource schemas");

    for schema in schemas {
        println!("---");
        print!("{}", schema);
    }
    Ok(())
}
