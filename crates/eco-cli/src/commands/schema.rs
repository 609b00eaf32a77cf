use eco_schema::SchemaError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SchemaListResponse {
    schemas: Vec<&'static str>,
}

/// Handle `eco schema [name]`.
pub fn handle(args: &SchemaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &args.name {
        None => output(
            &SchemaListResponse {
                schemas: ctx.registry.list(),
            },
            flags.format,
        ),
        Some(name) => {
            let normalized = name.replace('-', "_");
            let schema = ctx
                .registry
                .get(&normalized)
                .ok_or_else(|| SchemaError::NotFound(name.clone()))?;
            output(schema, flags.format)
        }
    }
}
