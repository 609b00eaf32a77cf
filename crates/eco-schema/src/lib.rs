//! # eco-schema
//!
//! JSON Schema generation, validation, and export for Ecotrack.
//!
//! This crate provides:
//! - `SchemaRegistry`: every contract schema, built from `eco-core` types
//! - Structural validation of arbitrary JSON against a named schema
//! - Entity validation: structure, typed decoding, and shape invariants
//! - Schema export for external tooling (`eco export`, front-end codegen)
//!
//! ## Architecture
//!
//! Contract types are defined in `eco-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and
//! export layer.

mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
