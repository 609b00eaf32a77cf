//! Central schema registry for all Ecotrack contract types.
//!
//! The `SchemaRegistry` builds JSON Schemas from eco-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use eco_core::entities::{AuthState, Notification, User, WasteReport};
use eco_core::enums::EntityKind;
use schemars::schema_for;
use serde::de::DeserializeOwned;

use crate::error::SchemaError;

/// Central store of all JSON Schemas of the Ecotrack contracts.
///
/// Built from eco-core types via [`schemars::schema_for!`]. Each schema is
/// compiled into a `jsonschema` validator once, at construction, and reused
/// for every document.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, RegisteredSchema>,
}

struct RegisteredSchema {
    schema: serde_json::Value,
    validator: jsonschema::Validator,
}

/// Generate the schema for `$ty`, compile it, and insert both into the map.
/// Panics if `serde_json::to_value` or compilation fails (both should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        let schema = serde_json::to_value(schema_for!($ty)).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        $map.insert($name, RegisteredSchema { schema, validator });
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity and enumeration schemas
    /// from eco-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` or `jsonschema` compilation fails on
    /// any `schemars`-generated schema. This is not expected in practice
    /// because `schemars` always produces valid draft 2020-12 output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (5) ---
        register!(schemas, "user", eco_core::entities::User);
        register!(schemas, "waste_report", eco_core::entities::WasteReport);
        register!(schemas, "location", eco_core::entities::Location);
        register!(schemas, "notification", eco_core::entities::Notification);
        register!(schemas, "auth_state", eco_core::entities::AuthState);

        // --- Closed enumerations (3) ---
        register!(schemas, "role", eco_core::enums::Role);
        register!(schemas, "report_status", eco_core::enums::ReportStatus);
        register!(schemas, "waste_type", eco_core::enums::WasteType);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name).map(|entry| &entry.schema)
    }

    /// Get the compiled validator for a schema. Returns `None` if not found.
    #[must_use]
    pub fn validator(&self, name: &str) -> Option<&jsonschema::Validator> {
        self.schemas.get(name).map(|entry| &entry.validator)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let validator = self
            .validator(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(schema = name, count = errors.len(), "schema validation failed");
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate a JSON value as a full entity of `kind`.
    ///
    /// Runs structural validation first, then decodes into the typed struct
    /// (which also rejects malformed timestamps) and checks shape invariants
    /// such as "an authenticated `AuthState` carries a user".
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` on any structural, decoding,
    /// or invariant failure.
    pub fn validate_entity(
        &self,
        kind: EntityKind,
        instance: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        self.validate(kind.as_str(), instance)?;

        match kind {
            EntityKind::User => decode::<User>(instance).map(drop),
            EntityKind::WasteReport => decode::<WasteReport>(instance).map(drop),
            EntityKind::Notification => decode::<Notification>(instance).map(drop),
            EntityKind::AuthState => {
                let state = decode::<AuthState>(instance)?;
                state
                    .check_invariants()
                    .map_err(|e| SchemaError::ValidationFailed {
                        errors: vec![e.to_string()],
                    })
            }
        }
    }

    /// Write every schema to `dir` as `<name>.schema.json`.
    ///
    /// Creates `dir` if needed and overwrites existing files. Returns the
    /// written paths in name order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Io` if the directory or a file cannot be written,
    /// or `SchemaError::Generation` if a schema fails to render.
    pub fn export_all(&self, dir: &Path, pretty: bool) -> Result<Vec<PathBuf>, SchemaError> {
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.schemas.len());
        for name in self.list() {
            let schema = &self.schemas[name].schema;
            let rendered = if pretty {
                serde_json::to_string_pretty(schema)
            } else {
                serde_json::to_string(schema)
            }
            .map_err(|e| SchemaError::Generation(format!("{name}: {e}")))?;

            let path = dir.join(format!("{name}.schema.json"));
            fs::write(&path, rendered)?;
            tracing::debug!(schema = name, path = %path.display(), "exported schema");
            written.push(path);
        }

        Ok(written)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn decode<T: DeserializeOwned>(instance: &serde_json::Value) -> Result<T, SchemaError> {
    T::deserialize(instance).map_err(|e| SchemaError::ValidationFailed {
        errors: vec![e.to_string()],
    })
}
