use eco_config::EcoConfig;
use eco_schema::SchemaRegistry;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: EcoConfig,
    pub registry: SchemaRegistry,
}

impl AppContext {
    /// Build the schema registry for the loaded configuration.
    pub fn init(config: EcoConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let registry = SchemaRegistry::new();
        tracing::debug!(schemas = registry.schema_count(), "schema registry ready");
        Ok(Self { config, registry })
    }
}
