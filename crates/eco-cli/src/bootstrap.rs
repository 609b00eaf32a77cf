use anyhow::Context;
use eco_config::EcoConfig;

/// Load layered configuration, including a `.env` file when present.
pub fn load_config() -> anyhow::Result<EcoConfig> {
    let config = EcoConfig::load_with_dotenv().context("failed to load ecotrack configuration")?;
    tracing::debug!(
        export_dir = %config.schema.export_dir,
        enforce_invariants = config.validation.enforce_invariants,
        "configuration loaded"
    );
    Ok(config)
}
