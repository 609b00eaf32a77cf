use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ExportResponse {
    pub dir: String,
    pub files: Vec<String>,
}

/// Handle `eco export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.schema.export_dir));
    let pretty = ctx.config.schema.pretty && !args.compact;

    let response = run(ctx, &dir, pretty)?;
    tracing::info!(dir = %response.dir, files = response.files.len(), "schemas exported");
    if flags.quiet {
        return Ok(());
    }
    output(&response, flags.format)
}

pub fn run(ctx: &AppContext, dir: &Path, pretty: bool) -> anyhow::Result<ExportResponse> {
    let written = ctx
        .registry
        .export_all(dir, pretty)
        .with_context(|| format!("failed to export schemas to {}", dir.display()))?;

    let files = written
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    Ok(ExportResponse {
        dir: dir.display().to_string(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use eco_config::EcoConfig;

    use super::{handle, run};
    use crate::cli::root_commands::ExportArgs;
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    #[test]
    fn exports_every_registered_schema() {
        let ctx = AppContext::init(EcoConfig::default()).expect("context");
        let dir = tempfile::tempdir().expect("tempdir");

        let response = run(&ctx, dir.path(), true).expect("export");
        assert_eq!(response.files.len(), ctx.registry.schema_count());
        assert!(response.files.contains(&"waste_report.schema.json".to_string()));
        assert!(dir.path().join("auth_state.schema.json").is_file());
    }

    #[test]
    fn quiet_export_still_writes_files() {
        let ctx = AppContext::init(EcoConfig::default()).expect("context");
        let dir = tempfile::tempdir().expect("tempdir");
        let args = ExportArgs {
            dir: Some(dir.path().join("out")),
            compact: true,
        };
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
        };

        handle(&args, &ctx, &flags).expect("export");
        let written = std::fs::read_to_string(dir.path().join("out").join("user.schema.json"))
            .expect("user schema written");
        assert!(!written.contains('\n'));
    }
}
