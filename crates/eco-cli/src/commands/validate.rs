use std::io::Read;

use anyhow::{Context, bail};
use eco_core::enums::EntityKind;
use eco_schema::SchemaError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Errors for one document of the input.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DocumentErrors {
    /// Position in the input array; `0` for a single document.
    pub index: usize,
    pub errors: Vec<String>,
}

/// Response from `eco validate`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub kind: EntityKind,
    pub documents: usize,
    pub valid: bool,
    pub errors: Vec<DocumentErrors>,
}

/// Handle `eco validate <kind> <input>`.
pub fn handle(args: &ValidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind: EntityKind = parse_enum(&args.kind, "kind")?;
    let raw = read_input(&args.input)?;
    let input: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", args.input))?;

    let full = ctx.config.validation.enforce_invariants && !args.structural_only;
    let report = check(ctx, kind, &input, full);
    if !flags.quiet {
        output(&report, flags.format)?;
    }

    if report.documents == 0 {
        bail!("no documents to validate in {}", args.input);
    }
    if !report.valid {
        bail!(
            "{} of {} document(s) failed {kind} validation",
            report.errors.len(),
            report.documents
        );
    }
    Ok(())
}

/// Validate `input` (one document, or an array of documents) as `kind`.
///
/// With `full` set, documents also go through typed decoding and invariant
/// checks; otherwise only the JSON Schema is applied. An empty array is
/// never valid.
pub fn check(
    ctx: &AppContext,
    kind: EntityKind,
    input: &serde_json::Value,
    full: bool,
) -> ValidationReport {
    let documents: Vec<&serde_json::Value> = match input {
        serde_json::Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    let mut errors = Vec::new();
    for (index, document) in documents.iter().enumerate() {
        let result = if full {
            ctx.registry.validate_entity(kind, document)
        } else {
            ctx.registry.validate(kind.as_str(), document)
        };

        if let Err(error) = result {
            tracing::debug!(%kind, index, %error, "document rejected");
            errors.push(DocumentErrors {
                index,
                errors: messages(&error),
            });
        }
    }

    ValidationReport {
        kind,
        documents: documents.len(),
        valid: !documents.is_empty() && errors.is_empty(),
        errors,
    }
}

fn messages(error: &SchemaError) -> Vec<String> {
    match error.validation_errors() {
        [] => vec![error.to_string()],
        errors => errors.to_vec(),
    }
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
}

#[cfg(test)]
mod tests {
    use eco_config::EcoConfig;
    use eco_core::enums::EntityKind;
    use pretty_assertions::assert_eq;

    use super::{check, handle, read_input};
    use crate::cli::root_commands::ValidateArgs;
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn ctx() -> AppContext {
        AppContext::init(EcoConfig::default()).expect("context")
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: false,
        }
    }

    fn args_for(kind: &str, path: &std::path::Path) -> ValidateArgs {
        ValidateArgs {
            kind: kind.to_string(),
            input: path.to_str().expect("utf-8 path").to_string(),
            structural_only: false,
        }
    }

    fn report(status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "1",
            "userId": "u1",
            "userName": "Alice",
            "description": "litter",
            "imageUrl": "http://x/y.jpg",
            "location": {"latitude": 1.0, "longitude": 2.0, "address": "Main St"},
            "status": status,
            "wasteType": "general",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn single_valid_document() {
        let result = check(&ctx(), EntityKind::WasteReport, &report("reported"), true);
        assert!(result.valid);
        assert_eq!(result.documents, 1);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn array_reports_failing_indexes() {
        let input = serde_json::json!([report("reported"), report("done"), report("completed")]);
        let result = check(&ctx(), EntityKind::WasteReport, &input, true);

        assert!(!result.valid);
        assert_eq!(result.documents, 3);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].index, 1);
        assert!(!result.errors[0].errors.is_empty());
    }

    #[test]
    fn invariants_only_checked_in_full_mode() {
        let state = serde_json::json!({
            "user": null,
            "isAuthenticated": true,
            "isLoading": false,
            "error": null
        });

        let structural = check(&ctx(), EntityKind::AuthState, &state, false);
        assert!(structural.valid);

        let full = check(&ctx(), EntityKind::AuthState, &state, true);
        assert!(!full.valid);
        assert_eq!(
            full.errors[0].errors,
            ["Validation error: auth state is authenticated but has no user"]
        );
    }

    #[test]
    fn reads_documents_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        std::fs::write(&path, report("inProgress").to_string()).expect("write");

        let raw = read_input(path.to_str().expect("utf-8 path")).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert!(check(&ctx(), EntityKind::WasteReport, &value, true).valid);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_input("/definitely/not/here.json").is_err());
    }

    #[test]
    fn empty_array_is_not_valid() {
        let result = check(&ctx(), EntityKind::WasteReport, &serde_json::json!([]), true);
        assert!(!result.valid);
        assert_eq!(result.documents, 0);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn handle_accepts_valid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        std::fs::write(&path, report("reported").to_string()).expect("write");

        assert!(handle(&args_for("waste-report", &path), &ctx(), &flags()).is_ok());
    }

    #[test]
    fn handle_fails_on_invalid_status() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        std::fs::write(&path, report("done").to_string()).expect("write");

        let err = handle(&args_for("waste-report", &path), &ctx(), &flags())
            .expect_err("done is not a status");
        assert!(err.to_string().contains("1 of 1 document(s) failed waste_report validation"));
    }

    #[test]
    fn handle_fails_on_empty_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("reports.json");
        std::fs::write(&path, "[]").expect("write");

        let quiet = GlobalFlags {
            quiet: true,
            ..flags()
        };
        let err = handle(&args_for("waste_report", &path), &ctx(), &quiet)
            .expect_err("empty input is rejected");
        assert!(err.to_string().contains("no documents to validate"));
    }

    #[test]
    fn handle_rejects_unknown_kind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        std::fs::write(&path, report("reported").to_string()).expect("write");

        let err = handle(&args_for("invoice", &path), &ctx(), &flags()).expect_err("unknown kind");
        assert!(err.to_string().contains("invalid kind 'invoice'"));
    }
}
