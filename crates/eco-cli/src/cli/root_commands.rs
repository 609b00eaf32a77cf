use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List schema names, or print one schema.
    Schema(SchemaArgs),
    /// Write every schema to disk as `<name>.schema.json`.
    Export(ExportArgs),
    /// Validate JSON documents against an entity contract.
    Validate(ValidateArgs),
    /// Check whether a waste report status transition is allowed.
    Transition(TransitionArgs),
}

/// Arguments for `eco schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `waste_report`). Omit to list all names.
    pub name: Option<String>,
}

/// Arguments for `eco export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Output directory (defaults to `schema.export_dir` from config).
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Write single-line JSON regardless of `schema.pretty`.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `eco validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Entity kind: user, waste-report, notification, auth-state.
    pub kind: String,

    /// JSON file holding one document or an array of documents. `-` reads stdin.
    #[arg(default_value = "-")]
    pub input: String,

    /// Only check the JSON Schema; skip typed decoding and invariants.
    #[arg(long)]
    pub structural_only: bool,
}

/// Arguments for `eco transition`.
#[derive(Clone, Debug, Args)]
pub struct TransitionArgs {
    /// Current status (reported, in-progress, completed).
    pub from: String,
    /// Requested status.
    pub to: String,
}
