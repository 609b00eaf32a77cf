use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Global flags handed to command handlers.
///
/// `--verbose` only affects the log filter and is consumed in `main`.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Suppress the report of side-effecting commands (`export`, `validate`);
    /// the exit status still carries the outcome.
    pub quiet: bool,
}
