use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `eco` binary.
#[derive(Debug, Parser)]
#[command(
    name = "eco",
    version,
    about = "Ecotrack - waste reporting data contracts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["eco", "--format", "raw", "--verbose", "schema"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Schema(ref args) if args.name.is_none()));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["eco", "schema", "user", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Schema(ref args) if args.name.as_deref() == Some("user")));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["eco", "--format", "table", "schema"]).is_err());
    }

    #[test]
    fn validate_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["eco", "validate", "waste-report"]).expect("cli should parse");
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.kind, "waste-report");
        assert_eq!(args.input, "-");
        assert!(!args.structural_only);
    }

    #[test]
    fn export_accepts_dir_and_compact() {
        let cli = Cli::try_parse_from(["eco", "export", "--dir", "out", "--compact"])
            .expect("cli should parse");
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.dir.as_deref(), Some(std::path::Path::new("out")));
        assert!(args.compact);
    }

    #[test]
    fn transition_requires_both_states() {
        assert!(Cli::try_parse_from(["eco", "transition", "reported"]).is_err());
        let cli = Cli::try_parse_from(["eco", "transition", "reported", "in-progress"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Transition(_)));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["eco", "-q", "-f", "raw", "schema"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert!(flags.quiet);
        assert_eq!(flags.format, OutputFormat::Raw);
    }
}
