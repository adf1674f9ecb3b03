/// CLI argument definitions via clap derive.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// scode: open remote folders in VS Code over SSH by alias.
#[derive(Debug, Parser)]
#[command(
    name = "scode",
    about = "Open remote folders in VS Code over SSH by short alias",
    version
)]
pub struct Cli {
    /// Configuration file. Defaults to <config dir>/scode/config.yaml.
    #[arg(long, global = true, value_name = "PATH", env = "SCODE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format. Auto-detects: table when TTY, plain text when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Comma-separated columns for table output (alias, path, host).
    #[arg(long, global = true, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log debug information (config lookup, resolution, timings) to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub open: OpenArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse `std::env::args_os`, exiting with a usage error on failure.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parse `args`, rejecting an alias given together with a subcommand.
    ///
    /// Subcommand names take precedence over the alias positional, so
    /// `scode --config X edit` runs `edit`. `scode api edit` is an error.
    ///
    /// # Errors
    ///
    /// Returns a clap error for invalid arguments.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        if let (Some(alias), Some(_)) = (&cli.open.alias, &cli.command) {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("alias '{alias}' cannot be combined with a subcommand"),
            ));
        }
        Ok(cli)
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, plain when piped.
    #[default]
    Auto,
    /// Aligned table with headers (human-readable).
    Table,
    /// `alias path` lines, alias padded to 12 columns.
    Plain,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Remote path only, one per line.
    Path,
    /// Alias only, one per line.
    Alias,
}

/// Top-level arguments used when no subcommand is given.
#[derive(Debug, Parser)]
pub struct OpenArgs {
    /// Folder alias to open. Lists all folders when omitted.
    pub alias: Option<String>,

    /// Print the resolved target and editor command without launching.
    #[arg(long, requires = "alias")]
    pub dry_run: bool,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a starter configuration file if none exists.
    Init,
    /// Open the configuration file in the configured editor.
    Edit,
    /// Print a shell completion script.
    Completions(CompletionsArgs),
    /// Print aliases starting with PREFIX (used by completion scripts).
    #[command(name = "__complete", hide = true)]
    Complete(CompleteArgs),
}

/// Arguments for `scode completions`.
#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Target shell.
    pub shell: Shell,
}

/// Shells with a completion script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

/// Arguments for `scode __complete`.
#[derive(Debug, Parser)]
pub struct CompleteArgs {
    /// Partial alias typed so far.
    pub prefix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_lists() {
        let cli = Cli::try_parse_args_from(["scode"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.open.alias.is_none());
    }

    #[test]
    fn test_alias_positional() {
        let cli = Cli::try_parse_args_from(["scode", "api", "--dry-run"]).unwrap();
        assert_eq!(cli.open.alias.as_deref(), Some("api"));
        assert!(cli.open.dry_run);
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_args_from(["scode", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Init)));

        let cli = Cli::try_parse_args_from(["scode", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));

        let cli = Cli::try_parse_args_from(["scode", "__complete", "ap"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Complete(ref a)) if a.prefix.as_deref() == Some("ap")
        ));
    }

    #[test]
    fn test_at_most_one_alias() {
        assert!(Cli::try_parse_args_from(["scode", "api", "infra"]).is_err());
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_args_from(["scode", "--config", "/tmp/c.yaml", "edit"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
        assert!(matches!(cli.command, Some(Command::Edit)));
        assert!(cli.open.alias.is_none());
    }

    #[test]
    fn test_global_flag_before_subcommand() {
        let cli = Cli::try_parse_args_from(["scode", "--debug", "init"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Command::Init)));
        assert!(cli.open.alias.is_none());

        let cli = Cli::try_parse_args_from(["scode", "--json", "init"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Command::Init)));

        let cli = Cli::try_parse_args_from(["scode", "init", "--debug"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Init)));
    }

    #[test]
    fn test_global_flag_before_alias() {
        let cli = Cli::try_parse_args_from(["scode", "--json", "api"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.open.alias.as_deref(), Some("api"));
    }

    #[test]
    fn test_alias_with_subcommand_rejected() {
        assert!(Cli::try_parse_args_from(["scode", "api", "edit"]).is_err());
        assert!(Cli::try_parse_args_from(["scode", "api", "init"]).is_err());
    }
}
