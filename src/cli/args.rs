//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Docsite configuration resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml); `.json` files are read as JSON
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter docsite.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the configuration and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved configuration as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["docsite", "-C", "site.json", "resolve", "--pretty"]);
        assert_eq!(cli.config, PathBuf::from("site.json"));
        match cli.command {
            Commands::Resolve { args } => {
                assert!(args.pretty);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_defaults_and_aliases() {
        let cli = Cli::parse_from(["docsite", "c", "--verbose"]);
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, PathBuf::from("docsite.toml"));
        assert!(cli.verbose);

        let cli = Cli::parse_from(["docsite", "init", "my-docs", "--dry"]);
        assert!(matches!(
            cli.command,
            Commands::Init { name: Some(ref name), dry: true } if name == &PathBuf::from("my-docs")
        ));
    }
}
