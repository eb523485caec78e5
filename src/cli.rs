//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `blueprint`.
#[derive(Debug, Parser)]
#[command(name = "blueprint", version, about = "Extract canonical project-structure documents")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the project-structure document from an evaluated build model.
    Extract {
        /// Path to the evaluated build model (YAML).
        model: PathBuf,
        /// Where to write the document.
        #[arg(short, long, default_value = "project-structure.json")]
        out: PathBuf,
    },
    /// Run the extraction pipeline without writing anything.
    Check {
        /// Path to the evaluated build model (YAML).
        model: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_extract_with_default_output() {
        let cli = Cli::parse_from(["blueprint", "extract", "model.yaml"]);
        match cli.command {
            Command::Extract { model, out } => {
                assert_eq!(model.to_str(), Some("model.yaml"));
                assert_eq!(out.to_str(), Some("project-structure.json"));
            }
            Command::Check { .. } => panic!("parsed wrong subcommand"),
        }
    }

    #[test]
    fn parses_extract_with_explicit_output() {
        let cli =
            Cli::parse_from(["blueprint", "extract", "model.yaml", "--out", "build/out.json"]);
        match cli.command {
            Command::Extract { out, .. } => assert_eq!(out.to_str(), Some("build/out.json")),
            Command::Check { .. } => panic!("parsed wrong subcommand"),
        }
    }

    #[test]
    fn parses_check_subcommand() {
        let cli = Cli::parse_from(["blueprint", "check", "model.yaml"]);
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn extract_requires_a_model_path() {
        assert!(Cli::try_parse_from(["blueprint", "extract"]).is_err());
    }
}
