//! Core library entry for the `blueprint` CLI.
//!
//! `blueprint` turns an evaluated Android build model into a canonical,
//! byte-stable project-structure document. The extraction pipeline lives in
//! [`features`], [`inference`], [`walker`], and [`structure`]; the CLI shell
//! lives in [`cli`] and [`commands`].

pub mod adapters;
pub mod build_model;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod features;
pub mod inference;
pub mod ports;
pub mod structure;
pub mod walker;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["blueprint", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_when_extract_lacks_a_model() {
        let result = run(["blueprint", "extract"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_a_missing_model_file() {
        let result = run(["blueprint", "check", "/definitely/not/here.yaml"]);
        assert!(result.is_err());
    }
}
