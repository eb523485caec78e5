//! Binary entrypoint for the `blueprint` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match blueprint::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
