//! flatdoc binary entry point.

use std::process::ExitCode;

use flatdoc::ui::output;

fn main() -> ExitCode {
    match flatdoc::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
