//! Binary entrypoint for the `payqr` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    payqr::logging::init();
    match payqr::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
