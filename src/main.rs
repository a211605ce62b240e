//! tally - Single-user task tracking from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tally_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
