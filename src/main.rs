//! codebook - regenerate the chapter listings of a codebook

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = codebook_gen::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
