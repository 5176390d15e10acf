#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match qatol::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("qatol: {e}");
            ExitCode::from(3)
        }
    }
}
