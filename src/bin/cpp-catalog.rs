//! `cpp-catalog` command-line tool
//!
//! Writes the C++ reference workbook. Exit status is 0 on success and a
//! sysexits-style code otherwise (65 malformed record, 70 workbook error,
//! 74 I/O error, 78 configuration error).

use cpp_catalog::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code()),
    }
}
