//! Runs the built-in map checks and prints one line per check.

use fixmap::conformance::builtin_suite;
use std::process::ExitCode;

fn main() -> ExitCode {
    fixmap::init();
    let report = builtin_suite().run();
    println!("{}", report);
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
