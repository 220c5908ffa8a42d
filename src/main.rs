//! Pixgen - command-line tool for rendering PNG sprite sheets from JSON

use std::process::ExitCode;

use pixgen::cli;

fn main() -> ExitCode {
    cli::run()
}
