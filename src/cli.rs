//! Command-line interface.
//!
//! Thin shell over the library: open and parse the input file, fan sheet
//! generation out over the batch driver, and map results to exit codes.

use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::batch::{default_jobs, generate_all};
use crate::parser::parse_input;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixgen - render JSON pixel sprite definitions to PNG sprite sheets
#[derive(Parser)]
#[command(name = "pixgen")]
#[command(about = "Render JSON pixel sprite definitions to PNG sprite sheets")]
#[command(version)]
pub struct Cli {
    /// Input JSON file mapping sheet names to lists of sprite definitions
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for the generated PNG files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Scale output by integer factor (nearest-neighbor)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=128))]
    pub scale: u8,

    /// Number of worker threads (default: available parallelism)
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

/// Parse arguments, generate every sheet, and report the exit code.
pub fn run() -> ExitCode {
    ExitCode::from(run_with(&Cli::parse()))
}

fn run_with(cli: &Cli) -> u8 {
    let file = match File::open(&cli.input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: cannot open input file '{}': {}", cli.input.display(), e);
            return EXIT_INVALID_ARGS;
        }
    };

    let sheets = match parse_input(BufReader::new(file)) {
        Ok(sheets) => sheets,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_INVALID_ARGS;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&cli.output) {
        eprintln!("Error: cannot create output directory '{}': {}", cli.output.display(), e);
        return EXIT_ERROR;
    }

    let jobs = cli.jobs.unwrap_or_else(default_jobs);
    let mut failed = false;
    for key_result in generate_all(&sheets, &cli.output, cli.scale, jobs) {
        match key_result.result {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("Error: key '{}': {}", key_result.key, e);
                failed = true;
            }
        }
    }

    if failed {
        EXIT_ERROR
    } else {
        EXIT_SUCCESS
    }
}
