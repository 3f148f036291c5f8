//! Command-line entry point for generating fake values.
//!
//! This binary delegates to `factory_helper::cli` for parsing and rendering,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use factory_helper::cli::{
    CliError, ParseOutcome, USAGE, build_generator, load_settings, parse_args, render,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            write_lines(&[USAGE.trim_end()]);
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let settings = load_settings()?;
            let mut generator = build_generator(&options, &settings)?;
            let lines = render(&mut generator, &options)?;
            write_lines(lines.as_slice());
            Ok(())
        }
    }
}

fn write_lines<S: AsRef<str>>(lines: &[S]) {
    let mut out = io::stdout().lock();
    for line in lines {
        if let Err(err) = writeln!(out, "{}", line.as_ref()) {
            drop(err);
            return;
        }
    }
}
