//! Binary entry point of the reasoner.

use std::{env, process::ExitCode};

use simple_logger::SimpleLogger;

/// Installs the log sink, then hands the argument vector to the shell.
///
/// The default level only surfaces warnings and errors; set `RUST_LOG` to `info` or `debug`
/// to watch rule applications and branch decisions.
fn main() -> ExitCode {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .unwrap();
    modalk::shell::main(env::args().skip(1).collect())
}
