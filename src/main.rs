//! Path Normalizer CLI - Convert path strings between Windows and Unix conventions.

use std::io;
use std::path::Path;

use clap::Parser;
use path_normalizer::cli::{execute, Cli};

fn main() {
    env_logger::init();

    // Usage errors exit with code 2 inside clap.
    let cli = Cli::parse();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = match execute(&cli, Path::new("."), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };
    std::process::exit(code);
}
