//! Command-line front end: flags, config-file defaults and per-path output.

use std::io::Write;
use std::path::Path;

use clap::Parser;

use crate::config::{load_config, save_config, CONFIG_FILE_NAME};
use crate::handlers::normalize_path;
use crate::parsers::detect_path_format;
use crate::types::{NormalizeOptions, PathFormat};

/// Convert path strings between Windows and Unix conventions
#[derive(Debug, Clone, Parser)]
#[command(name = "path-normalizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Paths to normalize
    #[arg(required_unless_present = "save_config")]
    pub paths: Vec<String>,

    /// Convert to this format (unix or windows); default keeps the detected one
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<PathFormat>,

    /// Resolve relative paths against the base directory
    #[arg(long)]
    pub absolute: bool,

    /// Base directory for --absolute (default: working directory)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,

    /// Print each result as JSON
    #[arg(long, conflicts_with = "detect")]
    pub json: bool,

    /// Print the detected format instead of converting
    #[arg(long)]
    pub detect: bool,

    /// Write the effective options to .path-normalizer.json and exit
    #[arg(long)]
    pub save_config: bool,
}

impl Cli {
    /// Layer the command-line flags over `defaults`, typically the options
    /// loaded from the config file.
    pub fn options(&self, defaults: NormalizeOptions) -> NormalizeOptions {
        NormalizeOptions {
            format: self.format.or(defaults.format),
            absolute: self.absolute || defaults.absolute,
            base: self.base.clone().or(defaults.base),
        }
    }
}

/// Load defaults from `config_dir`, then either save the merged options or
/// process every path. Returns the process exit code.
pub fn execute<W: Write, E: Write>(
    cli: &Cli,
    config_dir: &Path,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<i32> {
    let options = cli.options(load_config(config_dir)?);
    if cli.save_config {
        save_config(config_dir, &options)?;
        log::info!("Saved options to {}", config_dir.join(CONFIG_FILE_NAME).display());
        return Ok(0);
    }
    run(cli, &options, out, err)
}

/// Process every path, writing results to `out` and failures to `err`.
/// Returns 0 when every path succeeded, 1 otherwise.
pub fn run<W: Write, E: Write>(
    cli: &Cli,
    options: &NormalizeOptions,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<i32> {
    let mut failed = false;
    for path in &cli.paths {
        if cli.detect {
            writeln!(out, "{}", detect_path_format(path))?;
            continue;
        }
        let result = normalize_path(path, options);
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else if let Some(error) = result.error() {
            writeln!(err, "{}", error)?;
        } else {
            writeln!(out, "{}", result.path())?;
        }
        failed |= !result.is_success();
    }
    Ok(if failed { 1 } else { 0 })
}
