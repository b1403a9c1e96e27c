//! Validate input, pick the target format and wrap the conversion in a result.

use serde_json::Value;

use crate::builders::{convert, resolve_absolute};
use crate::error::NormalizeError;
use crate::parsers::detect_path_format;
use crate::types::{NormalizeOptions, NormalizeResult, PathFormat};

/// Normalize a value of unknown type. Anything but a JSON string fails with
/// `NormalizeError::NotAString`.
pub fn normalize_value(input: &Value, options: &NormalizeOptions) -> NormalizeResult {
    match input.as_str() {
        Some(path) => normalize_path(path, options),
        None => {
            log::debug!("Rejecting non-string path input: {}", input);
            NormalizeResult::Failure {
                error: NormalizeError::NotAString,
            }
        }
    }
}

/// Normalize a path string.
///
/// Without `options.format` the path is cleaned up within its detected
/// format. Whitespace is only trimmed to decide emptiness; the path itself is
/// processed as given.
pub fn normalize_path(input: &str, options: &NormalizeOptions) -> NormalizeResult {
    if input.trim().is_empty() {
        return NormalizeResult::Failure {
            error: NormalizeError::EmptyPath,
        };
    }

    let format = options
        .format
        .unwrap_or_else(|| detect_path_format(input));
    let mut path = convert(input, format);

    if options.absolute {
        match options.base.clone().or_else(working_directory) {
            Some(base) => path = resolve_absolute(&path, &base, format),
            None => log::warn!(
                "No base directory available, leaving {:?} unresolved.",
                path
            ),
        }
    }

    NormalizeResult::Success { path, format }
}

pub fn normalize_to_unix(input: &str) -> String {
    convert(input, PathFormat::Unix)
}

pub fn normalize_to_windows(input: &str) -> String {
    convert(input, PathFormat::Windows)
}

pub fn to_unix(input: &str) -> String {
    normalize_to_unix(input)
}

pub fn to_windows(input: &str) -> String {
    normalize_to_windows(input)
}

fn working_directory() -> Option<String> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.to_string_lossy().into_owned())
}
