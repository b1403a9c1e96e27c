//! Classify a path string as Windows-style or Unix-style.

use crate::types::PathFormat;

/// True for an ASCII letter followed by `:` at the very start (`C:`, `d:`).
pub fn starts_with_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Detect the convention a path is written in. First match wins:
/// any backslash, then a leading drive letter, otherwise unix.
pub fn detect_path_format(path: &str) -> PathFormat {
    if path.contains('\\') || starts_with_drive_letter(path) {
        PathFormat::Windows
    } else {
        PathFormat::Unix
    }
}
