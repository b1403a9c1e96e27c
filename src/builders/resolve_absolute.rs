//! Lexical absolute resolution against a base path.

use crate::builders::{build_path, convert};
use crate::parsers::{is_absolute, parse_path};
use crate::types::{PathFormat, PathPrefix};

/// Join `path` (already in `target` form) onto `base` unless it is absolute,
/// then fold `.` and `..` segments.
pub fn resolve_absolute(path: &str, base: &str, target: PathFormat) -> String {
    if is_absolute(path) {
        return fold_dot_segments(path, target);
    }
    let base = convert(base, target);
    if base.is_empty() {
        return fold_dot_segments(path, target);
    }
    let sep = target.separator();
    let joined = format!("{}{}{}", base.trim_end_matches(sep), sep, path);
    log::debug!("Resolving {:?} against {:?}", path, base);
    fold_dot_segments(&joined, target)
}

/// Drop `.` segments and let `..` cancel the segment before it. `..` above a
/// root is discarded; leading `..` in a relative path are kept.
pub fn fold_dot_segments(path: &str, target: PathFormat) -> String {
    let mut parsed = parse_path(path);
    let rooted = parsed.prefix != PathPrefix::None;

    let mut folded: Vec<&str> = Vec::with_capacity(parsed.segments.len());
    for segment in &parsed.segments {
        match *segment {
            "." => {}
            ".." => {
                if folded.last().is_some_and(|last| *last != "..") {
                    folded.pop();
                } else if !rooted {
                    folded.push("..");
                }
            }
            other => folded.push(other),
        }
    }

    if !rooted && folded.is_empty() {
        return ".".to_string();
    }
    parsed.segments = folded;
    build_path(&parsed, target)
}
