//! Separator helpers and extended-length prefix handling.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsers::starts_with_drive_letter;

/// Both conventions' separators are recognized on input regardless of format.
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Split on either separator.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(is_separator)
}

/// Remainder of a path after a Windows extended-length prefix (`\\?\`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedPath<'a> {
    pub rest: &'a str,
    /// `\\?\UNC\server\share`: `rest` starts at the server name.
    pub unc: bool,
}

static EXTENDED_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\\/]{2}\?[\\/]+((?i:UNC)[\\/]+)?").expect("valid extended-prefix regex")
});

/// Strip `\\?\` (either separator) when it wraps a drive path (`\\?\C:\x`)
/// or a UNC path (`\\?\UNC\server\share`). Anything else, such as
/// `//?/share/x`, is left for the UNC parser with `?` as the server name, so
/// rendering it back out never yields a path that would strip differently.
pub fn strip_extended_prefix(path: &str) -> Option<ExtendedPath<'_>> {
    let caps = EXTENDED_PREFIX.captures(path)?;
    let rest = &path[caps.get(0)?.end()..];
    let unc = caps.get(1).is_some();
    let wraps_path = if unc {
        rest.contains(|c: char| !is_separator(c)) && !rest.starts_with('?')
    } else {
        starts_with_drive_letter(rest)
    };
    wraps_path.then_some(ExtendedPath { rest, unc })
}
