//! Split a path into its structural prefix and body segments.

use crate::parsers::starts_with_drive_letter;
use crate::types::{ParsedPath, PathPrefix};
use crate::utils::path::{is_separator, split_segments, strip_extended_prefix};

/// Parse a path written in either convention. Total: every string, including
/// the empty one, yields a `ParsedPath`.
pub fn parse_path(path: &str) -> ParsedPath<'_> {
    match strip_extended_prefix(path) {
        Some(extended) if extended.unc => parse_unc(extended.rest),
        Some(extended) => parse_plain(extended.rest),
        None => parse_plain(path),
    }
}

/// UNC prefix, drive letter followed by a separator (or nothing), or a
/// leading separator.
pub fn is_absolute(path: &str) -> bool {
    let parsed = parse_path(path);
    match parsed.prefix {
        PathPrefix::Drive { rooted, .. } => rooted || parsed.segments.is_empty(),
        PathPrefix::None => false,
        _ => true,
    }
}

fn parse_plain(path: &str) -> ParsedPath<'_> {
    // Separators are ASCII, so the char count is also the byte offset.
    let leading = path.chars().take_while(|c| is_separator(*c)).count();

    if leading == 0 {
        if starts_with_drive_letter(path) {
            let letter = char::from(path.as_bytes()[0]);
            let rest = &path[2..];
            let rooted = rest.starts_with(is_separator);
            return with_body(PathPrefix::Drive { letter, rooted }, rest);
        }
        return with_body(PathPrefix::None, path);
    }

    let body = &path[leading..];
    if leading == 2 && !body.is_empty() {
        return parse_unc(body);
    }
    if leading == 1 && path.starts_with('/') {
        if let Some(letter) = unix_drive_letter(body) {
            return with_body(PathPrefix::UnixDrive { letter }, &body[1..]);
        }
    }
    with_body(PathPrefix::Root, body)
}

fn parse_unc(rest: &str) -> ParsedPath<'_> {
    let mut segments = split_segments(rest).filter(|s| !s.is_empty());
    let Some(server) = segments.next() else {
        return with_body(PathPrefix::Root, rest);
    };
    let share = segments.next();
    ParsedPath {
        prefix: PathPrefix::Unc { server, share },
        segments: segments.collect(),
        trailing_separator: rest.ends_with(is_separator),
    }
}

/// `c` in `/c` or `/c/...`.
fn unix_drive_letter(body: &str) -> Option<char> {
    let mut chars = body.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic)?;
    match chars.next() {
        None => Some(letter),
        Some(c) if is_separator(c) => Some(letter),
        Some(_) => None,
    }
}

fn with_body<'a>(prefix: PathPrefix<'a>, body: &'a str) -> ParsedPath<'a> {
    ParsedPath {
        prefix,
        segments: split_segments(body).filter(|s| !s.is_empty()).collect(),
        trailing_separator: body.ends_with(is_separator),
    }
}
