//! Rebuild a parsed path with the separators and prefix of a target format.

use crate::parsers::parse_path;
use crate::types::{ParsedPath, PathFormat, PathPrefix};

/// Convert a path written in either convention to `target`.
///
/// Segment text passes through untouched; only separators and the structural
/// prefix are rewritten. Runs of separators collapse to one, and a trailing
/// separator survives only if the input had one.
pub fn convert(path: &str, target: PathFormat) -> String {
    let parsed = parse_path(path);
    let converted = build_path(&parsed, target);
    log::debug!("Converted {:?} to {} as {:?}", path, target, converted);
    converted
}

/// Render a parsed path in the `target` convention.
pub fn build_path(parsed: &ParsedPath<'_>, target: PathFormat) -> String {
    let sep = target.separator();
    let mut out = String::new();

    match (parsed.prefix, target) {
        (PathPrefix::Unc { server, share }, _) => {
            out.push(sep);
            out.push(sep);
            out.push_str(server);
            if let Some(share) = share {
                out.push(sep);
                out.push_str(share);
            }
        }
        (PathPrefix::Drive { letter, .. }, PathFormat::Unix) => {
            out.push('/');
            out.push(letter.to_ascii_lowercase());
        }
        (PathPrefix::Drive { letter, .. }, PathFormat::Windows) => {
            out.push(letter);
            out.push_str(":\\");
        }
        (PathPrefix::UnixDrive { letter }, PathFormat::Unix) => {
            out.push('/');
            out.push(letter);
        }
        (PathPrefix::UnixDrive { letter }, PathFormat::Windows) => {
            out.push(letter.to_ascii_uppercase());
            out.push_str(":\\");
        }
        (PathPrefix::Root, _) => out.push(sep),
        (PathPrefix::None, _) => {}
    }

    for segment in &parsed.segments {
        if !out.is_empty() && !out.ends_with(sep) {
            out.push(sep);
        }
        out.push_str(segment);
    }

    if parsed.trailing_separator && !out.is_empty() && !out.ends_with(sep) {
        out.push(sep);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_path_to_unix() {
        assert_eq!(
            convert(r"C:\Users\file.txt", PathFormat::Unix),
            "/c/Users/file.txt"
        );
    }

    #[test]
    fn drive_keeps_its_case_on_windows() {
        assert_eq!(convert("c:/Users", PathFormat::Windows), r"c:\Users");
        assert_eq!(convert("C:/Users", PathFormat::Windows), r"C:\Users");
    }

    #[test]
    fn unix_drive_root_to_windows_is_uppercased() {
        assert_eq!(convert("/c/Users/file.txt", PathFormat::Windows), r"C:\Users\file.txt");
        assert_eq!(convert("/c", PathFormat::Windows), r"C:\");
    }

    #[test]
    fn bare_drive_is_rooted() {
        assert_eq!(convert("C:", PathFormat::Unix), "/c");
        assert_eq!(convert("C:", PathFormat::Windows), r"C:\");
        assert_eq!(convert("C:foo", PathFormat::Windows), r"C:\foo");
    }

    #[test]
    fn unc_both_ways() {
        assert_eq!(
            convert(r"\\server\share\dir\file", PathFormat::Unix),
            "//server/share/dir/file"
        );
        assert_eq!(
            convert("//server/share/dir/file", PathFormat::Windows),
            r"\\server\share\dir\file"
        );
        assert_eq!(convert(r"\\server", PathFormat::Unix), "//server");
    }

    #[test]
    fn plain_root_to_windows() {
        assert_eq!(convert("/usr/local/bin", PathFormat::Windows), r"\usr\local\bin");
        assert_eq!(convert("/", PathFormat::Windows), r"\");
    }

    #[test]
    fn extra_leading_separators_collapse() {
        assert_eq!(convert("///a/b", PathFormat::Unix), "/a/b");
        assert_eq!(convert("////a", PathFormat::Windows), r"\a");
    }

    #[test]
    fn body_separator_runs_collapse() {
        assert_eq!(convert("a///b", PathFormat::Unix), "a/b");
        assert_eq!(convert(r"a\/\b", PathFormat::Windows), r"a\b");
    }

    #[test]
    fn trailing_separator_preserved_not_fabricated() {
        assert_eq!(convert(r"dir\sub\\", PathFormat::Unix), "dir/sub/");
        assert_eq!(convert("dir/sub", PathFormat::Windows), r"dir\sub");
        assert_eq!(convert(r"C:\", PathFormat::Unix), "/c/");
    }

    #[test]
    fn segment_text_passes_through() {
        assert_eq!(
            convert(r"C:\Données\été 2024\..\ñ.txt", PathFormat::Unix),
            "/c/Données/été 2024/../ñ.txt"
        );
    }

    #[test]
    fn extended_prefix_is_dropped() {
        assert_eq!(convert(r"\\?\C:\Users", PathFormat::Unix), "/c/Users");
        assert_eq!(
            convert(r"\\?\UNC\server\share\x", PathFormat::Windows),
            r"\\server\share\x"
        );
    }

    #[test]
    fn question_mark_share_is_not_unwrapped() {
        assert_eq!(convert(r"\/?/share/x", PathFormat::Unix), "//?/share/x");
        assert_eq!(convert("//?/share/x", PathFormat::Unix), "//?/share/x");
        assert_eq!(convert(r"//?\C", PathFormat::Windows), r"\\?\C");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(convert("", PathFormat::Unix), "");
        assert_eq!(convert("", PathFormat::Windows), "");
    }
}
