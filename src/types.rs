//! Type definitions shared by the detector, converter and result builder.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::NormalizeError;

/// Path convention a string is written in, or should be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    Unix,
    Windows,
}

impl PathFormat {
    /// Canonical separator emitted for this format.
    pub fn separator(self) -> char {
        match self {
            PathFormat::Unix => '/',
            PathFormat::Windows => '\\',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathFormat::Unix => "unix",
            PathFormat::Windows => "windows",
        }
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unix" => Ok(PathFormat::Unix),
            "windows" => Ok(PathFormat::Windows),
            other => Err(format!(
                "Unsupported path format \"{}\", expected \"unix\" or \"windows\"",
                other
            )),
        }
    }
}

/// Options for `normalize_path`. Every field defaults independently, so a
/// partial `.path-normalizer.json` deserializes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Target format. `None` keeps the detected source format.
    pub format: Option<PathFormat>,
    /// Resolve relative paths against `base`.
    pub absolute: bool,
    /// Base for absolute resolution. Falls back to the working directory.
    pub base: Option<String>,
}

impl NormalizeOptions {
    pub fn with_format(format: PathFormat) -> Self {
        Self {
            format: Some(format),
            ..Self::default()
        }
    }
}

/// Outcome of `normalize_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeResult {
    Success { path: String, format: PathFormat },
    Failure { error: NormalizeError },
}

impl NormalizeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, NormalizeResult::Success { .. })
    }

    /// Normalized path, or `""` on failure.
    pub fn path(&self) -> &str {
        match self {
            NormalizeResult::Success { path, .. } => path,
            NormalizeResult::Failure { .. } => "",
        }
    }

    pub fn format(&self) -> Option<PathFormat> {
        match self {
            NormalizeResult::Success { format, .. } => Some(*format),
            NormalizeResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<String> {
        match self {
            NormalizeResult::Success { .. } => None,
            NormalizeResult::Failure { error } => Some(error.to_string()),
        }
    }
}

impl Serialize for NormalizeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NormalizeResult", 3)?;
        match self {
            NormalizeResult::Success { path, format } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("path", path)?;
                state.serialize_field("format", format)?;
            }
            NormalizeResult::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("path", "")?;
                state.serialize_field("error", &error.to_string())?;
            }
        }
        state.end()
    }
}

/// Structural prefix recognized at the start of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPrefix<'a> {
    /// `\\server\share` or `//server/share`.
    Unc {
        server: &'a str,
        share: Option<&'a str>,
    },
    /// `C:`, optionally followed by a separator (`rooted`).
    Drive { letter: char, rooted: bool },
    /// `/c/...`: a unix-style spelling of a drive root.
    UnixDrive { letter: char },
    /// One leading separator, or three and more.
    Root,
    None,
}

/// A path split into prefix, body segments and trailing-separator flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    pub prefix: PathPrefix<'a>,
    pub segments: Vec<&'a str>,
    pub trailing_separator: bool,
}
