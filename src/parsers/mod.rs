mod detect_format;
mod parse_prefix;

pub use detect_format::{detect_path_format, starts_with_drive_letter};
pub use parse_prefix::{is_absolute, parse_path};
