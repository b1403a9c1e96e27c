//! Path Normalizer - Detect and convert path strings between Windows and Unix conventions.

pub mod builders;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parsers;
pub mod types;
pub mod utils;

pub use builders::convert;
pub use config::{load_config, save_config};
pub use error::NormalizeError;
pub use handlers::{
    normalize_path, normalize_to_unix, normalize_to_windows, normalize_value, to_unix, to_windows,
};
pub use parsers::{detect_path_format, is_absolute};
pub use types::{NormalizeOptions, NormalizeResult, PathFormat};
