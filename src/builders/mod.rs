mod build_path;
mod resolve_absolute;

pub use build_path::{build_path, convert};
pub use resolve_absolute::{fold_dot_segments, resolve_absolute};
