mod normalize;

pub use normalize::{
    normalize_path, normalize_to_unix, normalize_to_windows, normalize_value, to_unix, to_windows,
};
