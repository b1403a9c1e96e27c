//! Default options loaded from `.path-normalizer.json`.

use std::path::Path;

use anyhow::Context;

use crate::types::NormalizeOptions;

pub const CONFIG_FILE_NAME: &str = ".path-normalizer.json";

/// Load options from `.path-normalizer.json` in `dir_path`. A missing file
/// yields defaults; an unreadable or malformed one is an error.
pub fn load_config(dir_path: &Path) -> anyhow::Result<NormalizeOptions> {
    let path = dir_path.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(NormalizeOptions::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let options: NormalizeOptions = serde_json::from_str(&content)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    log::debug!("Loaded options from {}: {:?}", path.display(), options);
    Ok(options)
}

/// Persist options to `.path-normalizer.json` in `dir_path`.
pub fn save_config(dir_path: &Path, options: &NormalizeOptions) -> anyhow::Result<()> {
    let path = dir_path.join(CONFIG_FILE_NAME);
    let content = serde_json::to_string_pretty(options)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PathFormat;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), NormalizeOptions::default());
    }

    #[test]
    fn saved_options_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let options = NormalizeOptions {
            format: Some(PathFormat::Windows),
            absolute: true,
            base: Some("/c/work".to_string()),
        };
        save_config(dir.path(), &options).unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), options);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"absolute": true}"#).unwrap();
        let options = load_config(dir.path()).unwrap();
        assert!(options.absolute);
        assert!(options.format.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"format": "mac"}"#).unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
