// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub export: ExportOptions,
    pub source: SourceOptions,
    pub log_level: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store: StoreOptions::default(),
            export: ExportOptions::default(),
            source: SourceOptions::default(),
            log_level: s!(DEFAULT_LOG_LEVEL),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub key: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            key: s!(SAVED_KEY),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Prefer the environment; a key in the file is accepted for local setups.
    pub api_key: Option<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base_url: s!(GEMINI_BASE_URL),
            model: s!(DEFAULT_MODEL),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl SourceOptions {
    /// First non-empty key from the environment, then the file.
    pub fn resolve_api_key(&self) -> Option<String> {
        API_KEY_ENVS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .chain(self.api_key.clone())
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
    }
}

impl AppOptions {
    /// Parse options from TOML text. Missing tables and keys fall back to defaults.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from `path`, or from `college_scout.toml` in the working directory.
    /// An explicit path must exist; the implicit one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text, &path),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let text = r#"
            log_level = "debug"

            [source]
            model = "gemini-2.5-pro"
        "#;
        let opts = AppOptions::from_toml(text, Path::new("test.toml")).unwrap();
        assert_eq!(opts.log_level, "debug");
        assert_eq!(opts.source.model, "gemini-2.5-pro");
        assert_eq!(opts.source.timeout_secs, REQUEST_TIMEOUT_SECS);
        assert_eq!(opts.store.key, SAVED_KEY);
        assert_eq!(opts.export.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
    }

    #[test]
    fn bad_toml_reports_origin() {
        let err = AppOptions::from_toml("log_level = [", Path::new("broken.toml")).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("definitely/not/here/college_scout.toml");
        assert!(matches!(AppOptions::load(Some(missing)), Err(ConfigError::Read { .. })));
    }
}
