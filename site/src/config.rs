//! Configuration file support.
//!
//! Loads optional `digitech.toml` from the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SiteError};
use crate::navigation::SCROLL_THRESHOLD_PX;

/// Default config file name.
pub const CONFIG_FILE: &str = "digitech.toml";

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document `<title>`
    pub title: String,
    /// Document language (`<html lang>`)
    pub lang: String,
    /// Offset past which "back to top" shows
    pub scroll_threshold_px: f64,
    /// URL of the interaction module's JS glue. Without it the page is
    /// fully static: no menu toggle, no back-to-top, no fade-up.
    pub wasm_module: Option<String>,
    /// External JSON content registry used instead of the built-in one
    pub content: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Digital Tech 101".into(),
            lang: "th".into(),
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            wasm_module: None,
            content: None,
        }
    }
}

impl SiteConfig {
    /// Load `digitech.toml` from `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Lenient load from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Strict load: the file must exist and parse.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Digital Tech 101");
        assert_eq!(config.lang, "th");
        assert_eq!(config.scroll_threshold_px, 400.0);
        assert!(config.wasm_module.is_none());
        assert!(config.content.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(SiteConfig::load(temp.path()), SiteConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
title = "DT 101"
wasm_module = "/pkg/digitech_wasm.js"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.title, "DT 101");
        assert_eq!(config.wasm_module.as_deref(), Some("/pkg/digitech_wasm.js"));
        assert_eq!(config.lang, "th");
        assert_eq!(config.scroll_threshold_px, 400.0);
    }

    #[test]
    fn test_invalid_config_is_lenient_but_read_is_strict() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "scroll_threshold_px = \"far\"").expect("write config");

        assert_eq!(SiteConfig::load_from_path(&path), SiteConfig::default());
        assert!(matches!(
            SiteConfig::read(&path),
            Err(SiteError::Config { .. })
        ));
    }

    #[test]
    fn test_read_missing_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        assert!(matches!(
            SiteConfig::read(&temp.path().join("nope.toml")),
            Err(SiteError::Read { .. })
        ));
    }
}
