//! Site configuration for path resolution and image validation.
//!
//! The roots and the placeholder path were once ambient globals; here
//! they are an explicit struct handed to the functions that need them
//! (see [`crate::assets`]).
//!
//! # Example
//!
//! ```toml
//! document_root = "/srv/www"
//! css_root = "resources/styles/"
//! js_root = "resources/scripts/"
//! img_placeholder = "resources/images/misc/null.png"
//! ```

use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

mod defaults {
    use std::path::PathBuf;

    pub fn document_root() -> PathBuf {
        "./".into()
    }

    pub fn css_root() -> String {
        "resources/styles/".into()
    }

    pub fn js_root() -> String {
        "resources/scripts/".into()
    }

    pub fn img_placeholder() -> String {
        "resources/images/misc/null.png".into()
    }
}

/// Per-site settings consulted while generating markup.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Server document root that relative asset paths resolve under.
    #[serde(default = "defaults::document_root")]
    #[educe(Default = defaults::document_root())]
    pub document_root: PathBuf,

    /// Directory containing the site's CSS files.
    #[serde(default = "defaults::css_root")]
    #[educe(Default = defaults::css_root())]
    pub css_root: String,

    /// Directory containing the site's JavaScript files.
    #[serde(default = "defaults::js_root")]
    #[educe(Default = defaults::js_root())]
    pub js_root: String,

    /// Image path served in place of one that does not exist.
    #[serde(default = "defaults::img_placeholder")]
    #[educe(Default = defaults::img_placeholder())]
    pub img_placeholder: String,
}

impl SiteConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from a file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.document_root, PathBuf::from("./"));
        assert_eq!(config.css_root, "resources/styles/");
        assert_eq!(config.js_root, "resources/scripts/");
        assert_eq!(config.img_placeholder, "resources/images/misc/null.png");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.css_root, "resources/styles/");
        assert_eq!(config.img_placeholder, "resources/images/misc/null.png");
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_str(
            r#"
            document_root = "/srv/www"
            css_root = "static/css/"
        "#,
        )
        .unwrap();

        assert_eq!(config.document_root, PathBuf::from("/srv/www"));
        assert_eq!(config.css_root, "static/css/");
        // Untouched fields keep their defaults
        assert_eq!(config.js_root, "resources/scripts/");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            unknown_field = "should_fail"
        "#,
        );

        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("parsing error"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "js_root = \"assets/js/\"").unwrap();

        let config = SiteConfig::from_path(file.path()).unwrap();
        assert_eq!(config.js_root, "assets/js/");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SiteConfig::from_path(Path::new("/nonexistent/sharkblockx.toml"));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("IO error"));
    }
}
