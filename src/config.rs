//! Serializable chrome configuration.
//!
//! Holds the design-time settings of a window's chrome as JSON. Missing
//! fields take the design-time defaults: no content material, aqua
//! appearance, visible title, opaque titlebar.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::model::constants::*;
use crate::model::{Appearance, Material};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChromeConfig {
    /// Effect-view material for the content view; `None` keeps a plain view.
    pub content_material: Option<Material>,
    pub appearance: Appearance,
    pub hides_title: bool,
    pub titlebar_appears_transparent: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            content_material: None,
            appearance: Appearance::default(),
            hides_title: DEFAULT_HIDES_TITLE,
            titlebar_appears_transparent: DEFAULT_TITLEBAR_APPEARS_TRANSPARENT,
        }
    }
}

impl ChromeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Like [`ChromeConfig::load`], falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "using default chrome config");
            Self::default()
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = ChromeConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ChromeConfig::default());
        assert_eq!(config.appearance, Appearance::Aqua);
        assert_eq!(config.content_material, None);
    }

    #[test]
    fn test_parses_snake_case_values() {
        let config = ChromeConfig::from_json_str(
            r#"{ "content_material": "dark", "appearance": "vibrant_dark", "hides_title": true }"#,
        )
        .unwrap();
        assert_eq!(config.content_material, Some(Material::Dark));
        assert_eq!(config.appearance, Appearance::VibrantDark);
        assert!(config.hides_title);
        assert!(!config.titlebar_appears_transparent);
    }

    #[test]
    fn test_unknown_material_is_parse_error() {
        let err = ChromeConfig::from_json_str(r#"{ "content_material": "sepia" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "appearance": "vibrant_light" }}"#).unwrap();

        let config = ChromeConfig::load(file.path()).unwrap();
        assert_eq!(config.appearance, Appearance::VibrantLight);
    }

    #[test]
    fn test_missing_file_is_io_error_and_default_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(
            ChromeConfig::load(&path),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(ChromeConfig::load_or_default(&path), ChromeConfig::default());
    }

    #[test]
    fn test_pretty_json_reloads() {
        let config = ChromeConfig {
            content_material: Some(Material::Light),
            titlebar_appears_transparent: true,
            ..ChromeConfig::default()
        };
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ChromeConfig::from_json_str(&json).unwrap(), config);
    }
}
