//! Theme engine configuration

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    engine::THEME_PREFERENCE_KEY,
    error::{Result, ThemeError},
};

/// Settings used when constructing a [`ThemeEngine`](crate::ThemeEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeEngineConfig {
    /// Built-in theme to start with. Unknown ids fall back to the default.
    pub initial_theme: Option<String>,
    /// Preference store key holding the active theme id
    pub preference_key: String,
    /// Restore the persisted theme right after construction
    pub load_preference_on_start: bool,
    /// Location of the file-backed preference store, if the host uses one
    pub preference_file: Option<PathBuf>,
}

impl Default for ThemeEngineConfig {
    fn default() -> Self {
        Self {
            initial_theme: None,
            preference_key: THEME_PREFERENCE_KEY.to_string(),
            load_preference_on_start: true,
            preference_file: None,
        }
    }
}

impl ThemeEngineConfig {
    pub fn with_initial_theme(mut self, id: impl Into<String>) -> Self {
        self.initial_theme = Some(id.into());
        self
    }

    /// Load from a YAML, TOML or JSON file, picked by extension
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        let content = fs::read_to_string(path)?;

        let parse_error = |format: &str, message: String| ThemeError::ConfigParse {
            path: path.to_path_buf(),
            format: format.to_string(),
            message,
        };

        let config: Self = match extension {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error("yaml", e.to_string()))?
            }
            "toml" => toml::from_str(&content).map_err(|e| parse_error("toml", e.to_string()))?,
            "json" => {
                serde_json::from_str(&content).map_err(|e| parse_error("json", e.to_string()))?
            }
            other => {
                return Err(ThemeError::UnsupportedFormat(format!(
                    "'{}'. Use .yaml, .yml, .toml, or .json",
                    other
                )))
            }
        };

        tracing::debug!("Loaded theme engine config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ThemeEngineConfig::default();
        assert_eq!(config.preference_key, "empire-theme");
        assert!(config.load_preference_on_start);
        assert!(config.initial_theme.is_none());
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.yaml");
        fs::write(&path, "initialTheme: neon\nloadPreferenceOnStart: false\n").unwrap();

        let config = ThemeEngineConfig::load_from_file(&path).unwrap();
        assert_eq!(config.initial_theme.as_deref(), Some("neon"));
        assert!(!config.load_preference_on_start);
        assert_eq!(config.preference_key, "empire-theme");
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(
            &path,
            "initialTheme = \"cosmic\"\npreferenceKey = \"ui-theme\"\n",
        )
        .unwrap();

        let config = ThemeEngineConfig::load_from_file(&path).unwrap();
        assert_eq!(config.initial_theme.as_deref(), Some("cosmic"));
        assert_eq!(config.preference_key, "ui-theme");
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{"preferenceFile": "/tmp/prefs.json"}"#).unwrap();

        let config = ThemeEngineConfig::load_from_file(&path).unwrap();
        assert_eq!(config.preference_file, Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.ini");
        fs::write(&path, "x=1").unwrap();
        assert!(matches!(
            ThemeEngineConfig::load_from_file(&path),
            Err(ThemeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.yaml");
        fs::write(&path, "initialTheme: [unclosed").unwrap();
        assert!(matches!(
            ThemeEngineConfig::load_from_file(&path),
            Err(ThemeError::ConfigParse { .. })
        ));
    }
}
