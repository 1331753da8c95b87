//! Configuration persistence for geomark settings

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoMarkConfig {
    /// File name offered for exported documents
    pub export_file_name: String,
    /// Directory exports are written to (None = current directory)
    pub export_dir: Option<PathBuf>,
    /// Pixel delta applied to the cursor position for the hover info box
    pub hover_offset: (f32, f32),
    /// Prompt text shown when placing a new marker
    pub add_prompt: String,
    /// Prompt text shown when editing a marker's info
    pub edit_prompt: String,
    /// Target of the "External Link" menu entry
    pub external_link: String,
    /// Duration of the fit-to-extent animation after an import
    pub fit_duration_ms: u64,
}

impl Default for GeoMarkConfig {
    fn default() -> Self {
        Self {
            export_file_name: "merged-map.geojson".to_string(),
            export_dir: None,
            // Up and to the left of the cursor so the box does not hide the marker
            hover_offset: (-60.0, -60.0),
            add_prompt: "Enter info for this icon:".to_string(),
            edit_prompt: "Edit info:".to_string(),
            external_link: "https://example.com".to_string(),
            fit_duration_ms: 1000,
        }
    }
}

impl GeoMarkConfig {
    /// Configuration directory name under the user config dir
    pub const ID: &'static str = "geomark";

    /// Default location of the config file
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            let config = Self::default();
            config.save();
            return config;
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            log::error!("No config directory available for saving");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("Failed to save config: {:?}", err);
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Where an export with the configured name ends up
    pub fn export_path(&self) -> PathBuf {
        match &self.export_dir {
            Some(dir) => dir.join(&self.export_file_name),
            None => PathBuf::from(&self.export_file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = GeoMarkConfig {
            export_file_name: "trail.geojson".to_string(),
            hover_offset: (10.0, -5.0),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(GeoMarkConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"external_link": "https://maps.example.org"}"#).unwrap();

        let config = GeoMarkConfig::load_from(&path).unwrap();
        assert_eq!(config.external_link, "https://maps.example.org");
        assert_eq!(config.export_file_name, "merged-map.geojson");
        assert_eq!(config.fit_duration_ms, 1000);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(GeoMarkConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_export_path() {
        let mut config = GeoMarkConfig::default();
        assert_eq!(config.export_path(), PathBuf::from("merged-map.geojson"));
        config.export_dir = Some(PathBuf::from("/tmp/out"));
        assert_eq!(
            config.export_path(),
            PathBuf::from("/tmp/out/merged-map.geojson")
        );
    }
}
