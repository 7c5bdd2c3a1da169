//! Configuration Management

use crate::capture::recorder::CaptureConfig;
use crate::recognition::recognizer::RecognizerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Recognition engine settings
    #[serde(default)]
    pub recognition: RecognizerConfig,
    /// Stroke capture settings
    #[serde(default)]
    pub capture: CaptureConfig,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.recognition.validate()?;
        self.capture.validate()?;
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".gesture_recognizer").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.recognition.resample_count, 64);
        assert_eq!(config.recognition.square_size, 250.0);
        assert_eq!(config.capture.max_points, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("[recognition]"));
        assert!(toml_str.contains("[capture]"));
        assert!(toml_str.contains("resample_count = 64"));
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_config_roundtrip_serialization() {
        let original = Config::default();
        let toml_str = original.to_toml().unwrap();
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");

        assert_eq!(original.recognition, deserialized.recognition);
        assert_eq!(original.capture, deserialized.capture);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let mut original = Config::default();
        original.recognition.resample_count = 128;
        original.recognition.min_points = 6;
        original.capture.min_sample_distance = 2.5;

        original.save(&config_path).expect("Failed to save config");
        assert!(config_path.exists());

        let loaded = Config::load(&config_path).expect("Failed to load config");
        assert_eq!(loaded.recognition.resample_count, 128);
        assert_eq!(loaded.recognition.min_points, 6);
        assert_eq!(loaded.capture.min_sample_distance, 2.5);
    }

    #[test]
    fn test_config_save_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested_path = temp_dir.path().join("nested").join("path").join("config.toml");

        let config = Config::default();
        config.save(&nested_path).expect("Failed to save config");

        assert!(nested_path.exists());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let nonexistent_path = PathBuf::from("/tmp/nonexistent_config_98765.toml");
        assert!(Config::load(&nonexistent_path).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("bad_config.toml");
        std::fs::write(
            &config_path,
            r#"
[recognition]
resample_count = 1
square_size = 250.0
angle_range_deg = 45.0
angle_precision_deg = 2.0
min_points = 10

[capture]
max_points = 4096
min_sample_distance = 0.0
"#,
        )
        .expect("Failed to write config");
        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        // A config file with only a [recognition] section: [capture] falls
        // back to defaults via #[serde(default)].
        let partial = r#"
[recognition]
resample_count = 32
square_size = 100.0
angle_range_deg = 30.0
angle_precision_deg = 1.0
min_points = 8
"#;
        let config: Config = toml::from_str(partial).expect("partial config should parse");
        assert_eq!(config.recognition.resample_count, 32);
        assert_eq!(config.capture.max_points, 4096);
    }

    #[test]
    fn test_invalid_toml_parsing() {
        let invalid_toml = "this is not valid toml {{{}}}";
        let result: Result<Config, _> = toml::from_str(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_default_when_file_missing() {
        let default_path = Config::default_path();
        if !default_path.exists() {
            let config = Config::load_default().expect("Failed to load default");
            assert_eq!(config.recognition.resample_count, 64);
        }
    }
}
