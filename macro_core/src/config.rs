//! Configuration file support for Macroplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/macroplan/config.toml`.

use crate::{Error, OutputFormat, PlanForm, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial form values; command-line flags override them
    #[serde(default)]
    pub defaults: PlanForm,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Output rendering configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from `path`, or defaults if there is no file
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .ok_or_else(|| Error::Config("cannot locate a config directory".into()))?,
        };
        Ok(base.join("macroplan").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check that the configured defaults would pass form validation
    pub fn validate(&self) -> Result<()> {
        self.defaults
            .validate()
            .map(|_| ())
            .map_err(|e| Error::Config(format!("invalid [defaults]: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults, PlanForm::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.weight_kg = 82.5;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults, config.defaults);
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.defaults, PlanForm::default());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[defaults]
age_years = 45
goal = "recomp"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.age_years, 45);
        assert_eq!(config.defaults.goal, "recomp");
        assert_eq!(config.defaults.weight_kg, 70.0); // default
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_defaults_rejected() {
        let toml_str = r#"
[defaults]
height_ft = 9
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let toml_str = r#"
[output]
format = "yaml"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
