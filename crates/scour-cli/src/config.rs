use scour_core::error::ScourError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the configured catalog file.
pub const CATALOG_ENV: &str = "SCOUR_CATALOG";

pub const OUTPUT_FORMATS: &[&str] = &["table", "json"];

/// Persistent settings in `~/.config/scour/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog used when neither `--catalog` nor `--preset` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ScourError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                ScourError::Config(format!("{}: {e}", config_path.display()))
            })?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<(), ScourError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf, ScourError> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScourError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("scour").join("config.json"))
    }

    /// Default catalog file; `SCOUR_CATALOG` wins over the config file.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        Self::catalog_from(std::env::var_os(CATALOG_ENV).map(PathBuf::from), self)
    }

    fn catalog_from(env: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
        env.filter(|p| !p.as_os_str().is_empty())
            .or_else(|| config.catalog.clone())
    }

    /// Pick the output format: explicit flag, then config, then `table`.
    pub fn output_format(&self, flag: Option<String>) -> Result<String, ScourError> {
        let format = flag
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| "table".into());
        check_output_format(&format)?;
        Ok(format)
    }
}

pub fn check_output_format(format: &str) -> Result<(), ScourError> {
    if OUTPUT_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(ScourError::Config(format!(
            "unknown output format '{format}' (expected {})",
            OUTPUT_FORMATS.join(" or ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_catalog_wins_over_config() {
        let config = Config {
            catalog: Some("from-config.json".into()),
            output: None,
        };
        assert_eq!(
            Config::catalog_from(Some("from-env.json".into()), &config),
            Some(PathBuf::from("from-env.json"))
        );
        assert_eq!(
            Config::catalog_from(None, &config),
            Some(PathBuf::from("from-config.json"))
        );
        assert_eq!(
            Config::catalog_from(Some(PathBuf::new()), &config),
            Some(PathBuf::from("from-config.json"))
        );
        assert_eq!(Config::catalog_from(None, &Config::default()), None);
    }

    #[test]
    fn output_format_precedence() {
        let config = Config {
            catalog: None,
            output: Some("json".into()),
        };
        assert_eq!(config.output_format(None).unwrap(), "json");
        assert_eq!(config.output_format(Some("table".into())).unwrap(), "table");
        assert_eq!(Config::default().output_format(None).unwrap(), "table");
        assert!(config.output_format(Some("yaml".into())).is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
