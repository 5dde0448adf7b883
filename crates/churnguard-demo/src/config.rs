//! Demo configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_model_path() -> PathBuf {
    PathBuf::from("./models/churn_model.json")
}

/// CLI configuration, optionally loaded from a YAML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Model artifact path
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
}

impl DemoConfig {
    /// Load configuration: file if it exists, defaults otherwise,
    /// then apply the CLI override.
    pub fn load(config_path: &Path, model_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        if let Some(model) = model_override {
            config.model_path = model;
        }

        Ok(config)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = DemoConfig::load(Path::new("/nonexistent/churnguard.yaml"), None).unwrap();
        assert_eq!(config.model_path, default_model_path());
    }

    #[test]
    fn file_value_is_read_and_cli_overrides_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("churnguard.yaml");
        std::fs::write(&path, "model_path: ./custom/model.json\n").unwrap();

        let config = DemoConfig::load(&path, None).unwrap();
        assert_eq!(config.model_path, PathBuf::from("./custom/model.json"));

        let config = DemoConfig::load(&path, Some(PathBuf::from("cli.json"))).unwrap();
        assert_eq!(config.model_path, PathBuf::from("cli.json"));
    }
}
