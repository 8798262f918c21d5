use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the external NDEL engine service.
    #[serde(default = "default_ndel_service_url")]
    pub ndel_service_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_ndel_service_url() -> String {
    "http://localhost:8000".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }

    /// Load configuration from the first path that parses, falling back to
    /// built-in defaults when no config file is present.
    pub fn load_or_default() -> Self {
        let config_paths: Vec<String> = vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.yaml".to_string()),
            Some("conf.json".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        for path in config_paths {
            match Config::load(&path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from: {}", path);
                    return config;
                }
                Err(e) => {
                    tracing::debug!("Failed to load config from {}: {}", path, e);
                    continue;
                }
            }
        }

        Config::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ndel_service_url: default_ndel_service_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_port_5000() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.ndel_service_url, "http://localhost:8000");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("port: 5050\n").unwrap();
        assert_eq!(config.port, 5050);
        assert_eq!(config.host, "0.0.0.0");
    }
}
