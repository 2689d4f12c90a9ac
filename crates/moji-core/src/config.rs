use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{MojiError, MojiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub server: ServerConfig,
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Scheme, host and port of the search service, without the `/search` path
    pub base_url: String,
    /// Per-request timeout; `None` waits for the server indefinitely
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: String,
    pub accent_color: String,
    pub opacity: f64,
    pub window_width: i32,
    pub tile_columns: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// How long the "Copied!" marker stays on a tile
    pub feedback_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_string(),
            accent_color: "#cba6f7".to_string(),
            opacity: 0.96,
            window_width: 640,
            tile_columns: 5,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { feedback_ms: 1000 }
    }
}

impl BehaviorConfig {
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("moji")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            let mut config = Self::default();
            config.validate();
            return config;
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load config: {}", e);
                let mut config = Self::default();
                config.validate();
                config
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> MojiResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate();
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges
    pub fn validate(&mut self) {
        self.appearance.opacity = self.appearance.opacity.clamp(0.5, 1.0);
        self.appearance.window_width = self.appearance.window_width.clamp(400, 1200);
        self.appearance.tile_columns = self.appearance.tile_columns.clamp(1, 10);
        self.behavior.feedback_ms = self.behavior.feedback_ms.clamp(100, 10_000);

        let trimmed = self.server.base_url.trim().trim_end_matches('/');
        self.server.base_url = if trimmed.is_empty() {
            ServerConfig::default().base_url
        } else {
            trimmed.to_string()
        };
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> MojiResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MojiError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MojiError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| MojiError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.timeout_secs, None);
        assert_eq!(config.behavior.feedback_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            base_url = "http://emoji.local:9000/"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "http://emoji.local:9000/");
        assert_eq!(config.appearance.tile_columns, 5);
        assert_eq!(config.behavior.feedback_ms, 1000);
    }

    #[test]
    fn test_validate_clamps() {
        let mut config = Config::default();
        config.appearance.opacity = 0.1;
        config.appearance.tile_columns = 0;
        config.behavior.feedback_ms = 5;
        config.server.base_url = "http://localhost:8000//".into();
        config.validate();

        assert_eq!(config.appearance.opacity, 0.5);
        assert_eq!(config.appearance.tile_columns, 1);
        assert_eq!(config.behavior.feedback_ms, 100);
        assert_eq!(config.server.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_validate_blank_base_url() {
        let mut config = Config::default();
        config.server.base_url = "   ".into();
        config.validate();
        assert_eq!(config.server.base_url, ServerConfig::default().base_url);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.timeout_secs = Some(15);
        config.appearance.theme = "nord".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.timeout_secs, Some(15));
        assert_eq!(loaded.appearance.theme, "nord");
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server = [not toml").unwrap();

        assert!(matches!(Config::load_from(&path), Err(MojiError::Config(_))));
    }
}
