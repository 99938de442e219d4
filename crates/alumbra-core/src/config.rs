use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ai")]
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { ai: default_ai() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on a single model call. On expiry the call fails as a
    /// model-invocation error; there is no automatic retry.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ai() -> AiConfig {
    AiConfig {
        model: default_model(),
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load config from the given path, or return defaults if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| CoreError::Io(format!("reading config: {e}")))?;
            let config: Config =
                toml::from_str(&contents).map_err(|e| CoreError::Config(e.to_string()))?;

            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Write config to the given path.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::Io(format!("creating config dir: {e}")))?;
        }
        std::fs::write(path, contents)
            .map_err(|e| CoreError::Io(format!("writing config: {e}")))?;
        Ok(())
    }
}

/// Get the alumbra data directory (~/.alumbra/).
pub fn alumbra_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".alumbra")
}

/// Read the Gemini API key from the environment. The key is process-wide
/// read-only configuration and is never written to the config file.
pub fn api_key_from_env() -> Result<String, CoreError> {
    std::env::var("GEMINI_API_KEY").map_err(|_| {
        CoreError::Config(
            "GEMINI_API_KEY is not set. Export your Google AI API key to run analyses."
                .to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = Config::default();
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert!(config.ai.base_url.starts_with("https://"));
        assert_eq!(config.ai.timeout_secs, 30);
    }

    #[test]
    fn test_ai_config_deserialize() {
        let toml_str = r#"
[ai]
model = "gemini-2.5-pro"
base_url = "https://example.test/v1beta"
timeout_secs = 60
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.model, "gemini-2.5-pro");
        assert_eq!(config.ai.base_url, "https://example.test/v1beta");
        assert_eq!(config.ai.timeout_secs, 60);
    }

    #[test]
    fn test_ai_config_partial_deserialize() {
        // Config with only some fields should fill defaults for the rest
        let toml_str = r#"
[ai]
model = "gemini-2.5-flash"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.ai.timeout_secs, 30); // default
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ai.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.ai.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.ai.model = "gemini-2.5-pro".to_string();
        config.ai.timeout_secs = 120;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.ai.model, "gemini-2.5-pro");
        assert_eq!(loaded.ai.timeout_secs, 120);
    }
}
