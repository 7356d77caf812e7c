use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::platform;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub emergency: EmergencyConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Endpoints of the two external services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_chat_url")]
    pub chat_url: String,
    #[serde(default = "default_predict_url")]
    pub predict_url: String,
    /// Request timeout in seconds. 0 leaves the HTTP client's default in place.
    #[serde(default)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyConfig {
    /// Resource shown when a message trips the safety check.
    /// Relative paths resolve against the config directory.
    #[serde(default = "default_emergency_target")]
    pub target: String,
}

/// Timing of the character-by-character reveal of bot replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_char_interval_ms")]
    pub char_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory backing the local key-value store (journal entries).
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Play track previews through mpv.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            chat_url: default_chat_url(),
            predict_url: default_predict_url(),
            timeout_secs: 0,
        }
    }
}

impl ServicesConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for EmergencyConfig {
    fn default() -> Self {
        Self {
            target: default_emergency_target(),
        }
    }
}

impl EmergencyConfig {
    /// Filesystem location of the emergency resource.
    pub fn resolve(&self) -> PathBuf {
        let target = PathBuf::from(&self.target);
        if target.is_absolute() {
            target
        } else {
            platform::config_dir().join(target)
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_delay_ms: default_initial_delay_ms(),
            char_interval_ms: default_char_interval_ms(),
        }
    }
}

impl RevealConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn char_interval(&self) -> Duration {
        Duration::from_millis(self.char_interval_ms)
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_chat_url() -> String {
    "http://localhost:5000/chat".to_string()
}

fn default_predict_url() -> String {
    "http://localhost:5001/predict".to_string()
}

fn default_emergency_target() -> String {
    "./emergency.html".to_string()
}

fn default_true() -> bool {
    true
}

fn default_initial_delay_ms() -> u64 {
    200
}

fn default_char_interval_ms() -> u64 {
    30
}

fn default_storage_dir() -> PathBuf {
    platform::data_dir().join("storage")
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.services.chat_url, "http://localhost:5000/chat");
        assert_eq!(config.services.predict_url, "http://localhost:5001/predict");
        assert!(config.services.timeout().is_none());
        assert_eq!(config.reveal.initial_delay(), Duration::from_millis(200));
        assert_eq!(config.reveal.char_interval(), Duration::from_millis(30));
        assert!(config.paths.storage_dir.ends_with("kokoro/storage"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [services]
            predict_url = "http://127.0.0.1:9000/predict"
            timeout_secs = 15

            [reveal]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.services.chat_url, "http://localhost:5000/chat");
        assert_eq!(config.services.predict_url, "http://127.0.0.1:9000/predict");
        assert_eq!(config.services.timeout(), Some(Duration::from_secs(15)));
        assert!(!config.reveal.enabled);
        assert_eq!(config.reveal.char_interval_ms, 30);
        assert_eq!(config.emergency.target, "./emergency.html");
    }

    #[test]
    fn test_emergency_target_resolution() {
        let absolute = EmergencyConfig {
            target: "/srv/help/emergency.html".to_string(),
        };
        assert_eq!(absolute.resolve(), PathBuf::from("/srv/help/emergency.html"));

        let relative = EmergencyConfig::default();
        assert!(relative.resolve().starts_with(platform::config_dir()));
        assert!(relative.resolve().ends_with("emergency.html"));
    }
}
