//! Configuration management for CyberPort
//!
//! Typing speeds, contact links, terminal prompt, background scene shape and
//! the initial theme all live here. Every section carries serde defaults so a
//! partial configuration file only needs to name what it overrides.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for CyberPort
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Typing-effect speeds
    pub reveal: RevealConfig,

    /// Contact terminal and social links
    pub contact: ContactConfig,

    /// Presentation settings
    pub ui: UiConfig,

    /// Background grid scene
    pub scene: SceneConfig,
}

/// Per-character emission intervals for the typed reveals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// "access granted..." boot line
    pub boot_interval_ms: u64,
    /// Role title under the hero heading
    pub title_interval_ms: u64,
    /// Tagline listing focus areas
    pub tagline_interval_ms: u64,
    /// Contact section "connecting" status line
    pub status_interval_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            boot_interval_ms: 80,
            title_interval_ms: 100,
            tagline_interval_ms: 80,
            status_interval_ms: 50,
        }
    }
}

impl RevealConfig {
    pub fn boot_interval(&self) -> Duration {
        Duration::from_millis(self.boot_interval_ms)
    }

    pub fn title_interval(&self) -> Duration {
        Duration::from_millis(self.title_interval_ms)
    }

    pub fn tagline_interval(&self) -> Duration {
        Duration::from_millis(self.tagline_interval_ms)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }
}

/// Contact terminal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Prompt marker echoed in front of every submitted command
    pub prompt: String,
    pub github_uri: String,
    pub linkedin_uri: String,
    pub email_uri: String,
    pub discord_uri: String,
    /// Delay between printing a social command's lines and opening its link
    pub open_delay_ms: u64,
    /// Simulated secure-shell handshake before the terminal unlocks
    pub handshake_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            prompt: "guest@cyberport:~$".to_string(),
            github_uri: "https://github.com".to_string(),
            linkedin_uri: "https://linkedin.com".to_string(),
            email_uri: "mailto:contact@cyberport.dev".to_string(),
            discord_uri: "https://discord.com".to_string(),
            open_delay_ms: 1000,
            handshake_delay_ms: 2000,
        }
    }
}

impl ContactConfig {
    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }

    pub fn handshake_delay(&self) -> Duration {
        Duration::from_millis(self.handshake_delay_ms)
    }

    /// All configured social links, keyed by their command name
    pub fn social_links(&self) -> [(&'static str, &str); 4] {
        [
            ("github", self.github_uri.as_str()),
            ("linkedin", self.linkedin_uri.as_str()),
            ("email", self.email_uri.as_str()),
            ("discord", self.discord_uri.as_str()),
        ]
    }
}

/// Colour scheme the page starts in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial theme, applied once at startup
    pub theme: ThemeMode,
    /// Emit ANSI colour codes
    pub color: bool,
    /// Play typed reveals with their configured delays
    pub animate: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            color: true,
            animate: true,
        }
    }
}

/// Background grid scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Half-extent of the square grid
    pub grid_size: i32,
    /// Spacing between grid lines
    pub grid_step: i32,
    /// Number of floating nodes
    pub node_count: usize,
    /// Fixed RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            grid_step: 2,
            node_count: 15,
            seed: None,
        }
    }
}

/// Configuration utilities
pub mod utils {
    use super::*;
    use crate::error::{Error, Result};
    use std::path::Path;

    /// Get configuration file format from path
    pub fn get_config_format(path: &Path) -> Option<loader::ConfigFormat> {
        match path.extension()?.to_str()? {
            "toml" => Some(loader::ConfigFormat::Toml),
            "json" => Some(loader::ConfigFormat::Json),
            _ => None,
        }
    }

    /// Create a default configuration file content
    pub fn create_default_config_content(format: loader::ConfigFormat) -> Result<String> {
        let config = Config::default();

        match format {
            loader::ConfigFormat::Toml => {
                toml::to_string_pretty(&config).map_err(|e| Error::ConfigSerializationFailed {
                    format: "TOML".to_string(),
                    reason: e.to_string(),
                })
            }
            loader::ConfigFormat::Json => {
                serde_json::to_string_pretty(&config).map_err(|e| {
                    Error::ConfigSerializationFailed {
                        format: "JSON".to_string(),
                        reason: e.to_string(),
                    }
                })
            }
        }
    }
}
