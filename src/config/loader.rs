//! Configuration File Loading
//!
//! Handles loading and saving configuration files from various locations
//! with support for multiple formats and fallback mechanisms.

use super::Config;
use crate::error::{Error, Result};
use crate::opener::is_supported_uri;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound for any per-character or handshake delay
const MAX_DELAY_MS: u64 = 60_000;

/// Upper bound for floating scene nodes
const MAX_SCENE_NODES: usize = 1_000;

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration with default options
    pub fn load() -> Result<Config> {
        Self::new().load_with(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(options: LoadOptions) -> Result<Config> {
        Self::new().load_with(options)
    }

    /// Search this loader's paths and load the first readable config
    pub fn load_with(&mut self, options: LoadOptions) -> Result<Config> {
        if let Some((path, config)) = self.find_and_load_config()? {
            debug!("Loaded configuration from {}", path.display());
            self.current_path = Some(path);

            if options.validate {
                validate_config(&config)?;
            }
            return Ok(config);
        }

        if options.create_default {
            let config = Config::default();
            if options.validate {
                validate_config(&config)?;
            }
            Ok(config)
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load and validate a specific file, inferring the format from its extension
    pub fn load_from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let format = super::utils::get_config_format(path).unwrap_or(ConfigFormat::Toml);
        let config = Self::load_config_file(path, format)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                }
            })?,
            _ => toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = Self::get_config_path_for_format(path, *format);

                if config_path.exists() {
                    match Self::load_config_file(&config_path, *format) {
                        Ok(config) => return Ok(Some((config_path, config))),
                        Err(e) => {
                            warn!(
                                "Failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                            continue;
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Load a specific configuration file
    fn load_config_file(path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Get configuration file path for a specific format
    fn get_config_path_for_format(base_path: &Path, format: ConfigFormat) -> PathBuf {
        let extension = match format {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        };

        base_path.join("config").with_extension(extension)
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("cyberport"));
        }

        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("cyberport"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".cyberport"));
            paths.push(home.join(".config").join("cyberport"));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(".cyberport"));
        }

        paths
    }

    /// Get the default configuration path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cyberport")
            .join("config.toml")
    }

    /// Get the current configuration file path
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Add a custom search path
    pub fn add_search_path(&mut self, path: PathBuf) {
        self.search_paths.push(path);
    }

    /// Clear all search paths and add a single path
    pub fn set_search_path(&mut self, path: PathBuf) {
        self.search_paths = vec![path];
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> Error {
    Error::ConfigValidationFailed {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let intervals = [
        ("reveal.boot_interval_ms", config.reveal.boot_interval_ms),
        ("reveal.title_interval_ms", config.reveal.title_interval_ms),
        ("reveal.tagline_interval_ms", config.reveal.tagline_interval_ms),
        ("reveal.status_interval_ms", config.reveal.status_interval_ms),
    ];
    for (field, value) in intervals {
        if value == 0 {
            return Err(invalid(field, "Interval must be greater than 0"));
        }
        if value > MAX_DELAY_MS {
            return Err(invalid(field, "Interval cannot exceed 60 seconds"));
        }
    }

    let contact = &config.contact;
    if contact.prompt.trim().is_empty() {
        return Err(invalid("contact.prompt", "Prompt cannot be empty"));
    }

    for (name, uri) in contact.social_links() {
        if !is_supported_uri(uri) {
            return Err(invalid(
                &format!("contact.{}_uri", name),
                format!("'{}' must be an http(s) or mailto URI", uri),
            ));
        }
    }

    if contact.open_delay_ms > MAX_DELAY_MS {
        return Err(invalid("contact.open_delay_ms", "Delay cannot exceed 60 seconds"));
    }

    if contact.handshake_delay_ms > MAX_DELAY_MS {
        return Err(invalid(
            "contact.handshake_delay_ms",
            "Delay cannot exceed 60 seconds",
        ));
    }

    let scene = &config.scene;
    if scene.grid_size <= 0 {
        return Err(invalid("scene.grid_size", "Grid size must be greater than 0"));
    }

    if scene.grid_step <= 0 || scene.grid_step > scene.grid_size {
        return Err(invalid(
            "scene.grid_step",
            "Grid step must be between 1 and the grid size",
        ));
    }

    if scene.node_count > MAX_SCENE_NODES {
        return Err(invalid("scene.node_count", "Node count cannot exceed 1000"));
    }

    Ok(())
}
