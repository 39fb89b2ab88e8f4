//! Configuration management for agriconnect.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the per-directory configuration
pub const PROJECT_CONFIG_FILE: &str = ".agriconnect.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.agriconnect.toml in the working directory)
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/agriconnect/config.toml)
        if let Some(config_dir) = directories::ProjectDirs::from("com", "agriconnect", "agriconnect")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (AGRICONNECT__*)
        builder = builder.add_source(
            Environment::with_prefix("AGRICONNECT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration, falling back to defaults when any layer is broken
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        Self::load(project_root).unwrap_or_else(|e| {
            tracing::warn!("Ignoring configuration, using defaults: {}", e);
            Self::default()
        })
    }
}

/// Page metadata shown in the header and the terminal title
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub layout: PageLayout,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon: default_icon(),
            layout: PageLayout::default(),
        }
    }
}

impl PageConfig {
    /// Title prefixed by the page icon, e.g. "🌾 AgriConnect"
    pub fn heading(&self) -> String {
        if self.icon.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}

fn default_title() -> String {
    "AgriConnect".to_string()
}

fn default_icon() -> String {
    "🌾".to_string()
}

/// How the page content is laid out horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    /// Bounded content column centered in the terminal
    #[default]
    Centered,
    /// Content spans the full terminal width
    Wide,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
    /// Width of the content column in centered layout
    #[serde(default = "default_content_width")]
    pub content_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
            content_width: default_content_width(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    100
}

fn default_content_width() -> u16 {
    72
}
