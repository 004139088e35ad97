//! Configuration loading for the dotwave clock.
//!
//! Reads `config.toml` from the platform config directory. Every field has a
//! default and loading fails soft: a missing or malformed file yields the
//! default configuration rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use dotwave_core::{ColorTheme, RenderConfig, RenderMode};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
    pub links: Links,
}

/// The `[render]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderOptions {
    pub dot_size: f64,
    pub gap: f64,
    pub brightness: f64,
    /// `"wave"` or `"clock"`; unknown values fall back to `"wave"`.
    pub mode: String,
    /// Theme name; unknown values fall back to `"ice"`.
    pub theme: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dot_size: 12.0,
            gap: 6.0,
            brightness: 1.0,
            mode: "wave".to_string(),
            theme: "ice".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            dot_size: self.dot_size,
            gap: self.gap,
            brightness: self.brightness,
        }
    }

    pub fn mode(&self) -> RenderMode {
        match self.mode.to_ascii_lowercase().as_str() {
            "clock" => RenderMode::Clock,
            _ => RenderMode::Wave,
        }
    }

    pub fn theme(&self) -> ColorTheme {
        match self.theme.to_ascii_lowercase().as_str() {
            "cyan" => ColorTheme::Cyan,
            "green" => ColorTheme::Green,
            "magenta" => ColorTheme::Magenta,
            "amber" => ColorTheme::Amber,
            _ => ColorTheme::Ice,
        }
    }
}

/// The `[links]` section. Every link is optional; an absent link disables
/// the corresponding key binding instead of erroring.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Links {
    pub repository: Option<String>,
    pub install: Option<String>,
    pub blog: Option<String>,
    pub payment: Option<String>,
}

impl Config {
    /// Load from the platform config directory.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Path to `config.toml`, when a home directory can be resolved.
    pub fn config_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", "dotwave")?;
        Some(dirs.config_dir().join("config.toml"))
    }

    /// Load from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|text| Self::parse(&text).ok())
            .unwrap_or_default()
    }

    /// Strict parse, used by `load_from` and by tests.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
