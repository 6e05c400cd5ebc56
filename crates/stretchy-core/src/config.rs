use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::header::{HeaderBounds, FALLBACK_MINIMUM_HEIGHT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Resting header height, also the cap for the real height
    #[serde(default = "default_maximum_height")]
    pub preferred_maximum_height: f64,
    /// Measured or hand-picked compact height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_minimum_height: Option<f64>,
    /// Minimum used when `preferred_minimum_height` is not set
    #[serde(default = "default_fallback_minimum_height")]
    pub fallback_minimum_height: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            preferred_maximum_height: default_maximum_height(),
            preferred_minimum_height: None,
            fallback_minimum_height: default_fallback_minimum_height(),
        }
    }
}

impl HeaderConfig {
    /// Validated bounds for this header
    pub fn bounds(&self) -> crate::Result<HeaderBounds> {
        let min = self
            .preferred_minimum_height
            .unwrap_or(self.fallback_minimum_height);
        HeaderBounds::new(min, self.preferred_maximum_height)
    }
}

/// Output format for replayed frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Content inset used when a trace does not carry its own
    #[serde(default)]
    pub content_inset_top: f64,
    /// Distance between generated samples along a drag path
    #[serde(default = "default_step")]
    pub step: f64,
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            content_inset_top: 0.0,
            step: default_step(),
            format: OutputFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_maximum_height() -> f64 {
    200.0
}

fn default_fallback_minimum_height() -> f64 {
    FALLBACK_MINIMUM_HEIGHT
}

fn default_step() -> f64 {
    5.0
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<PathBuf> {
        let config_path = Self::config_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> crate::Result<()> {
        self.header.bounds()?;
        if !(self.replay.step.is_finite() && self.replay.step > 0.0) {
            return Err(crate::Error::Config(format!(
                "replay.step must be a positive number, got {}",
                self.replay.step
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/stretchy/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("stretchy")
            .join("config.toml")
    }
}
