//! Application configuration.
//!
//! Configuration is read from TOML. Every field has a default, so an empty
//! document (or no file at all) yields a usable [`Config`].
//!
//! ```toml
//! [window]
//! width = 800
//! height = 600
//!
//! [render]
//! mode = "text"
//!
//! [logging]
//! level = "debug"
//! filter = "zincx::event=trace"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::enums::{LogLevel, RenderMode};
use crate::error::{ConfigError, ConfigResult};

/// Default window width in pixels.
pub const DEFAULT_WIDTH: i32 = 800;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: i32 = 600;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window geometry.
    pub window: WindowConfig,
    /// Rendering options.
    pub render: RenderConfig,
    /// Logging options.
    pub logging: LoggingConfig,
}

/// Window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// The mode the backend is initialized with.
    pub mode: RenderMode,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level emitted.
    pub level: LogLevel,
    /// Extra filter directives appended after the level
    /// (for example `"zincx::event=trace"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Build the full filter directive string for a subscriber.
    pub fn directives(&self) -> String {
        match &self.filter {
            Some(extra) if !extra.trim().is_empty() => {
                format!("{},{}", self.level.as_filter(), extra.trim())
            }
            _ => self.level.as_filter().to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: "zincx_core::config", path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Serialize this configuration to a TOML string.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write this configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check value ranges that the type system does not capture.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window.width <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "window.width",
                reason: format!("must be positive, got {}", self.window.width),
            });
        }
        if self.window.height <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "window.height",
                reason: format!("must be positive, got {}", self.window.height),
            });
        }
        Ok(())
    }
}
