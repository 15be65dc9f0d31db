//! Application configuration.

use crate::Palette;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest panel edge that still leaves every cell at least one pixel.
const MIN_EDGE: u32 = 3;

/// Largest panel edge accepted from configuration.
pub const MAX_EDGE: u32 = 4096;

/// Top-level configuration, as read from `tictouch.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Panel geometry.
    display: DisplayConfig,

    /// Drawing colours.
    palette: Palette,

    /// Touch handling options.
    touch: TouchConfig,
}

/// Panel geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Panel width.
    width: u32,

    /// Panel height.
    height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        // ILI9341 in portrait orientation.
        Self {
            width: 240,
            height: 320,
        }
    }
}

/// Touch handling options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    /// Echo raw press coordinates on the status line.
    show_readout: bool,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            width = config.display.width,
            height = config.display.height,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        width: Option<u32>,
        height: Option<u32>,
        show_readout: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(width) = width {
            self.display.width = width;
        }
        if let Some(height) = height {
            self.display.height = height;
        }
        if show_readout {
            self.touch.show_readout = true;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the panel can hold a 3x3 board and fits in memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let DisplayConfig { width, height } = self.display;
        if width < MIN_EDGE || height < MIN_EDGE {
            return Err(ConfigError::new(format!(
                "Display {}x{} is too small for a 3x3 board",
                width, height
            )));
        }
        if width > MAX_EDGE || height > MAX_EDGE {
            return Err(ConfigError::new(format!(
                "Display {}x{} is too large (max edge {})",
                width, height, MAX_EDGE
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
