//! Configuration for the grid layout

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::error::LayoutError;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for arranging a component set
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance from the container edge to the content bounding box
    pub padding: f64,

    /// Corner rounding applied to the container
    pub corner_radius: f64,

    /// Maximum distance for two variants to share a row or column
    pub alignment_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 80.0,
            corner_radius: 32.0,
            alignment_threshold: 20.0,
        }
    }
}

/// TOML structure for deserializing a config file
#[derive(Deserialize)]
struct TomlConfig {
    #[serde(default)]
    layout: LayoutConfig,
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the container corner radius
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the alignment threshold
    pub fn with_alignment_threshold(mut self, threshold: f64) -> Self {
        self.alignment_threshold = threshold;
        self
    }

    /// Load configuration from a TOML file with a `[layout]` table
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string with a `[layout]` table
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        Ok(parsed.layout)
    }

    /// Check that every value is usable by the layout pipeline
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("padding", self.padding),
            ("corner_radius", self.corner_radius),
            ("alignment_threshold", self.alignment_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LayoutError::invalid_config(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(LayoutError::invalid_config(field, "must not be negative"));
            }
        }
        Ok(())
    }
}
