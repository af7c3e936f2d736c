//! Error types for the layout pipeline

use thiserror::Error;

/// Errors that can occur before any component set is arranged
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A configuration value the pipeline cannot work with
    #[error("invalid layout config '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl LayoutError {
    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
