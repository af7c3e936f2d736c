//! Grid layout for component set variants
//!
//! This module infers rows and columns from loosely placed variants, snaps
//! them into an aligned grid, and derives the container size and guides.

pub mod align;
pub mod cluster;
pub mod config;
pub mod engine;
pub mod error;
pub mod guides;
pub mod types;

pub use align::{align_columns, align_rows, apply_padding, fit_size};
pub use cluster::{cluster, columns, rows};
pub use config::{ConfigError, LayoutConfig};
pub use engine::arrange;
pub use error::LayoutError;
pub use guides::derive_guides;
pub use types::*;
