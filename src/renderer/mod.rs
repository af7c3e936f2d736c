//! SVG previews of arranged component sets
//!
//! Draws the resized container, its variants at their final positions and
//! the derived guides, for inspecting a layout outside the host.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
