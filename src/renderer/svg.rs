//! SVG preview of an arranged component set

use crate::layout::{Arrangement, BoundingBox, Guide, GuideAxis, LayoutConfig, Size};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    guides: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            guides: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone()
    }

    fn indent_str(&self) -> &str {
        if self.config.compact {
            ""
        } else {
            "  "
        }
    }

    fn newline(&self) -> &str {
        if self.config.compact {
            ""
        } else {
            "\n"
        }
    }

    /// Add the component set outline
    pub fn add_container(&mut self, size: Size, corner_radius: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r##"{}<rect class="{}container" x="0" y="0" width="{}" height="{}" rx="{}" fill="none" stroke="#9747ff" stroke-dasharray="4,2"/>"##,
            self.indent_str(),
            prefix,
            size.width,
            size.height,
            corner_radius
        ));
    }

    /// Add a variant rectangle
    pub fn add_variant(&mut self, id: &str, bounds: &BoundingBox) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r##"{}<rect id="{}" class="{}variant" x="{}" y="{}" width="{}" height="{}" fill="#f0f0f0" stroke="#333333"/>"##,
            self.indent_str(),
            escape_xml(id),
            prefix,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        ));
    }

    /// Add a guide line spanning the container
    pub fn add_guide(&mut self, guide: &Guide, size: Size) {
        let prefix = self.prefix();
        let (x1, y1, x2, y2) = match guide.axis {
            GuideAxis::X => (guide.offset, 0.0, guide.offset, size.height),
            GuideAxis::Y => (0.0, guide.offset, size.width, guide.offset),
        };
        self.guides.push(format!(
            r##"{}<line class="{}guide" x1="{}" y1="{}" x2="{}" y2="{}" stroke="#ff2d55" stroke-width="0.5"/>"##,
            self.indent_str(),
            prefix,
            x1,
            y1,
            x2,
            y2
        ));
    }

    /// Build the final SVG string around `size`
    pub fn build(self, size: Size) -> String {
        let margin = self.config.margin;
        // Subtracting from zero keeps a zero margin from printing as "-0"
        let origin = 0.0 - margin;
        let nl = self.newline();

        let mut svg = String::new();

        if !self.config.compact {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            origin,
            origin,
            size.width + 2.0 * margin,
            size.height + 2.0 * margin
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Guides drawn on top
        for guide in &self.guides {
            svg.push_str(guide);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render an arranged component set with its guides
pub fn render_svg(arrangement: &Arrangement, layout: &LayoutConfig, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_container(arrangement.size, layout.corner_radius);
    for variant in &arrangement.variants {
        builder.add_variant(variant.id.as_str(), &variant.bounds);
    }
    if config.show_guides {
        for guide in &arrangement.guides {
            builder.add_guide(guide, arrangement.size);
        }
    }

    builder.build(arrangement.size)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
