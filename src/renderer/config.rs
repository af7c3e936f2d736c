//! Options for the SVG preview

/// How a preview is laid out and styled
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Empty space drawn around the container
    pub margin: f64,

    /// Single-line output without the XML declaration, for embedding
    pub compact: bool,

    /// Prepended to every class name; may be empty
    pub class_prefix: String,

    /// Draw the row and column guides over the variants
    pub show_guides: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            compact: false,
            class_prefix: "vg-".to_string(),
            show_guides: true,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_guides(mut self, show: bool) -> Self {
        self.show_guides = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_preview() {
        let config = SvgConfig::default();
        assert_eq!(config.margin, 20.0);
        assert!(!config.compact);
        assert_eq!(config.class_prefix, "vg-");
        assert!(config.show_guides);
    }

    #[test]
    fn test_overrides() {
        let config = SvgConfig::new()
            .with_margin(0.0)
            .with_compact(true)
            .with_class_prefix("")
            .with_guides(false);

        assert_eq!(
            config,
            SvgConfig {
                margin: 0.0,
                compact: true,
                class_prefix: String::new(),
                show_guides: false,
            }
        );
    }
}
