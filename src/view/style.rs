//! Presentation variants decided once per tag, shared by every renderer.

/// Style variant for a status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Internal,
    Warning,
    Trending,
    /// Any tag without a dedicated style
    Plain,
}

impl StatusStyle {
    /// Pick the style for a tag (case-insensitive)
    pub fn for_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "internal" => StatusStyle::Internal,
            "warning" => StatusStyle::Warning,
            "trending" => StatusStyle::Trending,
            _ => StatusStyle::Plain,
        }
    }

    /// CSS modifier class; empty for [`StatusStyle::Plain`]
    pub fn css_class(self) -> &'static str {
        match self {
            StatusStyle::Internal => "internal",
            StatusStyle::Warning => "warning",
            StatusStyle::Trending => "trending",
            StatusStyle::Plain => "",
        }
    }
}

/// Icon for a feature tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Decompiler,
    MultiInstance,
    Kernel,
    /// Generic indicator for features without a dedicated icon
    Info,
}

impl FeatureIcon {
    pub const ALL: [FeatureIcon; 4] = [
        FeatureIcon::Decompiler,
        FeatureIcon::MultiInstance,
        FeatureIcon::Kernel,
        FeatureIcon::Info,
    ];

    /// Map a feature label to its icon (exact match, falls back to [`FeatureIcon::Info`])
    pub fn for_feature(feature: &str) -> Self {
        match feature {
            "Decompiler" => FeatureIcon::Decompiler,
            "Multi-instance" => FeatureIcon::MultiInstance,
            "Kernel" => FeatureIcon::Kernel,
            _ => FeatureIcon::Info,
        }
    }

    /// Fragment reference of the SVG symbol in the page sprite
    pub fn symbol_id(self) -> &'static str {
        match self {
            FeatureIcon::Decompiler => "#icon-decompiler",
            FeatureIcon::MultiInstance => "#icon-multi",
            FeatureIcon::Kernel => "#icon-kernel",
            FeatureIcon::Info => "#icon-info",
        }
    }

    /// Single-cell glyph for terminal output
    pub fn glyph(self) -> char {
        match self {
            FeatureIcon::Decompiler => '⚙',
            FeatureIcon::MultiInstance => '⧉',
            FeatureIcon::Kernel => '◆',
            FeatureIcon::Info => 'ⓘ',
        }
    }
}
