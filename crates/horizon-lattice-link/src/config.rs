//! Appearance configuration for link labels.

/// An opaque 8-bit-per-channel RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a colour from 8-bit components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from a 24-bit `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// The colour as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default foreground of enabled links.
pub const LINK_FOREGROUND: Color = Color::from_rgb8(0, 51, 153);

/// Default foreground of links in a disabled label.
pub const LINK_DISABLED_FOREGROUND: Color = Color::from_rgb8(172, 168, 153);

/// Styling applied by [`LinkLabel::style_runs`](crate::LinkLabel::style_runs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLabelConfig {
    /// Foreground of links while the label is enabled.
    pub link_color: Color,
    /// Foreground of links while the label is disabled.
    pub disabled_color: Color,
    /// Whether link text is underlined.
    pub underline_links: bool,
    /// Whether mnemonic characters are underlined.
    pub underline_mnemonics: bool,
}

impl Default for LinkLabelConfig {
    fn default() -> Self {
        Self {
            link_color: LINK_FOREGROUND,
            disabled_color: LINK_DISABLED_FOREGROUND,
            underline_links: true,
            underline_mnemonics: true,
        }
    }
}

impl LinkLabelConfig {
    /// Set the enabled link colour.
    pub fn with_link_color(mut self, color: Color) -> Self {
        self.link_color = color;
        self
    }

    /// Set the disabled link colour.
    pub fn with_disabled_color(mut self, color: Color) -> Self {
        self.disabled_color = color;
        self
    }

    /// Enable or disable link underlines.
    pub fn with_underline_links(mut self, underline: bool) -> Self {
        self.underline_links = underline;
        self
    }

    /// Enable or disable mnemonic underlines.
    pub fn with_underline_mnemonics(mut self, underline: bool) -> Self {
        self.underline_mnemonics = underline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_u32() {
        assert_eq!(Color::from_u32(0x003399), LINK_FOREGROUND);
        assert_eq!(LINK_DISABLED_FOREGROUND.to_hex(), "#aca899");
    }

    #[test]
    fn test_config_builders() {
        let config = LinkLabelConfig::default()
            .with_link_color(Color::from_rgb8(1, 2, 3))
            .with_underline_mnemonics(false);
        assert_eq!(config.link_color, Color::from_rgb8(1, 2, 3));
        assert_eq!(config.disabled_color, LINK_DISABLED_FOREGROUND);
        assert!(config.underline_links);
        assert!(!config.underline_mnemonics);
    }
}
