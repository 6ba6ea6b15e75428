//! Style types for rendered output
//!
//! Themes resolve token classes to these styles. Colors are concrete
//! sRGB values so a rendered block can be embedded in any document
//! layer without a terminal palette in between.

use crate::error::{HighlightError, Result};

/// A 24-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from hex notation (#rgb or #rrggbb)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| HighlightError::InvalidColor(hex.to_string()))?;

        let parse = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| HighlightError::InvalidColor(hex.to_string()))
        };

        match digits.len() {
            3 => {
                let r = parse(&digits[0..1])?;
                let g = parse(&digits[1..2])?;
                let b = parse(&digits[2..3])?;
                // Double each nibble: #abc means #aabbcc
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::new(
                parse(&digits[0..2])?,
                parse(&digits[2..4])?,
                parse(&digits[4..6])?,
            )),
            _ => Err(HighlightError::InvalidColor(hex.to_string())),
        }
    }

    /// Format as #rrggbb hex notation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Visual style for a token class
///
/// Foreground color is mandatory; everything else is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color (None = inherit the block background)
    pub bg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }
}
