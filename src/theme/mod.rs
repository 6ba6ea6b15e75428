//! Themes: named mappings from token class to visual style
//!
//! A theme must define a style for every token class a grammar can
//! emit. Totality is checked when a theme is registered or loaded
//! from a file, never patched over at render time.

pub mod builtin;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::style::{Color, Style};
use crate::token::TokenClass;

/// A named mapping from token class to style, plus the block palette
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme identifier (e.g., "github-dark")
    pub name: String,
    /// Block background color
    pub background: Color,
    /// Block foreground color (plain text)
    pub foreground: Color,
    /// Style per token class
    styles: HashMap<TokenClass, Style>,
}

impl Theme {
    /// Create a new theme with an empty style table
    pub fn new(name: &str, background: Color, foreground: Color) -> Self {
        Self {
            name: name.to_string(),
            background,
            foreground,
            styles: HashMap::new(),
        }
    }

    /// Set the style for a token class
    pub fn set_style(&mut self, class: TokenClass, style: Style) {
        self.styles.insert(class, style);
    }

    /// Resolve the style for a token class
    pub fn style_for(&self, class: TokenClass) -> Option<Style> {
        self.styles.get(&class).copied()
    }

    /// Check that every token class has a style
    ///
    /// A gap is a configuration bug: callers must refuse to register
    /// a theme that fails this check.
    pub fn validate(&self) -> Result<()> {
        for class in TokenClass::ALL {
            if !self.styles.contains_key(&class) {
                return Err(HighlightError::MissingStyleForClass {
                    theme: self.name.clone(),
                    class,
                });
            }
        }
        Ok(())
    }

    /// Parse a theme from TOML text
    ///
    /// The file carries the palette and a `[styles]` table keyed by
    /// token class names with hex colors:
    ///
    /// ```text
    /// name = "my-theme"
    /// background = "#0d1117"
    /// foreground = "#c9d1d9"
    ///
    /// [styles]
    /// comment = { fg = "#8b949e", italic = true }
    /// command = { fg = "#d2a8ff", bold = true }
    /// ```
    ///
    /// The parsed theme is validated for totality before it is
    /// returned.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(text)?;

        let mut theme = Theme::new(
            &file.name,
            Color::from_hex(&file.background)?,
            Color::from_hex(&file.foreground)?,
        );

        for (key, entry) in &file.styles {
            let class = TokenClass::from_name(key)
                .ok_or_else(|| HighlightError::UnknownTokenClass(key.clone()))?;
            let mut style = Style::fg(Color::from_hex(&entry.fg)?);
            if let Some(bg) = &entry.bg {
                style = style.with_bg(Color::from_hex(bg)?);
            }
            style.bold = entry.bold;
            style.italic = entry.italic;
            style.underline = entry.underline;
            theme.set_style(class, style);
        }

        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Raw deserialization target for theme files
#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: String,
    background: String,
    foreground: String,
    #[serde(default)]
    styles: HashMap<String, StyleEntry>,
}

/// Raw deserialization target for one style entry
#[derive(Debug, Deserialize)]
struct StyleEntry {
    fg: String,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
}
