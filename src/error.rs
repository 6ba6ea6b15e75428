//! Error types for glint

use thiserror::Error;

use crate::token::TokenClass;

/// Result type alias for glint operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting and rendering error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("theme '{theme}' has no style for token class '{}'", .class.name())]
    MissingStyleForClass { theme: String, class: TokenClass },

    #[error("unknown token class: {0}")]
    UnknownTokenClass(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
