//! Token types for syntax highlighting
//!
//! This module defines the semantic token classes a grammar can
//! assign to spans of source text, and the `Token` type pairing a
//! class with the exact text it covers.

/// Semantic token classes for syntax highlighting
///
/// Every theme must define a style for every class; see
/// `Theme::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Comments (# ... in shell and TOML)
    Comment,
    /// Command names (first word of a shell command)
    Command,
    /// Language keywords (if, then, fi, for, etc.)
    Keyword,
    /// Command-line flags (-v, --verbose)
    Flag,
    /// Command operands that are not flags or literals
    Argument,
    /// String literals and here-documents
    String,
    /// Variable references ($VAR, ${VAR}) and assignments (VAR=...)
    Variable,
    /// Numeric literals
    Number,
    /// Operators and punctuation (|, &&, ;, =, redirects)
    Operator,
    /// Keys and table headers in config formats
    Property,
    /// Literal constants (true, false)
    Constant,
    /// Plain text with no special meaning
    Text,
}

impl TokenClass {
    /// Every token class a grammar can emit
    ///
    /// Theme totality is validated against this list.
    pub const ALL: [TokenClass; 12] = [
        TokenClass::Comment,
        TokenClass::Command,
        TokenClass::Keyword,
        TokenClass::Flag,
        TokenClass::Argument,
        TokenClass::String,
        TokenClass::Variable,
        TokenClass::Number,
        TokenClass::Operator,
        TokenClass::Property,
        TokenClass::Constant,
        TokenClass::Text,
    ];

    /// Get the stable name for this class (used in theme files and
    /// HTML class attributes)
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Comment => "comment",
            TokenClass::Command => "command",
            TokenClass::Keyword => "keyword",
            TokenClass::Flag => "flag",
            TokenClass::Argument => "argument",
            TokenClass::String => "string",
            TokenClass::Variable => "variable",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Property => "property",
            TokenClass::Constant => "constant",
            TokenClass::Text => "text",
        }
    }

    /// Parse a token class from its stable name (for TOML theme files)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(TokenClass::Comment),
            "command" => Some(TokenClass::Command),
            "keyword" => Some(TokenClass::Keyword),
            "flag" => Some(TokenClass::Flag),
            "argument" => Some(TokenClass::Argument),
            "string" => Some(TokenClass::String),
            "variable" => Some(TokenClass::Variable),
            "number" => Some(TokenClass::Number),
            "operator" => Some(TokenClass::Operator),
            "property" => Some(TokenClass::Property),
            "constant" => Some(TokenClass::Constant),
            "text" => Some(TokenClass::Text),
            _ => None,
        }
    }
}

/// A classified contiguous span of text within one line
///
/// Tokens produced for a line are non-overlapping and contiguous:
/// concatenating their text reproduces the line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Semantic class assigned by the grammar
    pub class: TokenClass,
    /// The exact text this token covers
    pub text: String,
}

impl Token {
    /// Create a new token
    pub fn new(class: TokenClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }
}
