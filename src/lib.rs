//! glint - syntax highlighting and code presentation
//!
//! Takes a raw multi-line text (canonically a shell transcript),
//! tokenizes it under a language grammar, resolves a named theme, and
//! produces a `RenderedBlock`: styled tokens grouped by line, ready
//! for a document layer to embed. The pipeline is pure; identical
//! inputs always produce identical blocks, and token text per line
//! concatenates back to the exact input.
//!
//! The `emit` module carries ready-made backends (ANSI terminal,
//! HTML); the core has no dependency on either.

pub mod emit;
pub mod error;
pub mod grammar;
pub mod render;
pub mod site;
pub mod style;
pub mod theme;
pub mod token;

pub use error::{HighlightError, Result};
pub use grammar::Grammar;
pub use render::{Highlighter, RenderOptions, RenderedBlock, StyledLine, StyledToken};
pub use style::{Color, Style};
pub use theme::Theme;
pub use token::{Token, TokenClass};
