//! The block renderer
//!
//! `Highlighter` holds the registered grammars and themes and turns
//! (text, language, theme) into a `RenderedBlock`: styled tokens
//! grouped by line, with the theme palette already resolved. The
//! block owns all of its data; nothing borrows from the registry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{HighlightError, Result};
use crate::grammar::{builtin as grammars, Grammar};
use crate::style::{Color, Style};
use crate::theme::{builtin as themes, Theme};
use crate::token::TokenClass;

/// A token with its resolved style
#[derive(Debug, Clone, PartialEq)]
pub struct StyledToken {
    /// The exact text this token covers
    pub text: String,
    /// Semantic class assigned by the grammar
    pub class: TokenClass,
    /// Style resolved from the theme
    pub style: Style,
}

/// One line of a rendered block
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    /// Line number, when numbering was requested
    pub number: Option<usize>,
    /// Ordered tokens covering the line exactly
    pub tokens: Vec<StyledToken>,
}

impl StyledLine {
    /// Reassemble the original line text
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// The final structural output of the pipeline
///
/// Self-contained and immutable: safe to hold after the highlighter
/// that produced it is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
    /// Canonical language name the block was tokenized with
    pub language: String,
    /// Theme name the styles were resolved from
    pub theme: String,
    /// Block background color
    pub background: Color,
    /// Block foreground color
    pub foreground: Color,
    /// One entry per input line, in order
    pub lines: Vec<StyledLine>,
}

/// Presentation options for a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Attach line numbers to each styled line
    pub line_numbers: bool,
    /// First line number when numbering is on
    pub start_line: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            start_line: 1,
        }
    }
}

/// Registry of grammars and themes, and the render entry point
pub struct Highlighter {
    /// Registered grammars by canonical name
    grammars: HashMap<String, Grammar>,
    /// Alias to canonical name mapping
    alias_map: HashMap<String, String>,
    /// Registered themes by name
    themes: HashMap<String, Theme>,
}

impl Highlighter {
    /// Create a highlighter with the built-in grammars and themes
    pub fn new() -> Self {
        let mut highlighter = Self {
            grammars: HashMap::new(),
            alias_map: HashMap::new(),
            themes: HashMap::new(),
        };

        for grammar in grammars::all_grammars() {
            highlighter.add_grammar(grammar);
        }
        // Built-in themes assign every class by construction; see the
        // totality test in theme::builtin.
        for theme in themes::all_themes() {
            highlighter.themes.insert(theme.name.clone(), theme);
        }

        highlighter
    }

    /// Register a grammar
    pub fn add_grammar(&mut self, grammar: Grammar) {
        let name = grammar.name.clone();
        for alias in &grammar.aliases {
            self.alias_map.insert(alias.to_lowercase(), name.clone());
        }
        self.grammars.insert(name, grammar);
    }

    /// Register a theme, refusing incomplete style tables
    pub fn add_theme(&mut self, theme: Theme) -> Result<()> {
        theme.validate()?;
        self.themes.insert(theme.name.clone(), theme);
        Ok(())
    }

    /// Look up a grammar by name or alias
    pub fn grammar(&self, language: &str) -> Result<&Grammar> {
        let id = language.to_lowercase();
        let canonical = self.alias_map.get(&id).map(|s| s.as_str()).unwrap_or(&id);
        self.grammars
            .get(canonical)
            .ok_or_else(|| HighlightError::UnsupportedLanguage(language.to_string()))
    }

    /// Look up a theme by name
    pub fn theme(&self, name: &str) -> Result<&Theme> {
        self.themes
            .get(name)
            .ok_or_else(|| HighlightError::UnknownTheme(name.to_string()))
    }

    /// List registered language names
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.grammars.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// List registered theme names
    pub fn themes(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Render a source text with default options
    pub fn render(&self, source: &str, language: &str, theme: &str) -> Result<RenderedBlock> {
        self.render_with(source, language, theme, RenderOptions::default())
    }

    /// Render a source text into a styled block
    ///
    /// All-or-nothing: an unknown language or theme fails before any
    /// tokenization happens, and no partial block is ever returned.
    pub fn render_with(
        &self,
        source: &str,
        language: &str,
        theme: &str,
        options: RenderOptions,
    ) -> Result<RenderedBlock> {
        let grammar = self.grammar(language)?;
        let theme = self.theme(theme)?;

        // One resolver lookup per distinct class per call.
        let mut resolved: HashMap<TokenClass, Style> = HashMap::new();

        let mut lines = Vec::new();
        for (idx, tokens) in grammar.tokenize(source).into_iter().enumerate() {
            let mut styled = Vec::with_capacity(tokens.len());
            for token in tokens {
                let style = match resolved.entry(token.class) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        let style = theme.style_for(token.class).ok_or_else(|| {
                            HighlightError::MissingStyleForClass {
                                theme: theme.name.clone(),
                                class: token.class,
                            }
                        })?;
                        *entry.insert(style)
                    }
                };
                styled.push(StyledToken {
                    text: token.text,
                    class: token.class,
                    style,
                });
            }
            lines.push(StyledLine {
                number: options.line_numbers.then(|| options.start_line + idx),
                tokens: styled,
            });
        }

        Ok(RenderedBlock {
            language: grammar.name.clone(),
            theme: theme.name.clone(),
            background: theme.background,
            foreground: theme.foreground,
            lines,
        })
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
