//! Pattern rules for tokenization
//!
//! This module defines the rule types a grammar uses to split source
//! text into classified tokens.

use regex::Regex;

use crate::token::TokenClass;

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a token class to the match.
/// Rules are tried in priority order (highest first). A rule marked
/// `command_only` is considered only while the scanner is at command
/// position (start of line or just after a control operator).
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token class to assign to matches
    pub class: TokenClass,
    /// Priority (higher = tried first)
    pub priority: i32,
    /// Only match at command position
    pub command_only: bool,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, class: TokenClass, priority: i32) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            class,
            priority,
            command_only: false,
        })
    }

    /// Create a rule that only matches at command position
    pub fn command_position(
        name: &str,
        pattern: &str,
        class: TokenClass,
        priority: i32,
    ) -> Option<Self> {
        let mut rule = Self::new(name, pattern, class, priority)?;
        rule.command_only = true;
        Some(rule)
    }

    /// Match this rule exactly at a byte position
    ///
    /// Returns the end offset of the match. Empty matches are treated
    /// as non-matches so the scanner always advances.
    pub fn matches_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        self.pattern
            .find(&text[pos..])
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| pos + m.end())
    }
}

/// A multi-line construct rule (quoted strings, here-documents)
///
/// These rules carry state across lines within a single tokenize
/// call, for constructs that can span multiple lines.
pub struct MultilineRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    /// Token class for this construct
    pub class: TokenClass,
    /// Whether the end pattern can be escaped
    pub escapable: bool,
    /// Escape character (usually backslash)
    pub escape_char: Option<char>,
    /// Unique ID for this multiline state (1-255, 0 = normal)
    pub state_id: u8,
}

impl MultilineRule {
    /// Create a new multiline rule
    pub fn new(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        class: TokenClass,
        state_id: u8,
    ) -> Option<Self> {
        let start = Regex::new(start_pattern).ok()?;
        let end = Regex::new(end_pattern).ok()?;
        Some(Self {
            name: name.to_string(),
            start,
            end,
            class,
            escapable: false,
            escape_char: None,
            state_id,
        })
    }

    /// Create a multiline rule with escape support
    pub fn with_escape(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        class: TokenClass,
        state_id: u8,
        escape_char: char,
    ) -> Option<Self> {
        let mut rule = Self::new(name, start_pattern, end_pattern, class, state_id)?;
        rule.escapable = true;
        rule.escape_char = Some(escape_char);
        Some(rule)
    }

    /// Match the start delimiter exactly at a byte position
    ///
    /// Returns the end offset of the delimiter.
    pub fn starts_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        self.start
            .find(&text[pos..])
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| pos + m.end())
    }

    /// Find the end of this construct in text, respecting escapes
    ///
    /// Returns the offset just past the end delimiter.
    pub fn find_end(&self, text: &str, start: usize) -> Option<usize> {
        if start >= text.len() {
            return None;
        }

        let search_text = &text[start..];

        if !self.escapable {
            return self.end.find(search_text).map(|m| start + m.end());
        }

        let mut pos = 0;
        while let Some(m) = self.end.find(&search_text[pos..]) {
            let match_start = pos + m.start();
            // An odd number of preceding escape characters means the
            // delimiter itself is escaped.
            let escape_count = search_text[..match_start]
                .chars()
                .rev()
                .take_while(|&c| Some(c) == self.escape_char)
                .count();
            if escape_count % 2 == 1 {
                pos += m.end();
                continue;
            }
            return Some(start + pos + m.end());
        }
        None
    }
}

/// Line state for tracking multi-line constructs
///
/// Threaded from one line to the next within a single tokenize call;
/// never shared across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// 0 = normal, non-zero = inside the multiline rule with this ID
    pub multiline_id: u8,
}

impl LineState {
    /// Create state for being inside a multiline construct
    pub fn inside(state_id: u8) -> Self {
        Self {
            multiline_id: state_id,
        }
    }

    /// Check if we're inside a multiline construct
    pub fn is_inside_multiline(&self) -> bool {
        self.multiline_id != 0
    }

    /// Check if we're in normal (no multiline) state
    pub fn is_normal(&self) -> bool {
        self.multiline_id == 0
    }
}
