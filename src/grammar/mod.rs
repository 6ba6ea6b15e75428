//! Language grammars and the tokenizer
//!
//! A `Grammar` combines priority-ordered pattern rules and multiline
//! rules into a lexical scanner for one language. The scan is purely
//! syntactic: text that no rule recognizes degrades to plain `Text`
//! tokens instead of failing.

pub mod builtin;
pub mod rules;

use crate::token::{Token, TokenClass};
use rules::{LineState, MultilineRule, PatternRule};

/// Result of tokenizing a single line
#[derive(Debug)]
pub struct ScanResult {
    /// Tokens covering the line exactly, in order
    pub tokens: Vec<Token>,
    /// State at end of line (for the next line)
    pub end_state: LineState,
}

/// A complete grammar for one language
pub struct Grammar {
    /// Canonical language name (e.g., "bash")
    pub name: String,
    /// Alternate identifiers that resolve to this grammar
    pub aliases: Vec<String>,
    /// Single-line pattern rules, sorted by priority (highest first)
    patterns: Vec<PatternRule>,
    /// Multi-line rules for strings, here-documents, etc.
    multiline_rules: Vec<MultilineRule>,
}

impl Grammar {
    /// Create a new empty grammar
    ///
    /// A grammar with no rules classifies every line as a single
    /// `Text` token.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            patterns: Vec::new(),
            multiline_rules: Vec::new(),
        }
    }

    /// Add an alternate identifier
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_string());
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first)
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a multiline rule
    pub fn add_multiline(&mut self, rule: MultilineRule) {
        self.multiline_rules.push(rule);
    }

    /// Get multiline rule by state ID
    fn multiline_rule(&self, state_id: u8) -> Option<&MultilineRule> {
        self.multiline_rules.iter().find(|r| r.state_id == state_id)
    }

    /// Find a multiline rule whose start delimiter sits exactly at pos
    fn multiline_start_at(&self, text: &str, pos: usize) -> Option<(&MultilineRule, usize)> {
        self.multiline_rules
            .iter()
            .find_map(|rule| rule.starts_at(text, pos).map(|end| (rule, end)))
    }

    /// Find the highest-priority pattern rule matching exactly at pos
    fn pattern_at(&self, text: &str, pos: usize, at_command: bool) -> Option<(&PatternRule, usize)> {
        self.patterns
            .iter()
            .filter(|rule| at_command || !rule.command_only)
            .find_map(|rule| rule.matches_at(text, pos).map(|end| (rule, end)))
    }

    /// Tokenize a whole document
    ///
    /// Lines follow `str::lines` semantics: empty input yields zero
    /// lines and a trailing newline does not create a phantom line.
    /// Multiline state threads between lines of this call only.
    pub fn tokenize(&self, source: &str) -> Vec<Vec<Token>> {
        let mut state = LineState::default();
        source
            .lines()
            .map(|line| {
                let result = self.tokenize_line(line, state);
                state = result.end_state;
                result.tokens
            })
            .collect()
    }

    /// Tokenize a single line of text
    ///
    /// Takes the state left by the previous line and returns tokens
    /// plus the state for the next line. Token text concatenated in
    /// order reproduces the line exactly.
    pub fn tokenize_line(&self, text: &str, prev_state: LineState) -> ScanResult {
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut at_command = true;
        let mut plain_start: Option<usize> = None;

        // Finish a construct left open on a previous line.
        if prev_state.is_inside_multiline() {
            match self.multiline_rule(prev_state.multiline_id) {
                Some(rule) => match rule.find_end(text, 0) {
                    Some(end) => {
                        tokens.push(Token::new(rule.class, &text[..end]));
                        pos = end;
                        at_command = false;
                    }
                    None => {
                        // Entire line is still inside the construct.
                        if !text.is_empty() {
                            tokens.push(Token::new(rule.class, text));
                        }
                        return ScanResult {
                            tokens,
                            end_state: prev_state,
                        };
                    }
                },
                // Stale state from a grammar with no such rule.
                None => {}
            }
        }

        while pos < text.len() {
            if let Some((rule, open_end)) = self.multiline_start_at(text, pos) {
                flush_plain(&mut tokens, text, &mut plain_start, pos);
                match rule.find_end(text, open_end) {
                    Some(close) => {
                        tokens.push(Token::new(rule.class, &text[pos..close]));
                        pos = close;
                        at_command = false;
                        continue;
                    }
                    None => {
                        // Construct continues onto the next line.
                        tokens.push(Token::new(rule.class, &text[pos..]));
                        return ScanResult {
                            tokens,
                            end_state: LineState::inside(rule.state_id),
                        };
                    }
                }
            }

            if let Some((rule, end)) = self.pattern_at(text, pos, at_command) {
                flush_plain(&mut tokens, text, &mut plain_start, pos);
                let token = Token::new(rule.class, &text[pos..end]);
                at_command = next_command_position(at_command, &token);
                tokens.push(token);
                pos = end;
                continue;
            }

            // Nothing matched here: the character joins a plain run.
            if plain_start.is_none() {
                plain_start = Some(pos);
            }
            pos += 1;
            while pos < text.len() && !text.is_char_boundary(pos) {
                pos += 1;
            }
        }

        flush_plain(&mut tokens, text, &mut plain_start, text.len());

        ScanResult {
            tokens,
            end_state: LineState::default(),
        }
    }
}

/// Emit any pending plain run as a `Text` token
fn flush_plain(tokens: &mut Vec<Token>, text: &str, plain_start: &mut Option<usize>, end: usize) {
    if let Some(start) = plain_start.take() {
        if start < end {
            tokens.push(Token::new(TokenClass::Text, &text[start..end]));
        }
    }
}

/// Decide whether the next word sits at command position
///
/// Command position holds at the start of a line and again after
/// control operators, control keywords, and assignment prefixes.
fn next_command_position(current: bool, token: &Token) -> bool {
    match token.class {
        // Whitespace between words does not change position.
        TokenClass::Text => current,
        TokenClass::Keyword => true,
        TokenClass::Operator => token
            .text
            .chars()
            .any(|c| matches!(c, '|' | '&' | ';' | '(' | '`')),
        // VAR=value prefixes leave the command still to come.
        TokenClass::Variable => {
            if token.text.contains('=') {
                current
            } else {
                false
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_grammar() -> Grammar {
        let mut grammar = Grammar::new("test");

        if let Some(rule) = PatternRule::new("comment", r"#.*$", TokenClass::Comment, 100) {
            grammar.add_pattern(rule);
        }
        if let Some(rule) =
            PatternRule::command_position("command", r"[A-Za-z_][\w-]*", TokenClass::Command, 70)
        {
            grammar.add_pattern(rule);
        }
        if let Some(rule) = PatternRule::new("number", r"\d+", TokenClass::Number, 60) {
            grammar.add_pattern(rule);
        }
        if let Some(rule) = PatternRule::new("operator", r"[|&;]+", TokenClass::Operator, 50) {
            grammar.add_pattern(rule);
        }
        if let Some(rule) = PatternRule::new("whitespace", r"\s+", TokenClass::Text, 20) {
            grammar.add_pattern(rule);
        }
        if let Some(rule) = PatternRule::new("word", r"[\w-]+", TokenClass::Argument, 10) {
            grammar.add_pattern(rule);
        }
        if let Some(rule) =
            MultilineRule::with_escape("string", "\"", "\"", TokenClass::String, 1, '\\')
        {
            grammar.add_multiline(rule);
        }

        grammar
    }

    fn concat(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_round_trip() {
        let grammar = test_grammar();
        for line in ["echo hello 42 | wc", "  weird €€ input  ", "", "   "] {
            let result = grammar.tokenize_line(line, LineState::default());
            assert_eq!(concat(&result.tokens), line);
        }
    }

    #[test]
    fn test_command_vs_argument() {
        let grammar = test_grammar();
        let result = grammar.tokenize_line("echo hello", LineState::default());
        assert_eq!(result.tokens[0], Token::new(TokenClass::Command, "echo"));
        assert_eq!(result.tokens[2], Token::new(TokenClass::Argument, "hello"));
    }

    #[test]
    fn test_command_position_after_pipe() {
        let grammar = test_grammar();
        let result = grammar.tokenize_line("cat file | wc -l", LineState::default());
        let commands: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.class == TokenClass::Command)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(commands, ["cat", "wc"]);
    }

    #[test]
    fn test_empty_line_has_no_tokens() {
        let grammar = test_grammar();
        let result = grammar.tokenize_line("", LineState::default());
        assert!(result.tokens.is_empty());
        assert!(result.end_state.is_normal());
    }

    #[test]
    fn test_whitespace_line_single_token() {
        let grammar = test_grammar();
        let result = grammar.tokenize_line("   \t ", LineState::default());
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].class, TokenClass::Text);
        assert_eq!(result.tokens[0].text, "   \t ");
    }

    #[test]
    fn test_unterminated_string_carries_state() {
        let grammar = test_grammar();
        let result = grammar.tokenize_line("echo \"open", LineState::default());
        assert!(result.end_state.is_inside_multiline());

        let next = grammar.tokenize_line("still open", result.end_state);
        assert_eq!(next.tokens.len(), 1);
        assert_eq!(next.tokens[0].class, TokenClass::String);
        assert!(next.end_state.is_inside_multiline());

        let closed = grammar.tokenize_line("done\" now 5", next.end_state);
        assert_eq!(closed.tokens[0], Token::new(TokenClass::String, "done\""));
        assert!(closed.end_state.is_normal());
    }

    #[test]
    fn test_calls_are_independent() {
        let grammar = test_grammar();
        // Leave a string open...
        let open = grammar.tokenize_line("echo \"open", LineState::default());
        assert!(open.end_state.is_inside_multiline());
        // ...then a fresh document must not see that state.
        let lines = grammar.tokenize("echo hi");
        assert_eq!(lines[0][0].class, TokenClass::Command);
    }

    #[test]
    fn test_tokenize_line_counts() {
        let grammar = test_grammar();
        assert_eq!(grammar.tokenize("").len(), 0);
        assert_eq!(grammar.tokenize("one").len(), 1);
        assert_eq!(grammar.tokenize("one\n").len(), 1);
        assert_eq!(grammar.tokenize("one\n\n").len(), 2);
        assert_eq!(grammar.tokenize("one\ntwo\n\n").len(), 3);
    }

    #[test]
    fn test_no_rules_yields_plain_text() {
        let grammar = Grammar::new("empty");
        let result = grammar.tokenize_line("anything at all", LineState::default());
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(
            result.tokens[0],
            Token::new(TokenClass::Text, "anything at all")
        );
    }

    #[test]
    fn test_determinism() {
        let grammar = test_grammar();
        let a = grammar.tokenize("echo \"x\ny\" | wc\n42");
        let b = grammar.tokenize("echo \"x\ny\" | wc\n42");
        assert_eq!(a, b);
    }
}
