//! TOML grammar
//!
//! Covers the subset that shows up in documentation samples: tables,
//! keys, strings, numbers, dates, booleans and comments.

use crate::grammar::rules::{MultilineRule, PatternRule};
use crate::grammar::Grammar;
use crate::token::TokenClass;

/// Create the TOML grammar
pub fn toml_grammar() -> Grammar {
    let mut grammar = Grammar::new("toml");

    // Multiline rules (state IDs 1-4)
    if let Some(rule) = MultilineRule::new("multiline_basic", r#"""""#, r#"""""#, TokenClass::String, 1) {
        grammar.add_multiline(rule);
    }
    if let Some(rule) = MultilineRule::new("multiline_literal", "'''", "'''", TokenClass::String, 2) {
        grammar.add_multiline(rule);
    }
    if let Some(rule) = MultilineRule::with_escape("basic_string", "\"", "\"", TokenClass::String, 3, '\\') {
        grammar.add_multiline(rule);
    }
    if let Some(rule) = MultilineRule::new("literal_string", "'", "'", TokenClass::String, 4) {
        grammar.add_multiline(rule);
    }

    // Single-line patterns

    if let Some(rule) = PatternRule::new("comment", r"#.*$", TokenClass::Comment, 100) {
        grammar.add_pattern(rule);
    }

    // [table] and [[array-of-tables]] headers
    if let Some(rule) =
        PatternRule::command_position("table", r"\[\[?[^\]]+\]\]?", TokenClass::Property, 95)
    {
        grammar.add_pattern(rule);
    }

    // Bare keys at the start of a line (the = follows separately)
    if let Some(rule) = PatternRule::command_position(
        "key",
        r"[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*",
        TokenClass::Property,
        90,
    ) {
        grammar.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("boolean", r"\b(true|false)\b", TokenClass::Constant, 80) {
        grammar.add_pattern(rule);
    }

    // Dates and times
    if let Some(rule) = PatternRule::new(
        "datetime",
        r"\d{4}-\d{2}-\d{2}(?:[Tt ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:[Zz]|[+-]\d{2}:\d{2})?)?",
        TokenClass::Number,
        75,
    ) {
        grammar.add_pattern(rule);
    }

    // Numbers
    if let Some(rule) = PatternRule::new("hex", r"\b0x[0-9a-fA-F_]+\b", TokenClass::Number, 65) {
        grammar.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("float", r"[+-]?\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?\b", TokenClass::Number, 64) {
        grammar.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("integer", r"[+-]?\d[\d_]*\b", TokenClass::Number, 63) {
        grammar.add_pattern(rule);
    }

    // Assignment and structural punctuation
    if let Some(rule) = PatternRule::new("operator", r"[=\[\]{},.]+", TokenClass::Operator, 50) {
        grammar.add_pattern(rule);
    }

    if let Some(rule) = PatternRule::new("whitespace", r"\s+", TokenClass::Text, 20) {
        grammar.add_pattern(rule);
    }

    grammar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::rules::LineState;
    use crate::token::Token;

    fn concat(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_key_value() {
        let grammar = toml_grammar();
        let line = r#"name = "glint""#;
        let result = grammar.tokenize_line(line, LineState::default());
        assert_eq!(result.tokens[0], Token::new(TokenClass::Property, "name"));
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::Operator && t.text == "="));
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::String && t.text == "\"glint\""));
        assert_eq!(concat(&result.tokens), line);
    }

    #[test]
    fn test_table_header() {
        let grammar = toml_grammar();
        let result = grammar.tokenize_line("[dependencies]", LineState::default());
        assert_eq!(result.tokens[0], Token::new(TokenClass::Property, "[dependencies]"));
    }

    #[test]
    fn test_booleans_and_numbers() {
        let grammar = toml_grammar();
        let result = grammar.tokenize_line("enabled = true # on", LineState::default());
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::Constant && t.text == "true"));
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::Comment && t.text == "# on"));

        let result = grammar.tokenize_line("port = 8080", LineState::default());
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::Number && t.text == "8080"));
    }

    #[test]
    fn test_multiline_string() {
        let grammar = toml_grammar();
        let lines = grammar.tokenize("text = \"\"\"\nraw body\n\"\"\"");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1][0].class, TokenClass::String);
    }

    #[test]
    fn test_round_trip() {
        let grammar = toml_grammar();
        let source = "[package]\nname = \"glint\"\nedition = 2021\n\n# deps\n[dependencies]";
        for (tokens, line) in grammar.tokenize(source).iter().zip(source.lines()) {
            assert_eq!(concat(tokens), line);
        }
    }
}
