//! Bash grammar
//!
//! Tokenizes shell transcripts: the first word of a command is
//! classified `Command`, later words become flags and arguments.
//! Command position returns after control operators (|, &&, ;) and
//! after control keywords, so pipelines classify every stage.

use crate::grammar::rules::{MultilineRule, PatternRule};
use crate::grammar::Grammar;
use crate::token::TokenClass;

/// Create the bash grammar
pub fn bash_grammar() -> Grammar {
    let mut grammar = Grammar::new("bash");
    grammar.add_alias("sh");
    grammar.add_alias("shell");
    grammar.add_alias("zsh");
    grammar.add_alias("console");

    // Multiline rules (state IDs 1-3)

    // Double-quoted strings (backslash escapes the closing quote)
    if let Some(rule) = MultilineRule::with_escape("double_string", "\"", "\"", TokenClass::String, 1, '\\') {
        grammar.add_multiline(rule);
    }
    // Single-quoted strings (no escapes)
    if let Some(rule) = MultilineRule::new("single_string", "'", "'", TokenClass::String, 2) {
        grammar.add_multiline(rule);
    }
    // Here-documents with the conventional EOF delimiter
    if let Some(rule) = MultilineRule::new("heredoc", r#"<<-?\s*['"]?EOF['"]?"#, r"^\s*EOF\b", TokenClass::String, 3) {
        grammar.add_multiline(rule);
    }

    // Single-line patterns (priority 0-100, higher = first)

    // Comments run to end of line
    if let Some(rule) = PatternRule::new("comment", r"#.*$", TokenClass::Comment, 100) {
        grammar.add_pattern(rule);
    }

    // VAR=value assignments, only in command position
    if let Some(rule) = PatternRule::command_position(
        "assignment",
        r"[A-Za-z_][A-Za-z0-9_]*=[^\s;|&]*",
        TokenClass::Variable,
        95,
    ) {
        grammar.add_pattern(rule);
    }

    // Variable references: ${VAR}, $VAR, $1, $?, $@, ...
    if let Some(rule) = PatternRule::new(
        "variable",
        r"\$\{[^}]*\}|\$[A-Za-z_][A-Za-z0-9_]*|\$[0-9@#?*!$]",
        TokenClass::Variable,
        90,
    ) {
        grammar.add_pattern(rule);
    }

    // Short and long flags
    if let Some(rule) = PatternRule::new("flag", r"--?[A-Za-z0-9][A-Za-z0-9_-]*", TokenClass::Flag, 85) {
        grammar.add_pattern(rule);
    }

    // Control keywords, only in command position
    let keywords = r"(if|then|elif|else|fi|for|while|until|do|done|case|esac|function)\b";
    if let Some(rule) = PatternRule::command_position("keyword", keywords, TokenClass::Keyword, 80) {
        grammar.add_pattern(rule);
    }

    // Command names (bare words and paths in command position)
    if let Some(rule) = PatternRule::command_position(
        "command",
        r"[A-Za-z0-9_./][A-Za-z0-9_.+/-]*",
        TokenClass::Command,
        75,
    ) {
        grammar.add_pattern(rule);
    }

    // Numbers
    if let Some(rule) = PatternRule::new("number", r"\d+(?:\.\d+)?\b", TokenClass::Number, 60) {
        grammar.add_pattern(rule);
    }

    // Shell operators and punctuation
    if let Some(rule) = PatternRule::new("operator", r"[|&;<>(){}\[\]=`$]+", TokenClass::Operator, 50) {
        grammar.add_pattern(rule);
    }

    // Whitespace between words
    if let Some(rule) = PatternRule::new("whitespace", r"\s+", TokenClass::Text, 20) {
        grammar.add_pattern(rule);
    }

    // Anything else word-shaped is an operand
    if let Some(rule) = PatternRule::new(
        "word",
        r#"[^\s|&;<>(){}\[\]=`"'$]+"#,
        TokenClass::Argument,
        10,
    ) {
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
    fn test_comment_line() {
        let grammar = bash_grammar();
        let result = grammar.tokenize_line("# Install Migraine", LineState::default());
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].class, TokenClass::Comment);
        assert_eq!(result.tokens[0].text, "# Install Migraine");
    }

    #[test]
    fn test_command_and_arguments() {
        let grammar = bash_grammar();
        let result = grammar.tokenize_line("brew install migraine", LineState::default());
        let classes: Vec<_> = result.tokens.iter().map(|t| t.class).collect();
        assert_eq!(
            classes,
            [
                TokenClass::Command,
                TokenClass::Text,
                TokenClass::Argument,
                TokenClass::Text,
                TokenClass::Argument,
            ]
        );
        assert_eq!(concat(&result.tokens), "brew install migraine");
    }

    #[test]
    fn test_flags_and_assignment_argument() {
        let grammar = bash_grammar();
        let line = "migraine run my_workflow -v PROJECT_PATH=/path/to/project";
        let result = grammar.tokenize_line(line, LineState::default());

        assert_eq!(result.tokens[0], Token::new(TokenClass::Command, "migraine"));
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::Flag && t.text == "-v"));
        // Off command position, PROJECT_PATH=... is an operand, not an assignment
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::Argument && t.text == "PROJECT_PATH"));
        assert_eq!(concat(&result.tokens), line);
    }

    #[test]
    fn test_assignment_at_command_position() {
        let grammar = bash_grammar();
        let result = grammar.tokenize_line("PROJECT_PATH=/tmp migraine run", LineState::default());
        assert_eq!(
            result.tokens[0],
            Token::new(TokenClass::Variable, "PROJECT_PATH=/tmp")
        );
        // The command after the assignment prefix is still a command
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::Command && t.text == "migraine"));
    }

    #[test]
    fn test_pipeline_commands() {
        let grammar = bash_grammar();
        let result = grammar.tokenize_line("migraine list | grep deploy && echo ok", LineState::default());
        let commands: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.class == TokenClass::Command)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(commands, ["migraine", "grep", "echo"]);
    }

    #[test]
    fn test_variable_reference() {
        let grammar = bash_grammar();
        let result = grammar.tokenize_line("echo $HOME ${PATH} $1", LineState::default());
        let vars: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.class == TokenClass::Variable)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(vars, ["$HOME", "${PATH}", "$1"]);
    }

    #[test]
    fn test_keywords() {
        let grammar = bash_grammar();
        let result = grammar.tokenize_line("if true; then echo yes; fi", LineState::default());
        let keywords: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.class == TokenClass::Keyword)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(keywords, ["if", "then", "fi"]);
    }

    #[test]
    fn test_double_quoted_string() {
        let grammar = bash_grammar();
        let result = grammar.tokenize_line(r#"echo "hello world" done"#, LineState::default());
        assert!(result
            .tokens
            .iter()
            .any(|t| t.class == TokenClass::String && t.text == "\"hello world\""));
        assert_eq!(concat(&result.tokens), r#"echo "hello world" done"#);
    }

    #[test]
    fn test_heredoc_spans_lines() {
        let grammar = bash_grammar();
        let lines = grammar.tokenize("cat <<EOF\nsome text\nEOF");
        assert_eq!(lines.len(), 3);
        // Body line is entirely inside the here-document
        assert_eq!(lines[1].len(), 1);
        assert_eq!(lines[1][0].class, TokenClass::String);
        // The delimiter line closes it
        assert_eq!(lines[2][0].class, TokenClass::String);
    }

    #[test]
    fn test_round_trip_transcript() {
        let grammar = bash_grammar();
        let source = "# Install Migraine\nbrew install migraine\n\n# Run a workflow with variables\nmigraine run my_workflow -v PROJECT_PATH=/path/to/project";
        let lines = grammar.tokenize(source);
        assert_eq!(lines.len(), 5);
        for (tokens, line) in lines.iter().zip(source.lines()) {
            assert_eq!(concat(tokens), line);
        }
        // The blank line carries no tokens
        assert!(lines[2].is_empty());
    }
}
