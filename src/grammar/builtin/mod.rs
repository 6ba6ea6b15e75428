//! Built-in language grammars
//!
//! This module provides tokenization grammars for the languages
//! supported out of the box.

mod bash;
mod plain;
mod toml_lang;

use super::Grammar;

pub use plain::plain_grammar;

/// Get all built-in grammars
pub fn all_grammars() -> Vec<Grammar> {
    vec![
        bash::bash_grammar(),
        toml_lang::toml_grammar(),
        plain::plain_grammar(),
    ]
}
