//! Plain text grammar
//!
//! No rules: every line becomes a single `Text` token. This is the
//! documented fallback when a requested language is unsupported.

use crate::grammar::Grammar;

/// Create the plain text grammar
pub fn plain_grammar() -> Grammar {
    let mut grammar = Grammar::new("plain");
    grammar.add_alias("text");
    grammar.add_alias("txt");
    grammar
}
