//! Tokenization
//!
//! Turns a raw expression string into the ordered list of tokens consumed by the
//! shunting-yard pass. This is the entry point where source strings become token streams.
//!
//! Tokenization never fails: every non-whitespace character belongs to some token, and
//! empty or whitespace-only input simply yields no tokens.

use crate::spdx::token::Token;
use logos::Logos;

/// Tokenize an expression, pairing every token with its byte span in `source`.
pub fn tokenize(source: &str) -> Vec<(Token<'_>, logos::Span)> {
    Token::lexer(source)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}
