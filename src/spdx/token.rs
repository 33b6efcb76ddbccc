//! Token definitions for SPDX license expressions
//!
//! The lexer only needs to tell four things apart: the two parentheses, the infix operator
//! keywords and everything else. Anything that is not whitespace and not a parenthesis is an
//! atom (a license or exception id, possibly with a trailing `+`). Parentheses always end an
//! atom, so `(MIT)AND(GPL)` lexes the same as `( MIT ) AND ( GPL )`.
//!
//! Keywords are exact and case-sensitive. Because logos picks the longest match, `ORACLE` is
//! an atom while `OR` is a keyword.

use crate::spdx::operator::SpdxOperator;
use logos::{Lexer, Logos};
use std::fmt;

/// All tokens of an SPDX expression. Atoms borrow from the source string.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token<'a> {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    /// `OR`, `AND` or `WITH`
    #[token("OR", keyword)]
    #[token("AND", keyword)]
    #[token("WITH", keyword)]
    Keyword(SpdxOperator),

    /// License or exception id, verbatim
    #[regex(r"[^\s()]+", |lex| lex.slice())]
    Atom(&'a str),
}

fn keyword<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<SpdxOperator> {
    SpdxOperator::from_keyword(lex.slice())
}

impl<'a> Token<'a> {
    pub fn is_paren(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }

    /// The source text this token was lexed from.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Keyword(op) => op.keyword().unwrap_or_default(),
            Token::Atom(text) => text,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
