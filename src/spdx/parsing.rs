//! Shunting-yard conversion to postfix
//!
//!     Reorders the infix token list into postfix (reverse Polish) order so that the tree
//!     builder can fold it with a single stack. Parentheses are consumed here and never reach
//!     the output.
//!
//!     An incoming operator pops every stacked operator that binds strictly tighter than itself.
//!     Operators of equal precedence do not pop each other, so `A OR B OR C` comes out as
//!     `A B C OR OR` and groups to the right.
//!
//!     The only failures at this stage are unbalanced parentheses:
//!     - a `)` with no `(` left on the stack,
//!     - a `(` still on the stack once the input is exhausted.

use crate::spdx::error::ParseError;
use crate::spdx::operator::SpdxOperator;
use crate::spdx::token::Token;
use std::fmt;

/// One item of the postfix sequence. Operators keep the byte offset of their keyword so the
/// tree builder can report where an operand went missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Postfix<'a> {
    Atom(&'a str),
    Operator(SpdxOperator, usize),
}

impl fmt::Display for Postfix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postfix::Atom(text) => f.write_str(text),
            Postfix::Operator(op, _) => write!(f, "{}", op),
        }
    }
}

/// Render a postfix sequence as space-separated text.
pub fn postfix_to_string(items: &[Postfix<'_>]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// Entries of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    OpenParen(usize),
    Operator(SpdxOperator, usize),
}

/// Convert infix tokens into postfix order.
pub fn to_postfix<'a>(tokens: &[(Token<'a>, logos::Span)]) -> Result<Vec<Postfix<'a>>, ParseError> {
    let mut operators: Vec<Pending> = Vec::new();
    let mut output: Vec<Postfix<'a>> = Vec::with_capacity(tokens.len());

    for (token, span) in tokens {
        match *token {
            Token::Atom(text) => output.push(Postfix::Atom(text)),
            Token::Keyword(op) => {
                while let Some(&Pending::Operator(top, offset)) = operators.last() {
                    if top.precedence() <= op.precedence() {
                        break;
                    }
                    operators.pop();
                    output.push(Postfix::Operator(top, offset));
                }
                operators.push(Pending::Operator(op, span.start));
            }
            Token::OpenParen => operators.push(Pending::OpenParen(span.start)),
            Token::CloseParen => loop {
                match operators.pop() {
                    Some(Pending::OpenParen(_)) => break,
                    Some(Pending::Operator(op, offset)) => output.push(Postfix::Operator(op, offset)),
                    None => return Err(ParseError::UnmatchedClose { offset: span.start }),
                }
            },
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Operator(op, offset) => output.push(Postfix::Operator(op, offset)),
            Pending::OpenParen(offset) => return Err(ParseError::UnmatchedOpen { offset }),
        }
    }

    Ok(output)
}
