//! SPDX license-expression parsing
//!
//! Pipeline
//!
//!     source string --> [lexing] --> tokens --> [parsing] --> postfix --> [building] --> tree
//!
//!     1. Tokenization with a logos lexer: parentheses, the `OR`/`AND`/`WITH` keywords, and
//!        atoms (license ids, possibly ending in `+`). See [token] and [lexing].
//!     2. Shunting-yard conversion of the token list into postfix order, where unbalanced
//!        parentheses are detected. See [parsing].
//!     3. A stack fold of the postfix list into an [ast::SpdxExpression], which is also where a
//!        trailing `+` becomes a `PLUS` node. See [building].
//!
//!     [parser] ties the stages together. Failures are values: [parser::parse] returns
//!     [ast::INVALID] and [parser::try_parse] returns a [error::ParseError].
//!
//! Precedence
//!
//!     WITH binds tighter than AND, which binds tighter than OR. Parentheses override it.
//!
//!         MIT OR BSD-3-Clause AND ISC        =>  OR(MIT, AND(BSD-3-Clause, ISC))
//!         GPL-2.0 WITH CPE AND MIT           =>  AND(WITH(GPL-2.0, CPE), MIT)
//!
//! What this module does not do
//!
//!     Leaf ids are not checked against the SPDX license list, and nothing evaluates or
//!     simplifies the boolean structure of a tree.

pub mod ast;
pub mod building;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod operator;
pub mod parser;
pub mod parsing;
pub mod token;
