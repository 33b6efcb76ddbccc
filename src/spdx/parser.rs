//! Parser entry points
//!
//!     source --> tokenize --> to_postfix --> build_tree --> SpdxExpression
//!
//!     A single token skips the last two stages and becomes a leaf holding the token verbatim.
//!     That includes a trailing `+`: `"MIT+"` parses to `Leaf("MIT+")` while `"MIT+ OR BSD"` gives
//!     `PLUS(MIT)` for its left operand. [`ParseOptions::or_later_single_token`] opts into
//!     treating the lone token like any other atom. A lone parenthesis is never a leaf; it goes
//!     through the full pipeline and is rejected as unbalanced.
//!
//!     Parsing is a pure function of its input. Nothing is cached or shared between calls, so
//!     a [`Parser`] can be used from any number of threads at once.

use crate::spdx::ast::{ParseOutcome, SpdxExpression, INVALID};
use crate::spdx::building::{atom, build_tree};
use crate::spdx::error::ParseError;
use crate::spdx::lexing::tokenize;
use crate::spdx::parsing::{postfix_to_string, to_postfix};
use tracing::{debug, trace};

/// Knobs for the single-token fast path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Parse a lone `id+` as `PLUS(id)` instead of `Leaf("id+")`.
    pub or_later_single_token: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse `source`, reporting why it was rejected.
    pub fn try_parse(&self, source: &str) -> Result<SpdxExpression, ParseError> {
        let tokens = tokenize(source);

        if let [(token, _)] = tokens.as_slice() {
            if !token.is_paren() {
                return self.single_token(token.as_str());
            }
        }

        let postfix = to_postfix(&tokens)?;
        trace!(postfix = %postfix_to_string(&postfix), "converted to postfix");
        build_tree(postfix)
    }

    /// Parse `source`, collapsing every failure into [`INVALID`].
    pub fn parse(&self, source: &str) -> ParseOutcome {
        match self.try_parse(source) {
            Ok(expression) => ParseOutcome::Expression(expression),
            Err(error) => {
                debug!(%error, input = source, "rejected SPDX expression");
                INVALID
            }
        }
    }

    /// Syntactic validity check.
    pub fn is_valid(&self, source: &str) -> bool {
        self.parse(source).is_valid()
    }

    fn single_token(&self, text: &str) -> Result<SpdxExpression, ParseError> {
        if self.options.or_later_single_token {
            atom(text)
        } else {
            Ok(SpdxExpression::leaf(text))
        }
    }
}

/// Parse with default options.
pub fn parse(source: &str) -> ParseOutcome {
    Parser::new().parse(source)
}

/// Parse with default options, keeping the error.
pub fn try_parse(source: &str) -> Result<SpdxExpression, ParseError> {
    Parser::new().try_parse(source)
}

pub fn is_valid(source: &str) -> bool {
    Parser::new().is_valid(source)
}
