//! Parse errors.
//!
//! [`parse`](crate::spdx::parser::parse) folds all of these into the single
//! [`INVALID`](crate::spdx::ast::INVALID) outcome. [`try_parse`](crate::spdx::parser::try_parse)
//! hands them to callers that want to say what went wrong.

use crate::spdx::operator::SpdxOperator;
use thiserror::Error;

/// Reasons an input is not a well-formed SPDX expression. Offsets are byte offsets into the
/// input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,
    #[error("unmatched ')' at byte {offset}")]
    UnmatchedClose { offset: usize },
    #[error("unmatched '(' at byte {offset}")]
    UnmatchedOpen { offset: usize },
    #[error("operator {operator} at byte {offset} is missing an operand")]
    MissingOperand {
        operator: SpdxOperator,
        offset: usize,
    },
    #[error("{count} operands are not joined by an operator")]
    DanglingOperands { count: usize },
    #[error("'{atom}' has more than one trailing '+'")]
    RepeatedPlus { atom: String },
}

impl ParseError {
    /// Whether the error comes from unbalanced parentheses.
    pub fn is_unbalanced(&self) -> bool {
        matches!(
            self,
            ParseError::UnmatchedClose { .. } | ParseError::UnmatchedOpen { .. }
        )
    }
}
