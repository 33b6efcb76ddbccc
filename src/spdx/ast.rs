//! Expression tree
//!
//!     A parsed SPDX expression is a closed sum type: either a [`SpdxExpression::Leaf`] holding a
//!     license or exception id verbatim, or a [`SpdxExpression::Operator`] node. Operator nodes
//!     keep their operands private and can only be built through constructors that enforce
//!     arity: `OR`, `AND` and `WITH` hold exactly two operands (left, right, in source order),
//!     `PLUS` holds exactly one leaf.
//!
//!     Parse failure is not a tree. It is the [`INVALID`] outcome, which compares unequal to
//!     every parsed expression and carries no payload.
//!
//!     Trees are plain owned values: no sharing, no interior mutability, no mutation API.

use crate::spdx::error::ParseError;
use crate::spdx::operator::SpdxOperator;
use serde::Serialize;
use std::fmt;

/// A parsed SPDX license expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpdxExpression {
    /// License or exception id, case preserved, not checked against any license list.
    Leaf(String),
    Operator(Operation),
}

/// An operator applied to its operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Operation {
    operator: SpdxOperator,
    operands: Vec<SpdxExpression>,
}

impl Operation {
    pub fn operator(&self) -> SpdxOperator {
        self.operator
    }

    pub fn operands(&self) -> &[SpdxExpression] {
        &self.operands
    }
}

impl SpdxExpression {
    pub fn leaf(id: impl Into<String>) -> Self {
        SpdxExpression::Leaf(id.into())
    }

    /// `lhs OR rhs`
    pub fn or(lhs: SpdxExpression, rhs: SpdxExpression) -> Self {
        Self::infix(SpdxOperator::Or, lhs, rhs)
    }

    /// `lhs AND rhs`
    pub fn and(lhs: SpdxExpression, rhs: SpdxExpression) -> Self {
        Self::infix(SpdxOperator::And, lhs, rhs)
    }

    /// `license WITH exception`
    pub fn with(license: SpdxExpression, exception: SpdxExpression) -> Self {
        Self::infix(SpdxOperator::With, license, exception)
    }

    /// `id+`, the license or any later version of it.
    pub fn or_later(id: impl Into<String>) -> Self {
        SpdxExpression::Operator(Operation {
            operator: SpdxOperator::Plus,
            operands: vec![SpdxExpression::leaf(id)],
        })
    }

    /// Only called with the three infix operators.
    pub(crate) fn infix(operator: SpdxOperator, lhs: SpdxExpression, rhs: SpdxExpression) -> Self {
        debug_assert!(operator.is_infix());
        SpdxExpression::Operator(Operation {
            operator,
            operands: vec![lhs, rhs],
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, SpdxExpression::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            SpdxExpression::Leaf(id) => Some(id.as_str()),
            SpdxExpression::Operator(_) => None,
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            SpdxExpression::Leaf(_) => None,
            SpdxExpression::Operator(operation) => Some(operation),
        }
    }

    pub fn operator(&self) -> Option<SpdxOperator> {
        self.as_operation().map(Operation::operator)
    }

    /// Child expressions; empty for leaves.
    pub fn operands(&self) -> &[SpdxExpression] {
        match self {
            SpdxExpression::Leaf(_) => &[],
            SpdxExpression::Operator(operation) => operation.operands(),
        }
    }

    /// How tightly this node binds when rendered. Leaves and `PLUS` nodes never need
    /// parentheses.
    pub(crate) fn binding(&self) -> u8 {
        match self {
            SpdxExpression::Leaf(_) => u8::MAX,
            SpdxExpression::Operator(operation) if !operation.operator.is_infix() => u8::MAX,
            SpdxExpression::Operator(operation) => operation.operator.precedence(),
        }
    }

    /// Every leaf id, left to right. Exception ids on the right of `WITH` are included.
    pub fn license_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            SpdxExpression::Leaf(id) => ids.push(id.as_str()),
            SpdxExpression::Operator(operation) => {
                for operand in &operation.operands {
                    operand.collect_ids(ids);
                }
            }
        }
    }
}

/// The result of [`parse`](crate::spdx::parser::parse): a tree, or [`INVALID`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseOutcome {
    Expression(SpdxExpression),
    Invalid,
}

/// The outcome of every input that cannot be parsed into a well-formed tree.
pub const INVALID: ParseOutcome = ParseOutcome::Invalid;

impl ParseOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseOutcome::Expression(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn expression(&self) -> Option<&SpdxExpression> {
        match self {
            ParseOutcome::Expression(expression) => Some(expression),
            ParseOutcome::Invalid => None,
        }
    }

    pub fn into_expression(self) -> Option<SpdxExpression> {
        match self {
            ParseOutcome::Expression(expression) => Some(expression),
            ParseOutcome::Invalid => None,
        }
    }
}

impl From<SpdxExpression> for ParseOutcome {
    fn from(expression: SpdxExpression) -> Self {
        ParseOutcome::Expression(expression)
    }
}

impl From<Result<SpdxExpression, ParseError>> for ParseOutcome {
    fn from(result: Result<SpdxExpression, ParseError>) -> Self {
        result.map_or(INVALID, ParseOutcome::Expression)
    }
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutcome::Expression(expression) => fmt::Display::fmt(expression, f),
            ParseOutcome::Invalid => f.write_str("INVALID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> SpdxExpression {
        SpdxExpression::leaf(id)
    }

    #[test]
    fn test_constructors_enforce_arity() {
        let and = SpdxExpression::and(leaf("MIT"), leaf("BSD-3-Clause"));
        assert_eq!(and.operator(), Some(SpdxOperator::And));
        assert_eq!(and.operands(), &[leaf("MIT"), leaf("BSD-3-Clause")]);

        let plus = SpdxExpression::or_later("GPL-2.0");
        assert_eq!(plus.operator(), Some(SpdxOperator::Plus));
        assert_eq!(plus.operands(), &[leaf("GPL-2.0")]);
    }

    #[test]
    fn test_leaf_accessors() {
        let mit = leaf("MIT");
        assert!(mit.is_leaf());
        assert_eq!(mit.as_leaf(), Some("MIT"));
        assert_eq!(mit.operator(), None);
        assert!(mit.operands().is_empty());
    }

    #[test]
    fn test_license_ids_in_source_order() {
        let expr = SpdxExpression::or(
            SpdxExpression::with(SpdxExpression::or_later("GPL-2.0"), leaf("Classpath-exception-2.0")),
            leaf("MIT"),
        );
        assert_eq!(
            expr.license_ids(),
            vec!["GPL-2.0", "Classpath-exception-2.0", "MIT"]
        );
    }

    #[test]
    fn test_invalid_is_distinct_from_trees() {
        assert_ne!(ParseOutcome::from(leaf("INVALID")), INVALID);
        assert!(INVALID.is_invalid());
        assert_eq!(INVALID.expression(), None);
        assert_eq!(INVALID.to_string(), "INVALID");
    }

    #[test]
    fn test_wrong_arity_fails_to_render() {
        let broken = SpdxExpression::Operator(Operation {
            operator: SpdxOperator::And,
            operands: vec![leaf("MIT")],
        });
        let mut out = String::new();
        assert!(fmt::write(&mut out, format_args!("{}", broken)).is_err());

        let ternary_or = SpdxExpression::Operator(Operation {
            operator: SpdxOperator::Or,
            operands: vec![leaf("MIT"), leaf("ISC"), leaf("BSD")],
        });
        assert!(fmt::write(&mut String::new(), format_args!("{}", ternary_or)).is_err());
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: ParseOutcome = Ok(leaf("MIT")).into();
        assert_eq!(ok.into_expression(), Some(leaf("MIT")));

        let err: ParseOutcome = Err(ParseError::Empty).into();
        assert_eq!(err, INVALID);
    }

    #[test]
    fn test_serialize() {
        let expr = SpdxExpression::and(leaf("MIT"), SpdxExpression::or_later("GPL-2.0"));
        assert_eq!(
            serde_json::to_string(&expr).unwrap(),
            r#"{"operator":{"operator":"AND","operands":[{"leaf":"MIT"},{"operator":{"operator":"PLUS","operands":[{"leaf":"GPL-2.0"}]}}]}}"#
        );
        assert_eq!(serde_json::to_string(&INVALID).unwrap(), r#""invalid""#);
    }
}
