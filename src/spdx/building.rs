//! Tree building
//!
//! Folds a postfix sequence into a single [`SpdxExpression`]. Atoms become leaves, or `PLUS`
//! nodes when they end in `+`. Only one `+` is taken off; an id still ending in `+` is rejected. Infix operators pop their right operand first, then the left
//! one, since postfix places the right operand immediately before the operator.

use crate::spdx::ast::SpdxExpression;
use crate::spdx::error::ParseError;
use crate::spdx::parsing::Postfix;

/// Build the expression for a single atom token.
pub fn atom(text: &str) -> Result<SpdxExpression, ParseError> {
    match text.strip_suffix('+') {
        Some(id) if id.ends_with('+') => Err(ParseError::RepeatedPlus {
            atom: text.to_string(),
        }),
        Some(id) => Ok(SpdxExpression::or_later(id)),
        None => Ok(SpdxExpression::leaf(text)),
    }
}

/// Fold a postfix sequence into exactly one expression.
pub fn build_tree(postfix: Vec<Postfix<'_>>) -> Result<SpdxExpression, ParseError> {
    let mut stack: Vec<SpdxExpression> = Vec::new();

    for item in postfix {
        let expr = match item {
            Postfix::Atom(text) => atom(text)?,
            Postfix::Operator(operator, offset) => {
                let missing = || ParseError::MissingOperand { operator, offset };
                let rhs = stack.pop().ok_or_else(missing)?;
                let lhs = stack.pop().ok_or_else(missing)?;
                SpdxExpression::infix(operator, lhs, rhs)
            }
        };
        stack.push(expr);
    }

    let result = stack.pop().ok_or(ParseError::Empty)?;
    if !stack.is_empty() {
        return Err(ParseError::DanglingOperands {
            count: stack.len() + 1,
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spdx::operator::SpdxOperator;

    fn leaf(id: &str) -> SpdxExpression {
        SpdxExpression::leaf(id)
    }

    #[test]
    fn test_atom() {
        assert_eq!(atom("MIT"), Ok(leaf("MIT")));
        assert_eq!(atom("GPL-2.0+"), Ok(SpdxExpression::or_later("GPL-2.0")));
        assert_eq!(atom("+"), Ok(SpdxExpression::or_later("")));
    }

    #[test]
    fn test_atom_rejects_repeated_plus() {
        assert_eq!(
            atom("MIT++"),
            Err(ParseError::RepeatedPlus {
                atom: "MIT++".to_string()
            })
        );
        assert_eq!(
            build_tree(vec![
                Postfix::Atom("MIT++"),
                Postfix::Atom("X"),
                Postfix::Operator(SpdxOperator::Or, 6),
            ]),
            Err(ParseError::RepeatedPlus {
                atom: "MIT++".to_string()
            })
        );
    }

    #[test]
    fn test_rhs_is_popped_first() {
        let tree = build_tree(vec![
            Postfix::Atom("LGPL-2.1-only"),
            Postfix::Atom("CPE"),
            Postfix::Operator(SpdxOperator::With, 14),
        ])
        .unwrap();
        assert_eq!(tree, SpdxExpression::with(leaf("LGPL-2.1-only"), leaf("CPE")));
    }

    #[test]
    fn test_nested_fold() {
        // A B C AND OR
        let tree = build_tree(vec![
            Postfix::Atom("A"),
            Postfix::Atom("B+"),
            Postfix::Atom("C"),
            Postfix::Operator(SpdxOperator::And, 7),
            Postfix::Operator(SpdxOperator::Or, 2),
        ])
        .unwrap();
        assert_eq!(
            tree,
            SpdxExpression::or(
                leaf("A"),
                SpdxExpression::and(SpdxExpression::or_later("B"), leaf("C"))
            )
        );
    }

    #[test]
    fn test_missing_operand() {
        let err = build_tree(vec![
            Postfix::Atom("MIT"),
            Postfix::Operator(SpdxOperator::And, 4),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingOperand {
                operator: SpdxOperator::And,
                offset: 4
            }
        );
    }

    #[test]
    fn test_dangling_operands() {
        let err = build_tree(vec![Postfix::Atom("MIT"), Postfix::Atom("BSD")]).unwrap_err();
        assert_eq!(err, ParseError::DanglingOperands { count: 2 });
    }

    #[test]
    fn test_empty() {
        assert_eq!(build_tree(vec![]), Err(ParseError::Empty));
    }
}
