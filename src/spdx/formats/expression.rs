//! Canonical expression text
//!
//! Renders a tree back into SPDX syntax with the fewest parentheses that still parse back to
//! the same tree. A child is wrapped when it binds looser than its parent, and a left child is
//! also wrapped when it binds equally, because equal-precedence chains group to the right.
//!
//! A `PLUS` node at the root is written as `(id+)`. Bare `id+` is a single token, and a single
//! token parses to a verbatim leaf.

use crate::spdx::ast::SpdxExpression;
use crate::spdx::operator::SpdxOperator;
use std::fmt;

impl fmt::Display for SpdxExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator() == Some(SpdxOperator::Plus) {
            f.write_str("(")?;
            write_node(f, self)?;
            f.write_str(")")
        } else {
            write_node(f, self)
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, expr: &SpdxExpression) -> fmt::Result {
    let operation = match expr {
        SpdxExpression::Leaf(id) => return f.write_str(id),
        SpdxExpression::Operator(operation) => operation,
    };

    match (operation.operator(), operation.operands()) {
        (SpdxOperator::Plus, [license]) => {
            write_node(f, license)?;
            f.write_str("+")
        }
        (operator, [lhs, rhs]) if operator.is_infix() => {
            let precedence = operator.precedence();
            write_operand(f, lhs, lhs.binding() <= precedence)?;
            write!(f, " {} ", operator)?;
            write_operand(f, rhs, rhs.binding() < precedence)
        }
        // arity is fixed by the constructors
        _ => Err(fmt::Error),
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &SpdxExpression, wrap: bool) -> fmt::Result {
    if wrap {
        f.write_str("(")?;
        write_node(f, operand)?;
        f.write_str(")")
    } else {
        write_node(f, operand)
    }
}
