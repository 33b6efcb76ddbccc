//! Treeviz formatter for expression trees
//!
//! One line per node, with the nesting drawn as box connectors:
//!
//!     OR
//!     ├─ Apache-2.0
//!     └─ AND
//!        ├─ MIT
//!        └─ +
//!           └─ GPL-2.0
//!
//! Operators are labeled with their keyword (`+` for or-later), leaves with their id.

use crate::spdx::ast::SpdxExpression;

fn label(expr: &SpdxExpression) -> String {
    match expr {
        SpdxExpression::Leaf(id) => id.clone(),
        SpdxExpression::Operator(operation) => operation.operator().to_string(),
    }
}

fn format_children(expr: &SpdxExpression, prefix: &str, output: &mut String) {
    let children = expr.operands();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{}{} {}\n", prefix, connector, label(child)));

        let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
        format_children(child, &child_prefix, output);
    }
}

/// Render the tree, one node per line, each line newline-terminated.
pub fn to_treeviz_str(expr: &SpdxExpression) -> String {
    let mut output = label(expr);
    output.push('\n');
    format_children(expr, "", &mut output);
    output
}
