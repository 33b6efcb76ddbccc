//! Property-based tests for the parser.
//!
//! Well-formed trees are generated directly, rendered to text and parsed back. Arbitrary
//! strings built from SPDX-ish fragments check that parsing never panics and is a pure
//! function of its input.

use proptest::prelude::*;
use spdx_expr::{parse, ParseOptions, Parser, SpdxExpression, INVALID};

/// License-id-like atoms that are never keywords and never end in `+`.
fn license_id_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9.-]{0,12}".prop_filter("keywords are not license ids", |id| {
        !matches!(id.as_str(), "OR" | "AND" | "WITH")
    })
}

fn leaf_strategy() -> impl Strategy<Value = SpdxExpression> {
    prop_oneof![
        3 => license_id_strategy().prop_map(SpdxExpression::leaf),
        1 => license_id_strategy().prop_map(SpdxExpression::or_later),
    ]
}

fn expression_strategy() -> impl Strategy<Value = SpdxExpression> {
    leaf_strategy().prop_recursive(5, 48, 2, |inner| {
        (0u8..3, inner.clone(), inner).prop_map(|(op, lhs, rhs)| match op {
            0 => SpdxExpression::or(lhs, rhs),
            1 => SpdxExpression::and(lhs, rhs),
            _ => SpdxExpression::with(lhs, rhs),
        })
    })
}

/// Inputs mixing ids, keywords, parens and stray whitespace, mostly malformed.
fn fragment_soup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            license_id_strategy(),
            Just("OR".to_string()),
            Just("AND".to_string()),
            Just("WITH".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("+".to_string()),
            "[ \t\n]{1,3}",
            "\\PC{1,4}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn test_rendered_tree_parses_back(expr in expression_strategy()) {
        let text = expr.to_string();
        let reparsed = parse(&text).into_expression();
        prop_assert_eq!(reparsed, Some(expr), "rendered as {:?}", text);
    }

    #[test]
    fn test_rendered_tree_parses_back_with_or_later_option(expr in expression_strategy()) {
        let parser = Parser::new().with_options(ParseOptions { or_later_single_token: true });
        let text = expr.to_string();
        prop_assert_eq!(parser.parse(&text).into_expression(), Some(expr));
    }

    #[test]
    fn test_rendering_is_stable(expr in expression_strategy()) {
        let once = expr.to_string();
        if let Some(reparsed) = parse(&once).into_expression() {
            prop_assert_eq!(reparsed.to_string(), once);
        }
    }

    #[test]
    fn test_parse_never_panics_and_is_deterministic(input in fragment_soup_strategy()) {
        let first = parse(&input);
        let second = parse(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unbalanced_parens_are_invalid(expr in expression_strategy(), extra in 1usize..4) {
        let text = format!("{}{}", "(".repeat(extra), expr);
        prop_assert_eq!(parse(&text), INVALID);
    }

    #[test]
    fn test_trees_keep_operator_arity(input in fragment_soup_strategy()) {
        fn check(expr: &SpdxExpression) -> bool {
            match expr.operator() {
                None => true,
                Some(op) => expr.operands().len() == op.arity() && expr.operands().iter().all(check),
            }
        }
        if let Some(expr) = parse(&input).into_expression() {
            prop_assert!(check(&expr));
        }
    }
}
