//! Operator metadata
//!
//!     SPDX expressions know four operators. Three of them (`OR`, `AND`, `WITH`) are infix
//!     keywords written between their operands. The fourth, `PLUS`, has no keyword: it is the
//!     trailing `+` on a license id ("this version or any later one") and only ever wraps a
//!     single license.
//!
//!     Precedence, from loosest to tightest binding:
//!
//!         OR < AND < WITH < PLUS
//!
//!     `PLUS` never takes part in the precedence comparisons of the shunting-yard pass. It is
//!     given the highest value so that renderers treat it like an atom.

use serde::Serialize;
use std::fmt;

/// The operators of the SPDX license-expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpdxOperator {
    Or = 0,
    And = 1,
    With = 2,
    Plus = 3,
}

struct OperatorInfo {
    keyword: Option<&'static str>,
    precedence: u8,
    arity: usize,
}

// Indexed by the operator discriminant.
const OPERATORS: [OperatorInfo; 4] = [
    OperatorInfo {
        keyword: Some("OR"),
        precedence: 1,
        arity: 2,
    },
    OperatorInfo {
        keyword: Some("AND"),
        precedence: 2,
        arity: 2,
    },
    OperatorInfo {
        keyword: Some("WITH"),
        precedence: 3,
        arity: 2,
    },
    OperatorInfo {
        keyword: None,
        precedence: 4,
        arity: 1,
    },
];

impl SpdxOperator {
    /// Operators that appear as keywords between two operands.
    pub const INFIX: [SpdxOperator; 3] = [SpdxOperator::Or, SpdxOperator::And, SpdxOperator::With];

    fn info(self) -> &'static OperatorInfo {
        &OPERATORS[self as usize]
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    /// The source keyword, or `None` for the synthesized `PLUS`.
    pub fn keyword(self) -> Option<&'static str> {
        self.info().keyword
    }

    /// Number of operands a node of this operator holds.
    pub fn arity(self) -> usize {
        self.info().arity
    }

    pub fn is_infix(self) -> bool {
        self.keyword().is_some()
    }

    /// Look up an infix operator by its exact (case-sensitive) keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::INFIX
            .into_iter()
            .find(|op| op.keyword() == Some(keyword))
    }
}

impl fmt::Display for SpdxOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("+"))
    }
}
