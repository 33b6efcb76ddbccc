//! Output formats
//!
//! A parsed tree can be written out as:
//!
//!     expression   Canonical SPDX text; parsing it again yields the same tree.
//!     json         Compact JSON of the tree (serde).
//!     json-pretty  Indented JSON of the tree.
//!     treeviz      One line per node with box connectors.

pub mod expression;
pub mod treeviz;

pub use treeviz::to_treeviz_str;

use crate::spdx::ast::SpdxExpression;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Expression,
    Json,
    JsonPretty,
    Treeviz,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Expression,
        OutputFormat::Json,
        OutputFormat::JsonPretty,
        OutputFormat::Treeviz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Expression => "expression",
            OutputFormat::Json => "json",
            OutputFormat::JsonPretty => "json-pretty",
            OutputFormat::Treeviz => "treeviz",
        }
    }

    /// Render `expr`. Only the JSON formats can fail.
    pub fn render(self, expr: &SpdxExpression) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Expression => Ok(expr.to_string()),
            OutputFormat::Json => serde_json::to_string(expr),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(expr),
            OutputFormat::Treeviz => Ok(to_treeviz_str(expr)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| format!("unknown output format '{}'", s))
    }
}
