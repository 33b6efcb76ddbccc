//! # spdx-expr
//!
//! A parser for SPDX license expressions such as
//! `(Apache-2.0 OR MIT) AND GPL-2.0-only WITH Classpath-exception-2.0`.
//!
//! The result is either an [`SpdxExpression`] tree or the [`INVALID`] outcome:
//!
//!     use spdx_expr::{parse, INVALID};
//!
//!     let tree = parse("MIT AND (Apache-2.0 OR BSD-3-Clause)");
//!     assert!(tree.is_valid());
//!     assert_eq!(parse("MIT (OR BSD-3-Clause"), INVALID);
//!
//! See the [spdx] module for the pipeline and precedence rules.

pub mod spdx;

pub use spdx::ast::{Operation, ParseOutcome, SpdxExpression, INVALID};
pub use spdx::error::ParseError;
pub use spdx::formats::OutputFormat;
pub use spdx::operator::SpdxOperator;
pub use spdx::parser::{is_valid, parse, try_parse, ParseOptions, Parser};
