//! xqsyntax: error-tolerant XPath and XQuery syntax analysis.
//!
//! Parsing never fails. Every input, including invalid text, produces a lossless
//! syntax tree whose text is exactly the input, plus diagnostics for the parts
//! that could not be parsed.
//!
//! # Example
//!
//! ```
//! use xqsyntax_lib::{DialectConfig, Version, parse};
//!
//! let source = "for $x in 1 to 3 return $x * 2";
//! let parse = parse(source, DialectConfig::xpath(Version::V3_1));
//! assert!(parse.errors().is_empty());
//! assert_eq!(parse.syntax().text().to_string(), source);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod delimit;
pub mod dialect;
pub mod diagnostics;
pub mod parser;
pub mod value_template;

#[cfg(test)]
mod delimit_tests;
#[cfg(test)]
mod dialect_tests;
#[cfg(test)]
mod value_template_tests;

pub use delimit::{SpaceRequirement, space_requirement, space_requirement_by_name};
pub use dialect::{DialectConfig, DialectParseError, Features, Language, Vendor, Version};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, ParseError};
pub use parser::{Parse, SyntaxKind, SyntaxNode, SyntaxToken, TreePrinter, parse, parse_with_options};

/// Default bound on nested productions.
pub const DEFAULT_RECURSION_LIMIT: u32 = 64;

/// Knobs for one parse beyond the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Nested productions allowed before the rest of the input becomes one `Error` node.
    pub recursion_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }
}

/// Errors from host-facing operations. Parsing itself reports diagnostics instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid dialect: {0}")]
    InvalidDialect(#[from] DialectParseError),

    /// A name that is not a token `SyntaxKind` variant.
    #[error("unknown token kind `{0}`")]
    UnknownTokenKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a dialect name such as `xquery-3.1` or `xpath-4.0+saxon-10`.
pub fn dialect_from_name(name: &str) -> Result<DialectConfig> {
    Ok(name.parse::<DialectConfig>()?)
}
