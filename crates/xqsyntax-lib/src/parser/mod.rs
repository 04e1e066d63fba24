//! Parser infrastructure for XPath and XQuery.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only when building tree nodes
//! - Event buffer: the grammar records start/token/finish events, a sink builds the tree
//! - Markers: `precede` wraps finished nodes for left-associative operators, `rollback`
//!   undoes a speculative parse
//! - Explicit recovery sets: per-production sets decide where skipping stops
//!
//! # Recovery Strategy
//!
//! The parser never fails; it always produces a tree covering the whole input.
//!
//! 1. Missing tokens and operands become zero-width `Error` nodes
//! 2. Unexpected tokens are wrapped in `Error` nodes, then the parser resynchronizes
//! 3. Syntax the dialect lacks is never attempted; it ends up in `Error` nodes
//! 4. Past the recursion limit, the remaining input goes into a single `Error` node

pub mod cst;
pub mod lexer;
pub mod printer;

mod core;
mod event;
mod grammar;
mod invariants;
mod marker;
mod recovery;

#[cfg(test)]
mod tests;

pub use core::Parser;
pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};
pub use printer::TreePrinter;

use rowan::{GreenNode, TextRange};
use tracing::debug_span;

use crate::ParseOptions;
use crate::dialect::DialectConfig;
use crate::diagnostics::{Diagnostics, ParseError};
use lexer::lex;

/// Parse result: the green tree plus every lexical and syntax diagnostic.
///
/// The tree is always complete; `Error` nodes mark recovery points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    green: GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Diagnostics ordered by position.
    pub fn errors(&self) -> &[ParseError] {
        self.diagnostics.as_slice()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (SyntaxNode, Vec<ParseError>) {
        (SyntaxNode::new_root(self.green), self.diagnostics.into_vec())
    }

    /// The diagnostic reported for an `Error` node at `range`.
    ///
    /// Falls back to the first diagnostic starting at the same offset, since an
    /// error node nested in another one shares its report.
    pub fn error_at(&self, range: TextRange) -> Option<&ParseError> {
        let errors = self.errors();
        errors
            .iter()
            .find(|e| e.range == range)
            .or_else(|| errors.iter().find(|e| e.range.start() == range.start()))
    }

    /// Indented dump of the tree without trivia.
    pub fn debug_tree(&self) -> String {
        TreePrinter::new(&self.syntax()).dump()
    }
}

/// Parses `source` with the default options.
pub fn parse(source: &str, dialect: DialectConfig) -> Parse {
    parse_with_options(source, dialect, ParseOptions::default())
}

pub fn parse_with_options(source: &str, dialect: DialectConfig, options: ParseOptions) -> Parse {
    let _span = debug_span!("parse", %dialect, len = source.len()).entered();
    let (tokens, mut diagnostics) = lex(source, dialect);
    let mut parser = Parser::new(source, &tokens, dialect, options);
    parser.parse_root();
    let (events, parse_diagnostics) = parser.finish();
    let green = event::build_tree(source, &tokens, events);
    diagnostics.extend(parse_diagnostics);
    diagnostics.sort_by_position();
    Parse { green, diagnostics }
}
