//! Grammar productions for XPath and XQuery.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Each method returns whether it recognized its construct; a method that
//! returns `false` has consumed nothing, so the caller decides whether the
//! absence is an error.

mod conditionals;
mod constructors;
mod expressions;
mod flwor;
mod module;
mod names;
mod paths;
mod primary;
mod types;

use super::core::Parser;
use super::cst::SyntaxKind::*;
use super::cst::TokenSet;
use super::cst::token_sets::{EXPR_TERMINATORS, NUMERIC_LITERALS, STRING_OPEN};
use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    /// Entry point: the whole input under one `Root` node.
    pub(crate) fn parse_root(&mut self) {
        let m = self.start();
        if self.is_xquery() {
            self.parse_module();
        } else if !self.eof() {
            self.parse_expr_or_missing();
        }
        self.parse_trailing_garbage();
        m.done(self, Root);
    }

    /// Wraps leftover tokens in `Error` nodes. Only the first one is reported;
    /// bad characters following it are attached as they are.
    fn parse_trailing_garbage(&mut self) {
        let mut after_error = false;
        while !self.eof() {
            if after_error && self.at(BadCharacter) {
                self.bump();
                continue;
            }
            if self.at_expr_start() && self.disabled_operator().is_none() {
                let m = self.start();
                self.parse_expr();
                if m.consumed(self) {
                    if after_error {
                        m.done(self, Error);
                    } else {
                        m.error(
                            self,
                            DiagnosticKind::UnexpectedToken,
                            Some("expression after end of input".to_string()),
                        );
                    }
                    after_error = true;
                    continue;
                }
                m.abandon(self);
            }
            if after_error {
                let m = self.start();
                self.bump();
                m.done(self, Error);
            } else {
                self.unexpected();
            }
            after_error = true;
        }
    }

    /// Dialect-specific operator at the current token that the active dialect lacks.
    ///
    /// Such operators are never parsed; this only lets the caller that trips over
    /// one name the dialect that would have accepted it.
    pub(super) fn disabled_operator(&self) -> Option<(Features, &'static str)> {
        let (feature, what) = match self.current() {
            KwOtherwise => (Features::OTHERWISE, "`otherwise` expression"),
            QuestionQuestion | BangBang => (Features::TERNARY, "ternary conditional expression"),
            Elvis => (Features::ELVIS, "elvis operator"),
            KwOrElse | KwAndAlso => (Features::SAXON_LOGICAL_OPERATORS, "`orElse`/`andAlso`"),
            Concat => (Features::XPATH_30, "string concatenation operator"),
            Bang => (Features::XPATH_30, "simple map operator"),
            Hash => (Features::XPATH_30, "named function reference"),
            Arrow => (Features::XPATH_31, "arrow operator"),
            MappingArrow => (Features::MAPPING_ARROW, "mapping arrow operator"),
            ThinArrow => (Features::THIN_ARROW, "thin arrow operator"),
            KwTo => (Features::XPATH_20, "range expression"),
            KwIntersect | KwExcept => (Features::XPATH_20, "`intersect`/`except`"),
            KwIdiv => (Features::XPATH_20, "`idiv`"),
            KwEq | KwNe | KwLt | KwLe | KwGt | KwGe => (Features::XPATH_20, "value comparison"),
            KwIs | Precedes | Follows => (Features::XPATH_20, "node comparison"),
            KwInstance => (Features::XPATH_20, "`instance of`"),
            KwTreat => (Features::XPATH_20, "`treat as`"),
            KwCastable => (Features::XPATH_20, "`castable as`"),
            KwCast => (Features::XPATH_20, "`cast as`"),
            _ => return None,
        };
        (!self.eof() && !self.feature(feature)).then_some((feature, what))
    }

    /// Wraps a construct the dialect lacks in an `Error` node: `introducer` tokens,
    /// then a balanced group if one follows. Nothing inside is parsed.
    pub(super) fn unsupported_construct(&mut self, feature: Features, what: &str, introducer: usize) {
        let m = self.start();
        for _ in 0..introducer {
            if !self.eof() {
                self.bump();
            }
        }
        if matches!(self.current(), ParenOpen | BraceOpen | BracketOpen) && !self.eof() {
            self.skip_group();
        }
        let detail = format!("{what} requires {}", feature.accepted_by());
        m.error(self, DiagnosticKind::UnsupportedSyntax, Some(detail));
    }

    /// Wraps a clause the dialect lacks in an `Error` node: its keyword and
    /// everything up to `recovery`.
    pub(super) fn unsupported_clause(&mut self, feature: Features, what: &str, recovery: TokenSet) {
        let m = self.start();
        self.bump();
        self.skip_balanced(recovery);
        let detail = format!("{what} requires {}", feature.accepted_by());
        m.error(self, DiagnosticKind::UnsupportedSyntax, Some(detail));
    }

    /// A clause keyword in operand position that ends a missing operand rather
    /// than naming an element: `return` in `for $x in return $x`.
    ///
    /// It stays a name before path, predicate, call and operator tokens, as in
    /// `return/a`, `count(.)` or `order > 1`.
    pub(super) fn at_clause_keyword(&self) -> bool {
        let kind = self.current();
        if self.eof() || !EXPR_TERMINATORS.contains(kind) {
            return false;
        }
        let next = self.nth(1);
        match next {
            ParenOpen => matches!(kind, KwReturn | KwSatisfies | KwThen | KwElse),
            Dollar | Dot | DotDot | At | NCName | BracedUriLiteral | StartTagOpen
            | XmlCommentOpen | PiOpen | StringConstructorOpen | Backtick | PragmaOpen => true,
            KwFor | KwLet | KwSome | KwEvery | KwIf | KwSwitch | KwTypeswitch | KwTry | KwMap
            | KwArray | KwFunction | KwFn | KwValidate | KwOrdered | KwUnordered => true,
            _ => NUMERIC_LITERALS.contains(next) || STRING_OPEN.contains(next),
        }
    }

    /// Whether the current token can begin an expression.
    pub(super) fn at_expr_start(&self) -> bool {
        if self.eof() {
            return false;
        }
        let kind = self.current();
        match kind {
            Dollar | ParenOpen | Dot | DotDot | At | Slash | SlashSlash | Star | Minus | Plus
            | BracketOpen | Question | Percent | NCName | BracedUriLiteral | StartTagOpen
            | XmlCommentOpen | PiOpen | StringConstructorOpen | Backtick | PragmaOpen => true,
            _ if NUMERIC_LITERALS.contains(kind) || STRING_OPEN.contains(kind) => true,
            // Clause keywords are names only where nothing else makes sense.
            _ if EXPR_TERMINATORS.contains(kind) => {
                self.nth_at(1, Slash)
                    || self.nth_at(1, SlashSlash)
                    || self.nth_at(1, BracketOpen)
                    || (self.nth_at(1, Colon) && self.nth_adjacent(1))
            }
            _ => kind.is_keyword(),
        }
    }
}
