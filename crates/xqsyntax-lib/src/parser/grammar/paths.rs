//! Path expressions and axis steps.
//!
//! `PathExpr` and `AxisStep` are flat: slashes, axes, node tests and predicates
//! are direct children. A relative path of one step is not wrapped, and neither
//! is a bare name test without axis or predicates.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{FORWARD_AXES, REVERSE_AXES};

impl Parser<'_> {
    pub(super) fn parse_path_expr(&mut self) -> bool {
        let m = self.start();
        match self.current() {
            Slash => {
                self.bump();
                // A lone `/` is the root; it only takes a step that can start one.
                if self.at_step_start() {
                    self.parse_step_expr();
                }
            }
            SlashSlash => {
                self.bump();
                self.parse_step_or_missing();
            }
            _ => {
                if self.at_clause_keyword() || !self.parse_step_expr() {
                    m.abandon(self);
                    return false;
                }
                if !self.at(Slash) && !self.at(SlashSlash) {
                    m.abandon(self);
                    return true;
                }
            }
        }
        while self.at(Slash) || self.at(SlashSlash) {
            self.bump();
            self.parse_step_or_missing();
        }
        m.done(self, PathExpr);
        true
    }

    fn at_step_start(&self) -> bool {
        !matches!(self.current(), Minus | Plus | Slash | SlashSlash | PragmaOpen)
            && self.at_expr_start()
    }

    fn parse_step_or_missing(&mut self) {
        if !self.parse_step_expr() {
            self.missing(DiagnosticKind::ExpectedNodeTest, None);
        }
    }

    /// A postfix expression, or an axis step when no primary expression starts here.
    fn parse_step_expr(&mut self) -> bool {
        self.parse_postfix_expr() || self.parse_axis_step()
    }

    fn parse_axis_step(&mut self) -> bool {
        let m = self.start();
        let mut wrapped = true;
        if self.at_set(FORWARD_AXES) && self.nth_at(1, ColonColon) {
            self.parse_axis(ForwardAxis);
            self.parse_node_test_or_missing();
        } else if self.at_set(REVERSE_AXES) && self.nth_at(1, ColonColon) {
            self.parse_axis(ReverseAxis);
            self.parse_node_test_or_missing();
        } else if self.nth_is_ncname(0) && !self.eof() && self.nth_at(1, ColonColon) {
            let detail = self.current_text().to_string();
            let invalid = self.start();
            self.bump();
            self.bump();
            invalid.error(self, DiagnosticKind::InvalidAxis, Some(detail));
            self.parse_node_test_or_missing();
        } else if self.eat(At) {
            self.parse_node_test_or_missing();
        } else if self.at(DotDot) {
            self.bump();
            wrapped = false;
        } else if self.parse_node_test() {
            wrapped = false;
        } else {
            m.abandon(self);
            return false;
        }
        while self.at(BracketOpen) {
            self.parse_predicate();
            wrapped = true;
        }
        if wrapped {
            m.done(self, AxisStep);
        } else {
            m.abandon(self);
        }
        true
    }

    fn parse_axis(&mut self, kind: SyntaxKind) {
        let m = self.start();
        self.bump();
        self.bump();
        m.done(self, kind);
    }

    /// Kind test or name test.
    fn parse_node_test(&mut self) -> bool {
        if self.at_kind_test() {
            self.parse_kind_test();
            return true;
        }
        self.parse_name_test()
    }

    fn parse_node_test_or_missing(&mut self) {
        if !self.parse_node_test() {
            self.missing(DiagnosticKind::ExpectedNodeTest, None);
        }
    }

    /// `[ Expr ]`.
    pub(super) fn parse_predicate(&mut self) {
        let m = self.start();
        self.open_delimiter(BracketOpen);
        self.parse_expr_or_missing();
        self.close_group(BracketClose);
        m.done(self, Predicate);
    }
}
