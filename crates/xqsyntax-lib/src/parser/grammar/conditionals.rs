//! `if`, `switch`, `typeswitch` and `try`/`catch`.

use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::*;

impl Parser<'_> {
    /// `if (E) then E else E`, or `if (E) { E }` in 4.0.
    pub(super) fn parse_if_expr(&mut self) -> bool {
        if !self.feature(Features::XPATH_20) {
            self.unsupported_construct(Features::XPATH_20, "conditional expression", 1);
            return true;
        }
        let m = self.start();
        self.bump();
        self.parse_operand_in_parens(false);
        if self.at(BraceOpen) {
            if self.feature(Features::BRACED_IF) {
                self.parse_enclosed_expr();
            } else {
                self.unsupported_construct(Features::BRACED_IF, "braced `if`", 0);
            }
        } else {
            self.expect_recovering(KwThen);
            self.parse_expr_single_or_missing();
            self.expect_recovering(KwElse);
            self.parse_expr_single_or_missing();
        }
        m.done(self, IfExpr);
        true
    }

    /// `( Expr )` after `if`, `switch` or `typeswitch`.
    fn parse_operand_in_parens(&mut self, may_be_empty: bool) {
        if !self.at(ParenOpen) {
            self.expect(ParenOpen);
            return;
        }
        self.open_delimiter(ParenOpen);
        if !(may_be_empty && self.at(ParenClose)) {
            self.parse_expr_or_missing();
        }
        self.close_group(ParenClose);
    }

    pub(super) fn parse_switch_expr(&mut self) -> bool {
        if !self.any_feature(Features::XQUERY_30 | Features::BRACED_IF) {
            self.unsupported_construct(Features::XQUERY_30, "`switch` expression", 1);
            return true;
        }
        let m = self.start();
        self.bump();
        let braced_actions = self.feature(Features::BRACED_IF);
        self.parse_operand_in_parens(braced_actions);
        self.parse_case_block(braced_actions, Self::parse_switch_cases);
        m.done(self, SwitchExpr);
        true
    }

    /// Case clauses, optionally wrapped in braces.
    fn parse_case_block(&mut self, braces_allowed: bool, cases: fn(&mut Self)) {
        if self.at(BraceOpen) && braces_allowed {
            self.open_delimiter(BraceOpen);
            cases(self);
            self.close_group(BraceClose);
        } else {
            cases(self);
        }
    }

    fn parse_switch_cases(&mut self) {
        if !self.at(KwCase) {
            self.missing(DiagnosticKind::ExpectedClause, Some(KwCase.describe()));
        }
        while self.at(KwCase) {
            let m = self.start();
            while self.eat(KwCase) {
                self.parse_expr_single_or_missing();
            }
            self.expect_recovering(KwReturn);
            self.parse_expr_single_or_missing();
            m.done(self, SwitchCaseClause);
        }
        let m = self.start();
        if self.expect_recovering(KwDefault) {
            self.expect(KwReturn);
            self.parse_expr_single_or_missing();
        }
        m.done(self, SwitchDefaultClause);
    }

    pub(super) fn parse_typeswitch_expr(&mut self) -> bool {
        if !self.any_feature(Features::XQUERY | Features::BRACED_IF) {
            self.unsupported_construct(Features::XQUERY, "`typeswitch` expression", 1);
            return true;
        }
        let m = self.start();
        self.bump();
        self.parse_operand_in_parens(false);
        let braced_actions = self.feature(Features::BRACED_IF);
        self.parse_case_block(braced_actions, Self::parse_typeswitch_cases);
        m.done(self, TypeswitchExpr);
        true
    }

    fn parse_typeswitch_cases(&mut self) {
        if !self.at(KwCase) {
            self.missing(DiagnosticKind::ExpectedClause, Some(KwCase.describe()));
        }
        while self.at(KwCase) {
            let m = self.start();
            self.bump();
            if self.at(Dollar) {
                self.parse_binding_var();
                self.expect(KwAs);
            }
            self.parse_sequence_type_union();
            self.expect_recovering(KwReturn);
            self.parse_expr_single_or_missing();
            m.done(self, CaseClause);
        }
        let m = self.start();
        if self.expect_recovering(KwDefault) {
            if self.at(Dollar) {
                self.parse_binding_var();
            }
            self.expect(KwReturn);
            self.parse_expr_single_or_missing();
        }
        m.done(self, DefaultCaseClause);
    }

    /// `SequenceType ("|" SequenceType)*`; wrapped only when `|` is present.
    fn parse_sequence_type_union(&mut self) {
        let m = self.start();
        self.parse_sequence_type_or_missing();
        if !self.at(Pipe) {
            m.abandon(self);
            return;
        }
        while self.eat(Pipe) {
            self.parse_sequence_type_or_missing();
        }
        m.done(self, SequenceTypeUnion);
    }

    /// `try { E } catch Names { E } ... finally { E }`.
    pub(super) fn parse_try_catch_expr(&mut self) -> bool {
        if !self.feature(Features::XQUERY_30) {
            self.unsupported_construct(Features::XQUERY_30, "`try`/`catch` expression", 1);
            return true;
        }
        let m = self.start();

        let try_clause = self.start();
        self.bump();
        self.parse_enclosed_expr();
        try_clause.done(self, TryClause);

        if !self.at(KwCatch) && !self.at(KwFinally) {
            self.missing(DiagnosticKind::ExpectedClause, Some(KwCatch.describe()));
        }
        while self.at(KwCatch) {
            let catch = self.start();
            self.bump();
            self.parse_catch_error_list();
            self.parse_enclosed_expr();
            catch.done(self, CatchClause);
        }
        if self.at(KwFinally) {
            if self.feature(Features::FINALLY_CLAUSE) {
                let finally = self.start();
                self.bump();
                self.parse_enclosed_expr();
                finally.done(self, FinallyClause);
            } else {
                self.unsupported_construct(Features::FINALLY_CLAUSE, "`finally` clause", 1);
            }
        }
        m.done(self, TryCatchExpr);
        true
    }

    /// `NameTest ("|" NameTest)*`.
    fn parse_catch_error_list(&mut self) {
        let m = self.start();
        if !self.parse_name_test() {
            self.missing(DiagnosticKind::ExpectedNodeTest, None);
        }
        while self.eat(Pipe) {
            if !self.parse_name_test() {
                self.missing(DiagnosticKind::ExpectedNodeTest, None);
            }
        }
        m.done(self, CatchErrorList);
    }
}
