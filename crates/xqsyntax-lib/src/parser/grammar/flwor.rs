//! FLWOR expressions, XPath `for`/`let` expressions and quantified expressions.
//!
//! XQuery chains any number of clauses under one `FlworExpr`; XPath allows a
//! single `for` or `let` clause followed by `return`.

use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::*;
use crate::parser::cst::TokenSet;
use crate::parser::cst::token_sets::FLWOR_CLAUSE_FIRST;

impl Parser<'_> {
    pub(super) fn parse_for_expr(&mut self) -> bool {
        if self.is_xquery() {
            return self.parse_flwor_expr();
        }
        if !self.feature(Features::XPATH_20) {
            self.unsupported_construct(Features::XPATH_20, "`for` expression", 1);
            return true;
        }
        if matches!(self.nth(1), KwTumbling | KwSliding) {
            self.unsupported_clause(Features::XQUERY_30, "window clause", FLWOR_CLAUSE_FIRST);
            self.parse_return_clause();
            return true;
        }
        let m = self.start();
        self.parse_for_clause();
        self.parse_return_clause();
        m.done(self, ForExpr);
        true
    }

    pub(super) fn parse_let_expr(&mut self) -> bool {
        if self.is_xquery() {
            return self.parse_flwor_expr();
        }
        if !self.feature(Features::XPATH_30) {
            self.unsupported_construct(Features::XPATH_30, "`let` expression", 1);
            return true;
        }
        let m = self.start();
        self.parse_let_clause();
        self.parse_return_clause();
        m.done(self, LetExpr);
        true
    }

    fn parse_flwor_expr(&mut self) -> bool {
        let m = self.start();
        self.parse_initial_clause();
        loop {
            match self.current() {
                KwFor | KwLet if self.at_initial_clause() => self.parse_initial_clause(),
                KwWhere => self.parse_where_clause(),
                KwWhile => self.parse_while_clause(),
                KwGroup if self.nth_at(1, KwBy) => self.parse_group_by_clause(),
                KwOrder if self.nth_at(1, KwBy) => self.parse_order_by_clause(),
                KwStable if self.nth_at(1, KwOrder) => self.parse_order_by_clause(),
                KwCount if self.nth_at(1, Dollar) => self.parse_count_clause(),
                _ => break,
            }
        }
        self.parse_return_clause();
        m.done(self, FlworExpr);
        true
    }

    fn at_initial_clause(&self) -> bool {
        match self.current() {
            KwFor => match self.nth(1) {
                Dollar => true,
                KwMember => self.nth_at(2, Dollar),
                KwTumbling | KwSliding => self.nth_at(2, KwWindow),
                _ => false,
            },
            KwLet => self.nth_at(1, Dollar),
            _ => false,
        }
    }

    fn parse_initial_clause(&mut self) {
        if self.at(KwLet) {
            self.parse_let_clause();
        } else {
            self.parse_for_clause();
        }
    }

    fn parse_binding_list(&mut self, binding: fn(&mut Self)) {
        loop {
            binding(self);
            if !self.eat(Comma) {
                break;
            }
        }
    }

    fn parse_for_clause(&mut self) {
        match self.nth(1) {
            KwMember => return self.parse_for_member_clause(),
            KwTumbling | KwSliding => return self.parse_window_clause(),
            _ => {}
        }
        let m = self.start();
        self.bump();
        self.parse_binding_list(Self::parse_for_binding);
        m.done(self, ForClause);
    }

    /// `$x as T allowing empty at $i in E`.
    fn parse_for_binding(&mut self) {
        let m = self.start();
        self.parse_binding_var();
        self.parse_type_declaration();
        if self.at(KwAllowing) {
            if self.feature(Features::XQUERY_30) {
                let allowing = self.start();
                self.bump();
                self.expect(KwEmpty);
                allowing.done(self, AllowingEmpty);
            } else {
                let introducer = if self.nth_at(1, KwEmpty) { 2 } else { 1 };
                self.unsupported_construct(Features::XQUERY_30, "`allowing empty`", introducer);
            }
        }
        self.parse_positional_var();
        self.expect(KwIn);
        self.parse_expr_single_or_missing();
        m.done(self, ForBinding);
    }

    fn parse_positional_var(&mut self) {
        if !self.at(KwAt) {
            return;
        }
        let m = self.start();
        self.bump();
        self.parse_binding_var();
        m.done(self, PositionalVar);
    }

    fn parse_for_member_clause(&mut self) {
        if !self.feature(Features::FOR_MEMBER) {
            self.unsupported_clause(Features::FOR_MEMBER, "`for member`", FLWOR_CLAUSE_FIRST);
            return;
        }
        let m = self.start();
        self.bump();
        self.bump();
        self.parse_binding_list(Self::parse_for_member_binding);
        m.done(self, ForMemberClause);
    }

    fn parse_for_member_binding(&mut self) {
        let m = self.start();
        self.parse_binding_var();
        self.parse_type_declaration();
        self.parse_positional_var();
        self.expect(KwIn);
        self.parse_expr_single_or_missing();
        m.done(self, ForMemberBinding);
    }

    fn parse_let_clause(&mut self) {
        let m = self.start();
        self.bump();
        self.parse_binding_list(Self::parse_let_binding);
        m.done(self, LetClause);
    }

    fn parse_let_binding(&mut self) {
        let m = self.start();
        self.parse_binding_var();
        self.parse_type_declaration();
        self.expect(Assign);
        self.parse_expr_single_or_missing();
        m.done(self, LetBinding);
    }

    /// `for (tumbling | sliding) window $w in E start ... end ...`.
    fn parse_window_clause(&mut self) {
        if !self.feature(Features::XQUERY_30) {
            self.unsupported_clause(Features::XQUERY_30, "window clause", FLWOR_CLAUSE_FIRST);
            return;
        }
        let m = self.start();
        let sliding = self.nth_at(1, KwSliding);
        self.bump();
        self.bump();
        self.expect(KwWindow);
        self.parse_binding_var();
        self.parse_type_declaration();
        self.expect(KwIn);
        self.parse_expr_single_or_missing();

        if self.at(KwStart) {
            let start = self.start();
            self.bump();
            self.parse_window_vars();
            self.expect(KwWhen);
            self.parse_expr_single_or_missing();
            start.done(self, WindowStartCondition);
        } else {
            self.expect(KwStart);
        }

        if self.at(KwOnly) || self.at(KwEnd) {
            let end = self.start();
            self.eat(KwOnly);
            self.expect(KwEnd);
            self.parse_window_vars();
            self.expect(KwWhen);
            self.parse_expr_single_or_missing();
            end.done(self, WindowEndCondition);
        } else if sliding {
            self.expect(KwEnd);
        }
        m.done(self, WindowClause);
    }

    /// `$cur at $pos previous $prev next $next`, every part optional.
    fn parse_window_vars(&mut self) {
        let m = self.start();
        if self.at(Dollar) {
            self.parse_binding_var();
        }
        self.parse_positional_var();
        if self.eat(KwPrevious) {
            self.parse_binding_var();
        }
        if self.eat(KwNext) {
            self.parse_binding_var();
        }
        if m.consumed(self) {
            m.done(self, WindowVars);
        } else {
            m.abandon(self);
        }
    }

    fn parse_where_clause(&mut self) {
        let m = self.start();
        self.bump();
        self.parse_expr_single_or_missing();
        m.done(self, WhereClause);
    }

    fn parse_while_clause(&mut self) {
        if !self.feature(Features::WHILE_CLAUSE) {
            self.unsupported_clause(Features::WHILE_CLAUSE, "`while` clause", FLWOR_CLAUSE_FIRST);
            return;
        }
        let m = self.start();
        self.bump();
        self.parse_expr_single_or_missing();
        m.done(self, WhileClause);
    }

    fn parse_group_by_clause(&mut self) {
        if !self.feature(Features::XQUERY_30) {
            self.unsupported_clause(Features::XQUERY_30, "`group by` clause", FLWOR_CLAUSE_FIRST);
            return;
        }
        let m = self.start();
        self.bump();
        self.bump();
        self.parse_binding_list(Self::parse_grouping_spec);
        m.done(self, GroupByClause);
    }

    /// `$key (as T)? (:= E)? (collation "uri")?`.
    fn parse_grouping_spec(&mut self) {
        let m = self.start();
        self.parse_binding_var();
        if self.at(KwAs) || self.at(Assign) {
            self.parse_type_declaration();
            self.expect(Assign);
            self.parse_expr_single_or_missing();
        }
        if self.eat(KwCollation) {
            self.parse_string_literal_or_missing();
        }
        m.done(self, GroupingSpec);
    }

    fn parse_order_by_clause(&mut self) {
        let m = self.start();
        self.eat(KwStable);
        self.bump();
        self.expect(KwBy);
        self.parse_binding_list(Self::parse_order_spec);
        m.done(self, OrderByClause);
    }

    fn parse_order_spec(&mut self) {
        let m = self.start();
        self.parse_expr_single_or_missing();
        self.parse_order_modifier();
        m.done(self, OrderSpec);
    }

    fn parse_order_modifier(&mut self) {
        let m = self.start();
        if self.at(KwAscending) || self.at(KwDescending) {
            self.bump();
        }
        if self.eat(KwEmpty) {
            if self.at(KwGreatest) || self.at(KwLeast) {
                self.bump();
            } else {
                self.expect(KwGreatest);
            }
        }
        if self.eat(KwCollation) {
            self.parse_string_literal_or_missing();
        }
        if m.consumed(self) {
            m.done(self, OrderModifier);
        } else {
            m.abandon(self);
        }
    }

    fn parse_count_clause(&mut self) {
        if !self.feature(Features::XQUERY_30) {
            self.unsupported_clause(Features::XQUERY_30, "`count` clause", FLWOR_CLAUSE_FIRST);
            return;
        }
        let m = self.start();
        self.bump();
        self.parse_binding_var();
        m.done(self, CountClause);
    }

    fn parse_return_clause(&mut self) {
        if !self.at(KwReturn) {
            self.error_recover(
                DiagnosticKind::ExpectedToken,
                Some(KwReturn.describe()),
                TokenSet::single(KwReturn),
            );
            if !self.at(KwReturn) {
                return;
            }
        }
        let m = self.start();
        self.bump();
        self.parse_expr_single_or_missing();
        m.done(self, ReturnClause);
    }

    pub(super) fn parse_quantified_expr(&mut self) -> bool {
        if !self.feature(Features::XPATH_20) {
            self.unsupported_construct(Features::XPATH_20, "quantified expression", 1);
            return true;
        }
        let m = self.start();
        self.bump();
        self.parse_binding_list(Self::parse_quantified_binding);
        self.expect_recovering(KwSatisfies);
        self.parse_expr_single_or_missing();
        m.done(self, QuantifiedExpr);
        true
    }

    fn parse_quantified_binding(&mut self) {
        let m = self.start();
        self.parse_binding_var();
        self.parse_type_declaration();
        self.expect(KwIn);
        self.parse_expr_single_or_missing();
        m.done(self, QuantifiedBinding);
    }
}
