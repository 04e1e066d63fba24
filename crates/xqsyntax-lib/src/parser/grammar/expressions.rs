//! Operator precedence chain, from `Expr` down to simple map expressions.
//!
//! Every binary level follows the same shape: parse the next tighter level, and
//! while one of this level's operators follows, wrap what was parsed so far with
//! `precede`. A level that sees no operator leaves its operand unwrapped.

use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{ADDITIVE_OPS, COMPARISON_OPS};

impl Parser<'_> {
    /// `ExprSingle ("," ExprSingle)*`; wrapped in `Expr` only when a comma is present.
    pub(super) fn parse_expr(&mut self) -> bool {
        let m = self.start();
        if !self.parse_expr_single() {
            m.abandon(self);
            return false;
        }
        if !self.at(Comma) {
            m.abandon(self);
            return true;
        }
        while self.eat(Comma) {
            self.parse_expr_single_or_missing();
        }
        m.done(self, Expr);
        true
    }

    pub(super) fn parse_expr_or_missing(&mut self) {
        if !self.parse_expr() {
            self.missing(DiagnosticKind::ExpectedExpression, None);
        }
    }

    pub(super) fn parse_expr_single_or_missing(&mut self) {
        if !self.parse_expr_single() {
            self.missing(DiagnosticKind::ExpectedExpression, None);
        }
    }

    pub(super) fn parse_expr_single(&mut self) -> bool {
        self.nested(false, Self::parse_expr_single_inner)
    }

    fn parse_expr_single_inner(&mut self) -> bool {
        match self.current() {
            KwFor if self.nth_at(1, Dollar) => self.parse_for_expr(),
            KwFor if self.nth_at(1, KwMember) && self.nth_at(2, Dollar) => self.parse_for_expr(),
            KwFor if matches!(self.nth(1), KwTumbling | KwSliding) && self.nth_at(2, KwWindow) => {
                self.parse_for_expr()
            }
            KwLet if self.nth_at(1, Dollar) => self.parse_let_expr(),
            KwSome | KwEvery if self.nth_at(1, Dollar) => self.parse_quantified_expr(),
            KwIf if self.nth_at(1, ParenOpen) => self.parse_if_expr(),
            KwSwitch if self.nth_at(1, ParenOpen) => self.parse_switch_expr(),
            KwTypeswitch if self.nth_at(1, ParenOpen) => self.parse_typeswitch_expr(),
            KwTry if self.nth_at(1, BraceOpen) => self.parse_try_catch_expr(),
            _ => self.parse_ternary_expr(),
        }
    }

    /// `OrExpr ("??" ExprSingle "!!" ExprSingle)?` or `OrExpr "?:" ExprSingle`.
    fn parse_ternary_expr(&mut self) -> bool {
        let m = self.start();
        if !self.parse_or_expr() {
            m.abandon(self);
            return false;
        }
        if self.at(QuestionQuestion) && self.feature(Features::TERNARY) {
            self.bump();
            self.parse_expr_single_or_missing();
            self.expect(BangBang);
            self.parse_expr_single_or_missing();
            m.done(self, TernaryConditionalExpr);
        } else if self.at(Elvis) && self.feature(Features::ELVIS) {
            self.bump();
            self.parse_expr_single_or_missing();
            m.done(self, ElvisExpr);
        } else {
            m.abandon(self);
        }
        true
    }

    /// Left-associative `operand (op operand)*`. Non-associative levels still
    /// chain so that recovery keeps every operand, but report the second operator.
    fn parse_binary(
        &mut self,
        kind: SyntaxKind,
        at_operator: fn(&Self) -> bool,
        operand: fn(&mut Self) -> bool,
        associative: bool,
    ) -> bool {
        let m = self.start();
        if !operand(self) {
            m.abandon(self);
            return false;
        }
        if !at_operator(self) {
            m.abandon(self);
            return true;
        }
        let mut m = m;
        loop {
            self.bump();
            if !operand(self) {
                self.missing(DiagnosticKind::ExpectedExpression, None);
            }
            let completed = m.done(self, kind);
            if !at_operator(self) {
                break;
            }
            if !associative {
                let detail = self.current().describe();
                self.error_here(DiagnosticKind::NonAssociativeOperator, Some(detail));
            }
            m = completed.precede(self);
        }
        true
    }

    fn parse_or_expr(&mut self) -> bool {
        self.parse_binary(OrExpr, Self::at_or_operator, Self::parse_and_expr, true)
    }

    fn at_or_operator(&self) -> bool {
        self.at(KwOr) || (self.at(KwOrElse) && self.feature(Features::SAXON_LOGICAL_OPERATORS))
    }

    fn parse_and_expr(&mut self) -> bool {
        self.parse_binary(AndExpr, Self::at_and_operator, Self::parse_comparison_expr, true)
    }

    fn at_and_operator(&self) -> bool {
        self.at(KwAnd) || (self.at(KwAndAlso) && self.feature(Features::SAXON_LOGICAL_OPERATORS))
    }

    fn parse_comparison_expr(&mut self) -> bool {
        self.parse_binary(
            ComparisonExpr,
            Self::at_comparison_operator,
            Self::parse_otherwise_expr,
            false,
        )
    }

    fn at_comparison_operator(&self) -> bool {
        match self.current() {
            Equals | NotEquals | LessThan | LessEquals | GreaterThan | GreaterEquals => true,
            kind => COMPARISON_OPS.contains(kind) && self.feature(Features::XPATH_20),
        }
    }

    fn parse_otherwise_expr(&mut self) -> bool {
        self.parse_binary(
            OtherwiseExpr,
            |p| p.at(KwOtherwise) && p.feature(Features::OTHERWISE),
            Self::parse_string_concat_expr,
            true,
        )
    }

    fn parse_string_concat_expr(&mut self) -> bool {
        self.parse_binary(
            StringConcatExpr,
            |p| p.at(Concat) && p.feature(Features::XPATH_30),
            Self::parse_range_expr,
            true,
        )
    }

    fn parse_range_expr(&mut self) -> bool {
        self.parse_binary(
            RangeExpr,
            |p| p.at(KwTo) && p.feature(Features::XPATH_20),
            Self::parse_additive_expr,
            false,
        )
    }

    fn parse_additive_expr(&mut self) -> bool {
        self.parse_binary(
            AdditiveExpr,
            |p| p.at_set(ADDITIVE_OPS),
            Self::parse_multiplicative_expr,
            true,
        )
    }

    fn parse_multiplicative_expr(&mut self) -> bool {
        self.parse_binary(
            MultiplicativeExpr,
            Self::at_multiplicative_operator,
            Self::parse_union_expr,
            true,
        )
    }

    fn at_multiplicative_operator(&self) -> bool {
        match self.current() {
            Star | KwDiv | KwMod => true,
            KwIdiv => self.feature(Features::XPATH_20),
            _ => false,
        }
    }

    fn parse_union_expr(&mut self) -> bool {
        self.parse_binary(
            UnionExpr,
            |p| p.at(Pipe) || (p.at(KwUnion) && p.feature(Features::XPATH_20)),
            Self::parse_intersect_except_expr,
            true,
        )
    }

    fn parse_intersect_except_expr(&mut self) -> bool {
        self.parse_binary(
            IntersectExceptExpr,
            |p| (p.at(KwIntersect) || p.at(KwExcept)) && p.feature(Features::XPATH_20),
            Self::parse_instanceof_expr,
            true,
        )
    }

    /// One of the `instance of` / `treat as` / `castable as` / `cast as` suffixes.
    fn parse_type_suffix(
        &mut self,
        kind: SyntaxKind,
        keywords: (SyntaxKind, SyntaxKind),
        operand: fn(&mut Self) -> bool,
        single_type: bool,
    ) -> bool {
        let m = self.start();
        if !operand(self) {
            m.abandon(self);
            return false;
        }
        if !self.at(keywords.0) || !self.feature(Features::XPATH_20) {
            m.abandon(self);
            return true;
        }
        self.bump();
        self.expect(keywords.1);
        if single_type {
            self.parse_single_type_or_missing();
        } else {
            self.parse_sequence_type_or_missing();
        }
        m.done(self, kind);
        true
    }

    fn parse_instanceof_expr(&mut self) -> bool {
        self.parse_type_suffix(
            InstanceofExpr,
            (KwInstance, KwOf),
            Self::parse_treat_expr,
            false,
        )
    }

    fn parse_treat_expr(&mut self) -> bool {
        self.parse_type_suffix(TreatExpr, (KwTreat, KwAs), Self::parse_castable_expr, false)
    }

    fn parse_castable_expr(&mut self) -> bool {
        self.parse_type_suffix(CastableExpr, (KwCastable, KwAs), Self::parse_cast_expr, true)
    }

    fn parse_cast_expr(&mut self) -> bool {
        self.parse_type_suffix(CastExpr, (KwCast, KwAs), Self::parse_arrow_expr, true)
    }

    fn at_arrow_operator(&self) -> bool {
        match self.current() {
            Arrow => self.feature(Features::XPATH_31),
            MappingArrow => self.feature(Features::MAPPING_ARROW),
            ThinArrow => self.feature(Features::THIN_ARROW),
            _ => false,
        }
    }

    /// `UnaryExpr (ArrowOp ArrowTarget)*`; fat and thin arrows mix freely.
    fn parse_arrow_expr(&mut self) -> bool {
        let m = self.start();
        if !self.parse_unary_expr() {
            m.abandon(self);
            return false;
        }
        if !self.at_arrow_operator() {
            m.abandon(self);
            return true;
        }
        let mut m = m;
        loop {
            let arrow = self.current();
            self.bump();
            self.parse_arrow_target(arrow);
            let completed = m.done(self, ArrowExpr);
            if !self.at_arrow_operator() {
                break;
            }
            m = completed.precede(self);
        }
        true
    }

    /// Function specifier and argument list after an arrow.
    fn parse_arrow_target(&mut self, arrow: SyntaxKind) {
        match self.current() {
            BraceOpen if arrow == ThinArrow => {
                self.parse_enclosed_expr();
                return;
            }
            Dollar => self.parse_var_ref(),
            ParenOpen => self.parse_parenthesized_expr(),
            _ if self.at_inline_function() => {
                self.parse_inline_function();
            }
            _ => {
                if !self.parse_eqname() {
                    self.missing(DiagnosticKind::ExpectedName, None);
                    return;
                }
            }
        }
        if self.at(ParenOpen) {
            self.parse_argument_list();
        } else {
            self.expect(ParenOpen);
        }
    }

    /// `("-" | "+")* ValueExpr`.
    fn parse_unary_expr(&mut self) -> bool {
        if !self.at_set(ADDITIVE_OPS) {
            return self.parse_value_expr();
        }
        let m = self.start();
        while self.at_set(ADDITIVE_OPS) {
            self.bump();
        }
        if !self.parse_value_expr() {
            self.missing(DiagnosticKind::ExpectedExpression, None);
        }
        m.done(self, UnaryExpr);
        true
    }

    fn parse_value_expr(&mut self) -> bool {
        if self.is_xquery() {
            if self.at(PragmaOpen) {
                self.parse_extension_expr();
                return true;
            }
            if self.at_validate_expr() {
                self.parse_validate_expr();
                return true;
            }
        }
        self.parse_simple_map_expr()
    }

    fn parse_simple_map_expr(&mut self) -> bool {
        self.parse_binary(
            SimpleMapExpr,
            |p| p.at(Bang) && p.feature(Features::XPATH_30),
            Self::parse_path_expr,
            true,
        )
    }

    fn at_validate_expr(&self) -> bool {
        self.at(KwValidate)
            && match self.nth(1) {
                BraceOpen => true,
                KwLax | KwStrict => self.nth_at(2, BraceOpen),
                KwType => self.eqname_len(2) > 0,
                _ => false,
            }
    }

    /// `validate (lax | strict | type TypeName)? { Expr }`.
    fn parse_validate_expr(&mut self) {
        let m = self.start();
        self.bump();
        if self.at(KwLax) || self.at(KwStrict) {
            self.bump();
        } else if self.eat(KwType) {
            self.parse_eqname_or_missing();
        }
        self.parse_enclosed_expr();
        m.done(self, ValidateExpr);
    }

    /// `Pragma+ { Expr? }`.
    fn parse_extension_expr(&mut self) {
        let m = self.start();
        while self.at(PragmaOpen) {
            self.parse_pragma();
        }
        self.parse_enclosed_expr();
        m.done(self, ExtensionExpr);
    }

    fn parse_pragma(&mut self) {
        let m = self.start();
        self.bump();
        self.parse_eqname_or_missing();
        self.eat(PragmaContents);
        // An unclosed pragma was already reported by the lexer.
        self.eat(PragmaClose);
        m.done(self, Pragma);
    }
}
