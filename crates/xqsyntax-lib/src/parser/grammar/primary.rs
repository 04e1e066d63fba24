//! Postfix and primary expressions: literals, variables, calls, function items,
//! maps, arrays, lookups, string constructors and templates.

use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{NUMERIC_LITERALS, STRING_OPEN};

use super::names::is_reserved_function_name;

impl Parser<'_> {
    /// Primary expression followed by predicates, dynamic calls and lookups.
    pub(super) fn parse_postfix_expr(&mut self) -> bool {
        let m = self.start();
        if !self.parse_primary_expr() {
            m.abandon(self);
            return false;
        }
        let mut suffixed = false;
        loop {
            match self.current() {
                BracketOpen => self.parse_predicate(),
                ParenOpen if self.feature(Features::XPATH_30) => self.parse_argument_list(),
                Question if self.feature(Features::XPATH_31) && self.at_lookup_key(1) => {
                    self.parse_lookup(Lookup)
                }
                _ => break,
            }
            suffixed = true;
        }
        if suffixed {
            m.done(self, PostfixExpr);
        } else {
            m.abandon(self);
        }
        true
    }

    fn parse_primary_expr(&mut self) -> bool {
        if self.eof() {
            return false;
        }
        match self.current() {
            kind if NUMERIC_LITERALS.contains(kind) => self.parse_numeric_literal(),
            DoubleQuote | SingleQuote => {
                self.parse_string_literal();
            }
            Dollar => self.parse_var_ref(),
            ParenOpen => self.parse_parenthesized_expr(),
            Dot if self.nth_at(1, BraceOpen) && self.nth_adjacent(1) => {
                if self.feature(Features::SAXON_CONTEXT_FUNCTION) {
                    let m = self.start();
                    self.bump();
                    self.parse_enclosed_expr();
                    m.done(self, FocusFunctionExpr);
                } else {
                    self.unsupported_construct(
                        Features::SAXON_CONTEXT_FUNCTION,
                        "context function `.{...}`",
                        1,
                    );
                }
            }
            Dot => self.bump(),
            Question => {
                if !self.at_lookup_key(1) {
                    return false;
                }
                if self.feature(Features::XPATH_31) {
                    self.parse_lookup(UnaryLookup);
                } else {
                    let introducer = if self.nth_at(1, ParenOpen) { 1 } else { 2 };
                    self.unsupported_construct(Features::XPATH_31, "unary lookup", introducer);
                }
            }
            BracketOpen => self.parse_square_array(),
            Percent => self.parse_inline_function(),
            StringConstructorOpen => self.parse_string_constructor(),
            Backtick => self.parse_string_template(),
            StartTagOpen | XmlCommentOpen | PiOpen => self.parse_direct_constructor(),
            _ => return self.parse_named_primary(),
        }
        true
    }

    /// Primaries introduced by a name or keyword.
    fn parse_named_primary(&mut self) -> bool {
        if self.at_inline_function() {
            self.parse_inline_function();
            return true;
        }
        let next = self.nth(1);
        match self.current() {
            KwMap if next == BraceOpen => {
                self.parse_keyword_braced(Features::XPATH_31, MapConstructor, "map constructor");
                return true;
            }
            KwArray if next == BraceOpen => {
                self.parse_keyword_braced(
                    Features::XPATH_31,
                    CurlyArrayConstructor,
                    "array constructor",
                );
                return true;
            }
            KwOrdered if next == BraceOpen => {
                self.parse_keyword_braced(Features::XQUERY, OrderedExpr, "`ordered` expression");
                return true;
            }
            KwUnordered if next == BraceOpen => {
                self.parse_keyword_braced(
                    Features::XQUERY,
                    UnorderedExpr,
                    "`unordered` expression",
                );
                return true;
            }
            NCName if next == BraceOpen && self.at_text("_") && self.nth_adjacent(1) => {
                if self.feature(Features::SAXON_LAMBDA) {
                    let m = self.start();
                    self.bump();
                    self.parse_enclosed_expr();
                    m.done(self, LambdaFunctionExpr);
                } else {
                    self.unsupported_construct(Features::SAXON_LAMBDA, "lambda `_{...}`", 1);
                }
                return true;
            }
            _ => {}
        }
        if self.is_xquery() && self.at_computed_constructor() {
            self.parse_computed_constructor();
            return true;
        }

        let len = self.eqname_len(0);
        if len == 0 {
            return false;
        }
        match self.nth(len) {
            Hash => {
                if !self.feature(Features::XPATH_30) {
                    self.unsupported_construct(
                        Features::XPATH_30,
                        "named function reference",
                        len + 2,
                    );
                    return true;
                }
                let m = self.start();
                self.parse_eqname();
                self.bump();
                if self.at(IntegerLiteral) {
                    self.bump();
                } else {
                    self.expect(IntegerLiteral);
                }
                m.done(self, NamedFunctionRef);
                true
            }
            ParenOpen => {
                let reserved = len == 1 && is_reserved_function_name(self.current());
                if reserved && self.at_kind_test() {
                    return false;
                }
                let m = self.start();
                if reserved {
                    let detail = self.current_text().to_string();
                    let name = self.start();
                    self.bump_remap(NCName);
                    name.error(self, DiagnosticKind::ReservedFunctionName, Some(detail));
                } else {
                    self.parse_eqname();
                }
                self.parse_argument_list();
                m.done(self, FunctionCall);
                true
            }
            _ => false,
        }
    }

    /// `keyword { ... }` forms: maps, curly arrays, ordered and unordered.
    fn parse_keyword_braced(
        &mut self,
        feature: Features,
        kind: SyntaxKind,
        what: &str,
    ) {
        if !self.feature(feature) {
            self.unsupported_construct(feature, what, 1);
            return;
        }
        let m = self.start();
        self.bump();
        if kind == MapConstructor {
            self.open_delimiter(BraceOpen);
            self.comma_list(BraceClose, Self::parse_map_entry);
            self.close_group(BraceClose);
        } else {
            self.parse_enclosed_expr();
        }
        m.done(self, kind);
    }

    fn parse_map_entry(&mut self) {
        let m = self.start();
        self.parse_expr_single_or_missing();
        self.expect(Colon);
        self.parse_expr_single_or_missing();
        m.done(self, MapConstructorEntry);
    }

    fn parse_square_array(&mut self) {
        if !self.feature(Features::XPATH_31) {
            self.unsupported_construct(Features::XPATH_31, "array constructor", 0);
            return;
        }
        let m = self.start();
        self.open_delimiter(BracketOpen);
        self.comma_list(BracketClose, Self::parse_expr_single_or_missing);
        self.close_group(BracketClose);
        m.done(self, SquareArrayConstructor);
    }

    fn parse_numeric_literal(&mut self) {
        let kind = self.current();
        let text = self.current_text();
        let extended = matches!(kind, HexIntegerLiteral | BinaryIntegerLiteral) || text.contains('_');
        if extended && !self.feature(Features::NUMERIC_LITERALS_40) {
            let what = if text.contains('_') {
                "digit separator"
            } else {
                "hexadecimal and binary literals"
            };
            self.unsupported(Features::NUMERIC_LITERALS_40, what);
            return;
        }
        if kind == DoubleLiteral && !text.ends_with(|c: char| c.is_ascii_digit()) {
            self.error_here(DiagnosticKind::IncompleteExponent, None);
        }
        self.bump();
    }

    /// A quoted string. The closing quote matches the opening one.
    pub(super) fn parse_string_literal(&mut self) -> bool {
        if !self.at_set(STRING_OPEN) {
            return false;
        }
        let quote = self.current();
        let m = self.start();
        self.bump();
        while matches!(
            self.current(),
            StringContents | EscapedQuote | PredefinedEntityRef | CharRef
        ) {
            self.bump();
        }
        if !self.eat(quote) {
            self.missing(DiagnosticKind::UnclosedStringLiteral, None);
        }
        m.done(self, StringLiteral);
        true
    }

    pub(super) fn parse_string_literal_or_missing(&mut self) {
        if !self.parse_string_literal() {
            self.missing(DiagnosticKind::ExpectedStringLiteral, None);
        }
    }

    /// String or numeric literal, as in annotations and decimal formats.
    pub(super) fn parse_literal_or_missing(&mut self) {
        if self.at_set(NUMERIC_LITERALS) {
            self.parse_numeric_literal();
        } else if self.at(Minus) && self.nth_at_set(1, NUMERIC_LITERALS) {
            let m = self.start();
            self.bump();
            self.parse_numeric_literal();
            m.done(self, UnaryExpr);
        } else if !self.parse_string_literal() {
            self.missing(DiagnosticKind::ExpectedExpression, Some("literal".to_string()));
        }
    }

    pub(super) fn parse_var_ref(&mut self) {
        let m = self.start();
        self.bump();
        if !self.parse_eqname() {
            self.missing(DiagnosticKind::ExpectedVariableName, None);
        }
        m.done(self, VarRef);
    }

    /// `( Expr? )`.
    pub(super) fn parse_parenthesized_expr(&mut self) {
        let m = self.start();
        self.open_delimiter(ParenOpen);
        if !self.at(ParenClose) {
            self.parse_expr();
        }
        self.close_group(ParenClose);
        m.done(self, ParenthesizedExpr);
    }

    /// `{ Expr? }`; a missing brace is recorded in place of the whole block.
    pub(super) fn parse_enclosed_expr(&mut self) {
        if !self.at(BraceOpen) {
            self.expect(BraceOpen);
            return;
        }
        let m = self.start();
        self.open_delimiter(BraceOpen);
        if !self.at(BraceClose) {
            self.parse_expr();
        }
        self.close_group(BraceClose);
        m.done(self, EnclosedExpr);
    }

    /// `( Argument ("," Argument)* )`.
    pub(super) fn parse_argument_list(&mut self) {
        let m = self.start();
        self.open_delimiter(ParenOpen);
        self.comma_list(ParenClose, Self::parse_argument);
        self.close_group(ParenClose);
        m.done(self, ArgumentList);
    }

    fn parse_argument(&mut self) {
        if self.at(Question) && matches!(self.nth(1), Comma | ParenClose) {
            if !self.feature(Features::XPATH_30) {
                self.unsupported(Features::XPATH_30, "argument placeholder");
                return;
            }
            let m = self.start();
            self.bump();
            m.done(self, ArgumentPlaceholder);
            return;
        }
        if self.nth_is_ncname(0) && self.nth_at(1, Assign) {
            if !self.feature(Features::KEYWORD_ARGUMENTS) {
                self.unsupported_construct(Features::KEYWORD_ARGUMENTS, "keyword argument", 2);
                self.parse_expr_single_or_missing();
                return;
            }
            let m = self.start();
            self.parse_ncname_or_missing();
            self.bump();
            self.parse_expr_single_or_missing();
            m.done(self, KeywordArgument);
            return;
        }
        self.parse_expr_single_or_missing();
    }

    /// Whether the token `n` ahead can follow `?` as a key specifier.
    fn at_lookup_key(&self, n: usize) -> bool {
        match self.nth(n) {
            IntegerLiteral | ParenOpen | Star | Dollar | DoubleQuote | SingleQuote => true,
            NCName => true,
            kind => kind.is_keyword(),
        }
    }

    /// `? KeySpecifier`, as a postfix `Lookup` or a `UnaryLookup`.
    fn parse_lookup(&mut self, kind: SyntaxKind) {
        let m = self.start();
        self.bump();
        match self.current() {
            IntegerLiteral | Star => self.bump(),
            ParenOpen => self.parse_parenthesized_expr(),
            Dollar => self.parse_var_ref(),
            DoubleQuote | SingleQuote => {
                self.parse_string_literal();
            }
            _ => self.parse_ncname_or_missing(),
        }
        m.done(self, kind);
    }

    /// Inline function expressions, with or without annotations, and focus functions.
    pub(super) fn at_inline_function(&self) -> bool {
        match self.current() {
            Percent => true,
            KwFunction => matches!(self.nth(1), ParenOpen | BraceOpen),
            KwFn => {
                matches!(self.nth(1), ParenOpen | BraceOpen)
                    && self.feature(Features::FOCUS_FUNCTION)
            }
            _ => false,
        }
    }

    pub(super) fn parse_inline_function(&mut self) {
        let m = self.start();
        let annotated = self.at(Percent);
        self.parse_annotations();
        if !self.at(KwFunction) && !self.at(KwFn) {
            // Annotations the dialect lacks are already error nodes.
            if annotated && !self.feature(Features::XQUERY_30) {
                m.abandon(self);
                return;
            }
            self.expect(KwFunction);
            m.done(self, InlineFunctionExpr);
            return;
        }
        if self.nth_at(1, BraceOpen) {
            if !self.feature(Features::FOCUS_FUNCTION) {
                m.abandon(self);
                self.unsupported_construct(Features::FOCUS_FUNCTION, "focus function", 1);
                return;
            }
            self.bump();
            self.parse_enclosed_expr();
            m.done(self, FocusFunctionExpr);
            return;
        }
        if !self.feature(Features::XPATH_30) {
            m.abandon(self);
            self.unsupported_construct(Features::XPATH_30, "inline function expression", 1);
            return;
        }
        self.bump();
        self.parse_param_list();
        self.parse_type_declaration();
        self.parse_enclosed_expr();
        m.done(self, InlineFunctionExpr);
    }

    /// `%name` or `%name(literal, ...)`, repeated.
    pub(super) fn parse_annotations(&mut self) {
        while self.at(Percent) {
            if !self.feature(Features::XQUERY_30) {
                let introducer = 1 + self.eqname_len(1);
                self.unsupported_construct(Features::XQUERY_30, "annotation", introducer);
                continue;
            }
            let m = self.start();
            self.bump();
            self.parse_eqname_or_missing();
            if self.at(ParenOpen) {
                self.open_delimiter(ParenOpen);
                self.comma_list(ParenClose, Self::parse_literal_or_missing);
                self.close_group(ParenClose);
            }
            m.done(self, Annotation);
        }
    }

    /// `( Param ("," Param)* )`.
    pub(super) fn parse_param_list(&mut self) {
        if !self.at(ParenOpen) {
            self.expect(ParenOpen);
            return;
        }
        let m = self.start();
        self.open_delimiter(ParenOpen);
        self.comma_list(ParenClose, Self::parse_param);
        self.close_group(ParenClose);
        m.done(self, ParamList);
    }

    /// `$name (as T)? (:= default)?`.
    fn parse_param(&mut self) {
        let m = self.start();
        self.parse_binding_var();
        self.parse_type_declaration();
        if self.at(Assign) {
            if self.feature(Features::KEYWORD_ARGUMENTS) {
                self.bump();
                self.parse_expr_single_or_missing();
            } else {
                self.unsupported(Features::KEYWORD_ARGUMENTS, "parameter default");
                self.parse_expr_single_or_missing();
            }
        }
        m.done(self, Param);
    }

    /// ``` ``[ chars `{ Expr }` ... ]`` ```.
    fn parse_string_constructor(&mut self) {
        let m = self.start();
        self.bump();
        loop {
            match self.current() {
                StringConstructorChars => self.bump(),
                InterpolationOpen => {
                    let interpolation = self.start();
                    self.open_delimiter(InterpolationOpen);
                    if !self.at(InterpolationClose) {
                        self.parse_expr();
                    }
                    self.close_group(InterpolationClose);
                    interpolation.done(self, StringInterpolation);
                }
                _ => break,
            }
        }
        self.expect(StringConstructorClose);
        m.done(self, StringConstructor);
    }

    /// `` `chars {Expr} chars` ``.
    fn parse_string_template(&mut self) {
        let m = self.start();
        self.bump();
        loop {
            match self.current() {
                StringTemplateChars | EscapedBacktick | EscapedBrace => self.bump(),
                BraceOpen => self.parse_enclosed_expr(),
                _ => break,
            }
        }
        self.expect(Backtick);
        m.done(self, StringTemplate);
    }
}
