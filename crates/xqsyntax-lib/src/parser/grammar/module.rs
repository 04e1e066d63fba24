//! XQuery modules: version declaration, module declaration, prolog and query body.

use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::PROLOG_RECOVERY;

/// Decimal-format property names.
const DF_PROPERTIES: &[SyntaxKind] = &[
    KwDecimalSeparator,
    KwGroupingSeparator,
    KwInfinity,
    KwMinusSign,
    KwNaN,
    KwPercent,
    KwPerMille,
    KwZeroDigit,
    KwDigit,
    KwPatternSeparator,
    KwExponentSeparator,
];

impl Parser<'_> {
    /// `VersionDecl? (LibraryModule | MainModule)`. Empty input yields nothing.
    pub(super) fn parse_module(&mut self) {
        if self.eof() {
            return;
        }
        if self.at(KwXquery) && matches!(self.nth(1), KwVersion | KwEncoding) {
            self.parse_version_decl();
        }
        if self.at(KwModule) && self.nth_at(1, KwNamespace) {
            let m = self.start();
            self.parse_module_decl();
            self.parse_prolog();
            m.done(self, LibraryModule);
            return;
        }
        let m = self.start();
        self.parse_prolog();
        let body = self.start();
        self.parse_expr_or_missing();
        body.done(self, QueryBody);
        m.done(self, MainModule);
    }

    /// `xquery version "3.1" encoding "utf-8";`
    fn parse_version_decl(&mut self) {
        let m = self.start();
        self.bump();
        if self.eat(KwVersion) {
            self.parse_string_literal_or_missing();
            if self.eat(KwEncoding) {
                self.parse_string_literal_or_missing();
            }
        } else {
            self.bump();
            self.parse_string_literal_or_missing();
        }
        self.parse_separator();
        m.done(self, VersionDecl);
    }

    /// `module namespace p = "uri";`
    fn parse_module_decl(&mut self) {
        let m = self.start();
        self.bump();
        self.bump();
        self.parse_ncname_or_missing();
        self.expect(Equals);
        self.parse_string_literal_or_missing();
        self.parse_separator();
        m.done(self, ModuleDecl);
    }

    /// `;` after a declaration. Garbage before it is skipped unless an
    /// expression or another declaration could start there.
    fn parse_separator(&mut self) {
        if self.eat(Semicolon) {
            return;
        }
        if self.at_prolog_decl() || self.at_expr_start() {
            self.expect(Semicolon);
            return;
        }
        self.error_recover(
            DiagnosticKind::ExpectedToken,
            Some(Semicolon.describe()),
            PROLOG_RECOVERY,
        );
        self.eat(Semicolon);
    }

    fn at_prolog_decl(&self) -> bool {
        match self.current() {
            KwDeclare => matches!(
                self.nth(1),
                KwBoundarySpace
                    | KwDefault
                    | KwBaseUri
                    | KwConstruction
                    | KwOrdering
                    | KwCopyNamespaces
                    | KwDecimalFormat
                    | KwNamespace
                    | KwContext
                    | KwOption
                    | KwVariable
                    | KwFunction
                    | KwType
                    | Percent
            ),
            KwImport => matches!(self.nth(1), KwSchema | KwModule),
            _ => false,
        }
    }

    /// Whether the declaration ahead belongs after setters, namespaces and imports.
    fn at_body_decl(&self) -> bool {
        self.at(KwDeclare)
            && matches!(
                self.nth(1),
                KwContext | KwOption | KwVariable | KwFunction | KwType | Percent
            )
    }

    fn parse_prolog(&mut self) {
        if !self.at_prolog_decl() {
            return;
        }
        let m = self.start();
        let mut seen_body_decl = false;
        while self.at_prolog_decl() {
            let start = self.token_pos();
            let body_decl = self.at_body_decl();
            self.parse_prolog_decl();
            if body_decl {
                seen_body_decl = true;
            } else if seen_body_decl {
                let range = self.range_since(start);
                self.report(
                    DiagnosticKind::UnexpectedToken,
                    range,
                    Some("declaration after variable and function declarations".to_string()),
                );
            }
            self.parse_separator();
        }
        m.done(self, Prolog);
    }

    fn parse_prolog_decl(&mut self) {
        if self.at(KwImport) {
            if self.nth_at(1, KwSchema) {
                self.parse_schema_import();
            } else {
                self.parse_module_import();
            }
            return;
        }
        match self.nth(1) {
            KwBoundarySpace => self.parse_setter(BoundarySpaceDecl, 2, &[KwPreserve, KwStrip]),
            KwConstruction => self.parse_setter(ConstructionDecl, 2, &[KwStrip, KwPreserve]),
            KwOrdering => self.parse_setter(OrderingModeDecl, 2, &[KwOrdered, KwUnordered]),
            KwBaseUri => self.parse_uri_decl(BaseUriDecl, 2),
            KwCopyNamespaces => self.parse_copy_namespaces_decl(),
            KwDecimalFormat => self.parse_decimal_format_decl(),
            KwNamespace => self.parse_namespace_decl(),
            KwContext => self.parse_context_item_decl(),
            KwOption => self.parse_option_decl(),
            KwDefault => match self.nth(2) {
                KwCollation => self.parse_uri_decl(DefaultCollationDecl, 3),
                KwOrder => self.parse_empty_order_decl(),
                KwElement | KwFunction => self.parse_default_namespace_decl(),
                KwDecimalFormat => self.parse_decimal_format_decl(),
                _ => self.parse_unknown_decl(),
            },
            _ => self.parse_annotated_decl(),
        }
    }

    /// `declare` followed by nothing recognizable.
    fn parse_unknown_decl(&mut self) {
        let m = self.start();
        self.bump();
        self.skip_balanced(PROLOG_RECOVERY);
        m.error(self, DiagnosticKind::ExpectedClause, Some("declaration".to_string()));
    }

    /// Consumes `count` keywords already checked by the caller.
    fn bump_keywords(&mut self, count: usize) {
        for _ in 0..count {
            self.bump();
        }
    }

    /// Expects one keyword out of `choices`.
    fn expect_one_of(&mut self, choices: &[SyntaxKind]) {
        if choices.contains(&self.current()) && !self.eof() {
            self.bump();
            return;
        }
        let expected = choices
            .iter()
            .map(|kind| kind.describe())
            .collect::<Vec<_>>()
            .join(" or ");
        self.missing(DiagnosticKind::ExpectedToken, Some(expected));
    }

    /// `declare <keyword> (a | b)`.
    fn parse_setter(&mut self, kind: SyntaxKind, keywords: usize, choices: &[SyntaxKind]) {
        let m = self.start();
        self.bump_keywords(keywords);
        self.expect_one_of(choices);
        m.done(self, kind);
    }

    /// `declare base-uri "uri"`, `declare default collation "uri"`.
    fn parse_uri_decl(&mut self, kind: SyntaxKind, keywords: usize) {
        let m = self.start();
        self.bump_keywords(keywords);
        self.parse_string_literal_or_missing();
        m.done(self, kind);
    }

    fn parse_empty_order_decl(&mut self) {
        let m = self.start();
        self.bump_keywords(3);
        self.expect(KwEmpty);
        self.expect_one_of(&[KwGreatest, KwLeast]);
        m.done(self, EmptyOrderDecl);
    }

    fn parse_copy_namespaces_decl(&mut self) {
        let m = self.start();
        self.bump_keywords(2);
        self.expect_one_of(&[KwPreserve, KwNoPreserve]);
        self.expect(Comma);
        self.expect_one_of(&[KwInherit, KwNoInherit]);
        m.done(self, CopyNamespacesDecl);
    }

    /// `declare decimal-format name (prop = "v")*` or `declare default decimal-format ...`.
    fn parse_decimal_format_decl(&mut self) {
        if !self.feature(Features::XQUERY_30) {
            self.unsupported_clause(Features::XQUERY_30, "decimal format declaration", PROLOG_RECOVERY);
            return;
        }
        let m = self.start();
        self.bump();
        if self.eat(KwDefault) {
            self.bump();
        } else {
            self.bump();
            self.parse_eqname_or_missing();
        }
        while DF_PROPERTIES.contains(&self.current()) && !self.eof() {
            let property = self.start();
            self.bump_remap(NCName);
            self.expect(Equals);
            self.parse_string_literal_or_missing();
            property.done(self, DfPropertyAssignment);
        }
        m.done(self, DecimalFormatDecl);
    }

    /// `declare namespace p = "uri"`.
    fn parse_namespace_decl(&mut self) {
        let m = self.start();
        self.bump_keywords(2);
        self.parse_ncname_or_missing();
        self.expect(Equals);
        self.parse_string_literal_or_missing();
        m.done(self, NamespaceDecl);
    }

    /// `declare default (element | function) namespace "uri"`.
    fn parse_default_namespace_decl(&mut self) {
        let m = self.start();
        self.bump_keywords(3);
        self.expect(KwNamespace);
        self.parse_string_literal_or_missing();
        m.done(self, DefaultNamespaceDecl);
    }

    /// `import schema (namespace p = | default element namespace)? "uri" (at "hint", ...)?`.
    fn parse_schema_import(&mut self) {
        let m = self.start();
        self.bump_keywords(2);
        if self.at(KwNamespace) {
            let prefix = self.start();
            self.bump();
            self.parse_ncname_or_missing();
            self.expect(Equals);
            prefix.done(self, SchemaPrefix);
        } else if self.at(KwDefault) {
            let prefix = self.start();
            self.bump();
            self.expect(KwElement);
            self.expect(KwNamespace);
            prefix.done(self, SchemaPrefix);
        }
        self.parse_string_literal_or_missing();
        self.parse_location_hints();
        m.done(self, SchemaImport);
    }

    /// `import module (namespace p =)? "uri" (at "hint", ...)?`.
    fn parse_module_import(&mut self) {
        let m = self.start();
        self.bump_keywords(2);
        if self.eat(KwNamespace) {
            self.parse_ncname_or_missing();
            self.expect(Equals);
        }
        self.parse_string_literal_or_missing();
        self.parse_location_hints();
        m.done(self, ModuleImport);
    }

    fn parse_location_hints(&mut self) {
        if !self.at(KwAt) {
            return;
        }
        let m = self.start();
        self.bump();
        self.parse_string_literal_or_missing();
        while self.eat(Comma) {
            self.parse_string_literal_or_missing();
        }
        m.done(self, LocationHints);
    }

    /// `declare context item (as T)? (:= E | external (:= E)?)`.
    fn parse_context_item_decl(&mut self) {
        if !self.feature(Features::XQUERY_30) {
            self.unsupported_clause(Features::XQUERY_30, "context item declaration", PROLOG_RECOVERY);
            return;
        }
        let m = self.start();
        self.bump_keywords(2);
        self.expect(KwItem);
        if self.eat(KwAs) && !self.parse_item_type() {
            self.missing(DiagnosticKind::ExpectedItemType, None);
        }
        self.parse_initializer();
        m.done(self, ContextItemDecl);
    }

    /// `:= E` or `external (:= E)?`.
    fn parse_initializer(&mut self) {
        if self.eat(KwExternal) {
            if self.eat(Assign) {
                self.parse_expr_single_or_missing();
            }
            return;
        }
        self.expect(Assign);
        self.parse_expr_single_or_missing();
    }

    /// `declare option name "value"`.
    fn parse_option_decl(&mut self) {
        let m = self.start();
        self.bump_keywords(2);
        self.parse_eqname_or_missing();
        self.parse_string_literal_or_missing();
        m.done(self, OptionDecl);
    }

    /// `declare %annotation* (variable | function | type) ...`.
    fn parse_annotated_decl(&mut self) {
        let m = self.start();
        self.bump();
        self.parse_annotations();
        match self.current() {
            KwVariable => self.parse_var_decl(),
            KwFunction => self.parse_function_decl(),
            KwType => self.parse_item_type_decl(),
            _ => self.error_recover(
                DiagnosticKind::ExpectedClause,
                Some("`variable` or `function` declaration".to_string()),
                PROLOG_RECOVERY,
            ),
        }
        m.done(self, AnnotatedDecl);
    }

    /// `variable $x (as T)? (:= E | external (:= E)?)`.
    fn parse_var_decl(&mut self) {
        let m = self.start();
        self.bump();
        self.parse_binding_var();
        self.parse_type_declaration();
        self.parse_initializer();
        m.done(self, VarDecl);
    }

    /// `function name(params) (as T)? ({ body } | external)`.
    fn parse_function_decl(&mut self) {
        let m = self.start();
        self.bump();
        self.parse_eqname_or_missing();
        self.parse_param_list();
        self.parse_type_declaration();
        if !self.eat(KwExternal) {
            self.parse_enclosed_expr();
        }
        m.done(self, FunctionDecl);
    }

    /// `type name as ItemType`; Saxon also writes `type name = ItemType`.
    fn parse_item_type_decl(&mut self) {
        if !self.any_feature(Features::RECORD_TYPE | Features::SAXON_TYPE_ALIAS) {
            self.unsupported_clause(Features::RECORD_TYPE, "item type declaration", PROLOG_RECOVERY);
            return;
        }
        let m = self.start();
        self.bump();
        self.parse_eqname_or_missing();
        if !self.eat(KwAs) && !self.eat(Equals) {
            self.expect(KwAs);
        }
        if !self.parse_item_type() {
            self.missing(DiagnosticKind::ExpectedItemType, None);
        }
        m.done(self, ItemTypeDecl);
    }
}
