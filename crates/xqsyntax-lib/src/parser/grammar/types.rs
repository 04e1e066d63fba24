//! Sequence types, item types and kind tests.
//!
//! An item type without an occurrence indicator is not wrapped in `SequenceType`;
//! atomic type names appear as bare `Name`/`QName` nodes.

use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{OCCURRENCE_INDICATORS, STRING_OPEN};

impl Parser<'_> {
    /// `as SequenceType`.
    pub(super) fn parse_type_declaration(&mut self) -> bool {
        if !self.at(KwAs) {
            return false;
        }
        let m = self.start();
        self.bump();
        self.parse_sequence_type_or_missing();
        m.done(self, TypeDeclaration);
        true
    }

    pub(super) fn parse_sequence_type_or_missing(&mut self) {
        if !self.parse_sequence_type() {
            self.missing(DiagnosticKind::ExpectedSequenceType, None);
        }
    }

    fn parse_sequence_type(&mut self) -> bool {
        if self.at(KwEmptySequence) && self.nth_at(1, ParenOpen) {
            let m = self.start();
            self.bump();
            self.expect_empty_parens();
            m.done(self, EmptySequenceType);
            return true;
        }
        let m = self.start();
        let parsed = if self.at(ParenOpen) {
            self.parse_parenthesized_type(true);
            true
        } else {
            self.parse_item_type()
        };
        if !parsed {
            m.abandon(self);
            return false;
        }
        if self.at_set(OCCURRENCE_INDICATORS) {
            self.bump();
            m.done(self, SequenceType);
        } else {
            m.abandon(self);
        }
        true
    }

    /// `TypeName "?"?` after `cast as` and `castable as`.
    pub(super) fn parse_single_type_or_missing(&mut self) {
        let m = self.start();
        if !self.parse_item_type() {
            m.abandon(self);
            self.missing(DiagnosticKind::ExpectedItemType, None);
            return;
        }
        if self.eat(Question) {
            m.done(self, SingleType);
        } else {
            m.abandon(self);
        }
    }

    fn parse_item_type_or_missing(&mut self) {
        if !self.parse_item_type() {
            self.missing(DiagnosticKind::ExpectedItemType, None);
        }
    }

    pub(super) fn parse_item_type(&mut self) -> bool {
        self.nested(false, Self::parse_item_type_inner)
    }

    fn parse_item_type_inner(&mut self) -> bool {
        if self.at_kind_test() {
            self.parse_kind_test();
            return true;
        }
        let next = self.nth(1);
        match self.current() {
            ParenOpen => self.parse_parenthesized_type(false),
            Percent => self.parse_function_test(),
            Tilde => self.parse_type_alias(),
            KwItem if next == ParenOpen => {
                let m = self.start();
                self.bump();
                self.expect_empty_parens();
                m.done(self, AnyItemType);
            }
            KwFunction if next == ParenOpen => self.parse_function_test(),
            KwFn if next == ParenOpen => self.parse_function_test(),
            KwMap if next == ParenOpen => self.parse_map_test(),
            KwArray if next == ParenOpen => self.parse_array_test(),
            KwRecord if next == ParenOpen => self.parse_record_test(),
            KwTuple if next == ParenOpen => self.parse_tuple_type(),
            KwEnum if next == ParenOpen => self.parse_enum_type(),
            KwUnion if next == ParenOpen => self.parse_local_union_type(),
            _ => return self.parse_eqname(),
        }
        true
    }

    /// `( ItemType )`, `( A | B )`, or with `in_sequence_type`, `( SequenceType )`.
    ///
    /// The item type reading is tried first and rolled back when the group turns
    /// out to hold a sequence type.
    fn parse_parenthesized_type(&mut self, in_sequence_type: bool) {
        let m = self.start();
        self.open_delimiter(ParenOpen);
        let item = self.parse_item_type();
        if in_sequence_type && item && self.at_set(OCCURRENCE_INDICATORS) {
            m.rollback(self);
            self.parse_parenthesized_sequence_type();
            return;
        }
        if !item {
            self.missing(DiagnosticKind::ExpectedItemType, None);
        }
        let mut choice = false;
        while self.at(Pipe) {
            if !self.feature(Features::CHOICE_ITEM_TYPE) {
                self.unsupported(Features::CHOICE_ITEM_TYPE, "choice item type");
                self.parse_item_type_or_missing();
                continue;
            }
            self.bump();
            self.parse_item_type_or_missing();
            choice = true;
        }
        self.close_group(ParenClose);
        if choice {
            m.done(self, ChoiceItemType);
        } else if self.feature(Features::XPATH_30) {
            m.done(self, ParenthesizedItemType);
        } else {
            let detail = format!(
                "parenthesized item type requires {}",
                Features::XPATH_30.accepted_by()
            );
            m.error(self, DiagnosticKind::UnsupportedSyntax, Some(detail));
        }
    }

    fn parse_parenthesized_sequence_type(&mut self) {
        if !self.feature(Features::CHOICE_ITEM_TYPE) {
            self.unsupported_construct(
                Features::CHOICE_ITEM_TYPE,
                "parenthesized sequence type",
                0,
            );
            return;
        }
        let m = self.start();
        self.open_delimiter(ParenOpen);
        self.parse_sequence_type_or_missing();
        self.close_group(ParenClose);
        m.done(self, ParenthesizedSequenceType);
    }

    fn expect_empty_parens(&mut self) {
        if !self.at(ParenOpen) {
            self.expect(ParenOpen);
            return;
        }
        self.open_delimiter(ParenOpen);
        self.close_group(ParenClose);
    }

    /// Whether an `(*)` wildcard argument list follows the keyword.
    fn at_wildcard_args(&self) -> bool {
        self.nth_at(1, ParenOpen) && self.nth_at(2, Star) && self.nth_at(3, ParenClose)
    }

    fn bump_wildcard_args(&mut self) {
        self.open_delimiter(ParenOpen);
        self.bump();
        self.close_group(ParenClose);
    }

    /// `function(*)`, `function(T, ...) as T`, `fn(...)`, optionally annotated.
    fn parse_function_test(&mut self) {
        let m = self.start();
        self.parse_annotations();
        let feature = if self.at(KwFn) {
            Features::FOCUS_FUNCTION
        } else {
            Features::XPATH_30
        };
        if !self.at(KwFunction) && !self.at(KwFn) {
            self.expect(KwFunction);
            m.done(self, AnyFunctionTest);
            return;
        }
        if !self.feature(feature) {
            m.abandon(self);
            self.unsupported_construct(feature, "function test", 1);
            return;
        }
        if self.at_wildcard_args() {
            self.bump();
            self.bump_wildcard_args();
            m.done(self, AnyFunctionTest);
            return;
        }
        self.bump();
        self.open_delimiter(ParenOpen);
        self.comma_list(ParenClose, Self::parse_sequence_type_or_missing);
        self.close_group(ParenClose);
        if self.at(KwAs) {
            self.bump();
            self.parse_sequence_type_or_missing();
        } else {
            self.expect(KwAs);
        }
        m.done(self, TypedFunctionTest);
    }

    /// `map(*)` or `map(K, V)`.
    fn parse_map_test(&mut self) {
        if !self.feature(Features::XPATH_31) {
            self.unsupported_construct(Features::XPATH_31, "map test", 1);
            return;
        }
        let m = self.start();
        if self.at_wildcard_args() {
            self.bump();
            self.bump_wildcard_args();
            m.done(self, AnyMapTest);
            return;
        }
        self.bump();
        self.open_delimiter(ParenOpen);
        self.parse_item_type_or_missing();
        self.expect(Comma);
        self.parse_sequence_type_or_missing();
        self.close_group(ParenClose);
        m.done(self, TypedMapTest);
    }

    /// `array(*)` or `array(T)`.
    fn parse_array_test(&mut self) {
        if !self.feature(Features::XPATH_31) {
            self.unsupported_construct(Features::XPATH_31, "array test", 1);
            return;
        }
        let m = self.start();
        if self.at_wildcard_args() {
            self.bump();
            self.bump_wildcard_args();
            m.done(self, AnyArrayTest);
            return;
        }
        self.bump();
        self.open_delimiter(ParenOpen);
        self.parse_sequence_type_or_missing();
        self.close_group(ParenClose);
        m.done(self, TypedArrayTest);
    }

    /// `record(name? as T, ..., *)`.
    fn parse_record_test(&mut self) {
        if !self.feature(Features::RECORD_TYPE) {
            self.unsupported_construct(Features::RECORD_TYPE, "record type", 1);
            return;
        }
        let m = self.start();
        self.bump();
        self.open_delimiter(ParenOpen);
        self.comma_list(ParenClose, |p| p.parse_field(FieldDeclaration, KwAs));
        self.close_group(ParenClose);
        m.done(self, RecordTest);
    }

    /// Saxon `tuple(name: T, ..., *)`.
    fn parse_tuple_type(&mut self) {
        if !self.feature(Features::SAXON_TUPLE_TYPE) {
            self.unsupported_construct(Features::SAXON_TUPLE_TYPE, "tuple type", 1);
            return;
        }
        let m = self.start();
        self.bump();
        self.open_delimiter(ParenOpen);
        self.comma_list(ParenClose, |p| p.parse_field(TupleField, Colon));
        self.close_group(ParenClose);
        m.done(self, TupleType);
    }

    /// One record or tuple field; a lone `*` marks the type as extensible.
    fn parse_field(&mut self, kind: SyntaxKind, separator: SyntaxKind) {
        if self.at(Star) {
            self.bump();
            return;
        }
        let m = self.start();
        if self.at_set(STRING_OPEN) {
            self.parse_string_literal();
        } else {
            self.parse_ncname_or_missing();
        }
        self.eat(Question);
        if self.eat(separator) || self.eat(KwAs) {
            self.parse_sequence_type_or_missing();
        } else if separator == Colon {
            self.expect(Colon);
        }
        m.done(self, kind);
    }

    /// `enum("a", "b")`.
    fn parse_enum_type(&mut self) {
        if !self.feature(Features::ENUM_TYPE) {
            self.unsupported_construct(Features::ENUM_TYPE, "enumeration type", 1);
            return;
        }
        let m = self.start();
        self.bump();
        self.open_delimiter(ParenOpen);
        self.comma_list(ParenClose, Self::parse_string_literal_or_missing);
        self.close_group(ParenClose);
        m.done(self, EnumType);
    }

    /// `union(T, T, ...)`.
    fn parse_local_union_type(&mut self) {
        if !self.feature(Features::LOCAL_UNION_TYPE) {
            self.unsupported_construct(Features::LOCAL_UNION_TYPE, "local union type", 1);
            return;
        }
        let m = self.start();
        self.bump();
        self.open_delimiter(ParenOpen);
        self.comma_list(ParenClose, Self::parse_item_type_or_missing);
        self.close_group(ParenClose);
        m.done(self, LocalUnionType);
    }

    /// Saxon `~alias`.
    fn parse_type_alias(&mut self) {
        if !self.feature(Features::SAXON_TYPE_ALIAS) {
            let introducer = 1 + self.eqname_len(1);
            self.unsupported_construct(Features::SAXON_TYPE_ALIAS, "type alias", introducer);
            return;
        }
        let m = self.start();
        self.bump();
        self.parse_eqname_or_missing();
        m.done(self, TypeAlias);
    }

    pub(super) fn at_kind_test(&self) -> bool {
        self.nth_at(1, ParenOpen)
            && matches!(
                self.current(),
                KwNode
                    | KwText
                    | KwComment
                    | KwProcessingInstruction
                    | KwDocumentNode
                    | KwNamespaceNode
                    | KwAttribute
                    | KwSchemaAttribute
                    | KwElement
                    | KwSchemaElement
            )
    }

    pub(super) fn parse_kind_test(&mut self) {
        let (kind, feature) = match self.current() {
            KwNode => (AnyKindTest, None),
            KwText => (TextTest, None),
            KwComment => (CommentTest, None),
            KwProcessingInstruction => (PiTest, None),
            KwDocumentNode => (DocumentTest, Some(Features::XPATH_20)),
            KwNamespaceNode => (NamespaceNodeTest, Some(Features::XPATH_30)),
            KwAttribute => (AttributeTest, Some(Features::XPATH_20)),
            KwSchemaAttribute => (SchemaAttributeTest, Some(Features::XPATH_20)),
            KwElement => (ElementTest, Some(Features::XPATH_20)),
            _ => (SchemaElementTest, Some(Features::XPATH_20)),
        };
        if let Some(feature) = feature.filter(|&f| !self.feature(f)) {
            let what = format!("`{}()` test", self.current_text());
            self.unsupported_construct(feature, &what, 1);
            return;
        }
        let m = self.start();
        self.bump();
        self.open_delimiter(ParenOpen);
        if !self.at(ParenClose) {
            match kind {
                PiTest => {
                    if !self.parse_string_literal() {
                        self.parse_ncname_or_missing();
                    }
                }
                DocumentTest => {
                    if matches!(self.current(), KwElement | KwSchemaElement) && self.at_kind_test() {
                        self.parse_kind_test();
                    } else {
                        self.missing(
                            DiagnosticKind::ExpectedNodeTest,
                            Some("element test".to_string()),
                        );
                    }
                }
                AttributeTest | ElementTest => self.parse_node_kind_args(kind == ElementTest),
                SchemaAttributeTest | SchemaElementTest => self.parse_eqname_or_missing(),
                _ => {}
            }
        }
        self.close_group(ParenClose);
        m.done(self, kind);
    }

    /// `NameTest ("|" NameTest)* ("," TypeName "?"?)?` inside `element(...)`/`attribute(...)`.
    fn parse_node_kind_args(&mut self, nillable: bool) {
        if !self.parse_name_test() {
            self.missing(DiagnosticKind::ExpectedName, None);
        }
        while self.at(Pipe) {
            if !self.feature(Features::CHOICE_ITEM_TYPE) {
                self.unsupported(Features::CHOICE_ITEM_TYPE, "name test union");
            } else {
                self.bump();
            }
            if !self.parse_name_test() {
                self.missing(DiagnosticKind::ExpectedName, None);
            }
        }
        if self.eat(Comma) {
            self.parse_eqname_or_missing();
            if nillable {
                self.eat(Question);
            }
        }
    }
}
