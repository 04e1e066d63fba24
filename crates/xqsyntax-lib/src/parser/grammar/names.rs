//! Names: NCName, QName, URIQualifiedName and wildcards.
//!
//! Prefixed names are three tokens (`p`, `:`, `local`) joined only when adjacent;
//! keywords are reinterpreted as `NCName` in every name position.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};

/// Unprefixed names that cannot be called as functions.
pub(super) fn is_reserved_function_name(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        KwArray
            | KwAttribute
            | KwComment
            | KwDocumentNode
            | KwElement
            | KwEmptySequence
            | KwEnum
            | KwFn
            | KwFunction
            | KwIf
            | KwItem
            | KwMap
            | KwNamespaceNode
            | KwNode
            | KwProcessingInstruction
            | KwRecord
            | KwSchemaAttribute
            | KwSchemaElement
            | KwSwitch
            | KwText
            | KwTuple
            | KwTypeswitch
            | KwUnion
    )
}

impl Parser<'_> {
    pub(super) fn nth_is_ncname(&self, n: usize) -> bool {
        self.nth_at(n, NCName) || self.nth(n).is_keyword()
    }

    /// Token count of the EQName starting `n` tokens ahead, 0 if there is none.
    pub(super) fn eqname_len(&self, n: usize) -> usize {
        if self.nth_at(n, BracedUriLiteral) {
            return if self.nth_is_ncname(n + 1) && self.nth_adjacent(n + 1) {
                2
            } else {
                1
            };
        }
        if !self.nth_is_ncname(n) {
            return 0;
        }
        let prefixed = self.nth_at(n + 1, Colon)
            && self.nth_adjacent(n + 1)
            && self.nth_is_ncname(n + 2)
            && self.nth_adjacent(n + 2);
        if prefixed { 3 } else { 1 }
    }

    fn bump_name(&mut self) {
        self.bump_remap(NCName);
    }

    /// `Name`, `QName` or `UriQualifiedName`.
    pub(super) fn parse_eqname(&mut self) -> bool {
        let len = self.eqname_len(0);
        if len == 0 {
            return false;
        }
        let m = self.start();
        if self.at(BracedUriLiteral) {
            self.bump();
            if len == 2 {
                self.bump_name();
            } else {
                self.missing(DiagnosticKind::ExpectedName, None);
            }
            m.done(self, UriQualifiedName);
        } else if len == 3 {
            self.bump_name();
            self.bump();
            self.bump_name();
            m.done(self, QName);
        } else {
            self.bump_name();
            m.done(self, Name);
        }
        true
    }

    pub(super) fn parse_eqname_or_missing(&mut self) {
        if !self.parse_eqname() {
            self.missing(DiagnosticKind::ExpectedName, None);
        }
    }

    /// An unprefixed name, such as a namespace prefix.
    pub(super) fn parse_ncname_or_missing(&mut self) {
        if self.nth_is_ncname(0) && !self.eof() {
            let m = self.start();
            self.bump_name();
            m.done(self, Name);
        } else {
            self.missing(DiagnosticKind::ExpectedName, None);
        }
    }

    /// `$name` inside a binding; the caller owns the node.
    pub(super) fn parse_binding_var(&mut self) -> bool {
        if !self.eat(Dollar) {
            self.missing(DiagnosticKind::ExpectedVariableName, None);
            return false;
        }
        if !self.parse_eqname() {
            self.missing(DiagnosticKind::ExpectedVariableName, None);
        }
        true
    }

    pub(super) fn at_wildcard(&self) -> bool {
        if self.at(Star) {
            return true;
        }
        let local_wildcard = |n: usize| self.nth_at(n, Star) && self.nth_adjacent(n);
        (self.nth_is_ncname(0) && self.nth_at(1, Colon) && self.nth_adjacent(1) && local_wildcard(2))
            || (self.at(BracedUriLiteral) && local_wildcard(1))
    }

    /// `*`, `*:local`, `prefix:*`, `Q{uri}*`.
    pub(super) fn parse_wildcard(&mut self) {
        let m = self.start();
        if self.at(Star) {
            let local = self.nth_at(1, Colon)
                && self.nth_adjacent(1)
                && self.nth_is_ncname(2)
                && self.nth_adjacent(2);
            self.bump();
            if local {
                self.bump();
                self.bump_name();
            }
        } else if self.at(BracedUriLiteral) {
            self.bump();
            self.bump();
        } else {
            self.bump_name();
            self.bump();
            self.bump();
        }
        m.done(self, Wildcard);
    }

    /// A name test: wildcard or EQName.
    pub(super) fn parse_name_test(&mut self) -> bool {
        if self.at_wildcard() {
            self.parse_wildcard();
            return true;
        }
        self.parse_eqname()
    }
}
