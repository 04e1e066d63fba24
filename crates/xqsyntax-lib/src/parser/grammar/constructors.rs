//! XQuery direct and computed constructors.
//!
//! Direct constructor markup arrives from the lexer already split into tag,
//! content and reference tokens; whitespace inside tags is trivia.

use crate::dialect::Features;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};

impl Parser<'_> {
    /// `<elem ...>`, `<!-- -->` or `<?target ?>`.
    pub(super) fn parse_direct_constructor(&mut self) {
        match self.current() {
            XmlCommentOpen => self.parse_delimited_markup(
                XmlCommentContents,
                XmlCommentClose,
                DirCommentConstructor,
            ),
            PiOpen => self.parse_dir_pi_constructor(),
            _ => self.parse_dir_elem_constructor(),
        }
    }

    /// Opener, optional contents and closer. The lexer reports a missing closer.
    fn parse_delimited_markup(&mut self, contents: SyntaxKind, close: SyntaxKind, kind: SyntaxKind) {
        let m = self.start();
        self.bump();
        self.eat(contents);
        self.eat(close);
        m.done(self, kind);
    }

    fn parse_dir_pi_constructor(&mut self) {
        let m = self.start();
        self.bump();
        self.parse_ncname_or_missing();
        self.eat(PiContents);
        self.eat(PiClose);
        m.done(self, DirPiConstructor);
    }

    /// Source text of the element name at the current token.
    fn tag_name_text(&self) -> String {
        let len = self.eqname_len(0);
        (0..len).map(|n| self.nth_text(n)).collect()
    }

    fn parse_dir_elem_constructor(&mut self) {
        let m = self.start();
        self.bump();
        let name = self.tag_name_text();
        if !self.parse_eqname() {
            self.missing(DiagnosticKind::ExpectedName, None);
        }
        self.parse_dir_attribute_list();

        if self.eat(EmptyTagClose) {
            m.done(self, DirElemConstructor);
            return;
        }
        if !self.eat(TagClose) {
            self.expect(TagClose);
            m.done(self, DirElemConstructor);
            return;
        }

        self.parse_dir_elem_content(&name);
        if self.at(EndTagOpen) {
            self.parse_end_tag(&name);
        } else {
            self.missing(DiagnosticKind::UnclosedElement, Some(name));
        }
        m.done(self, DirElemConstructor);
    }

    fn parse_dir_attribute_list(&mut self) {
        if !self.nth_is_ncname(0) || self.eof() {
            return;
        }
        let m = self.start();
        while self.nth_is_ncname(0) && !self.eof() {
            let attribute = self.start();
            self.parse_eqname();
            self.expect(Equals);
            if self.at(DoubleQuote) || self.at(SingleQuote) {
                self.parse_dir_attribute_value();
            } else {
                self.missing(DiagnosticKind::ExpectedStringLiteral, None);
            }
            attribute.done(self, DirAttribute);
        }
        m.done(self, DirAttributeList);
    }

    fn parse_dir_attribute_value(&mut self) {
        let m = self.start();
        let quote = self.current();
        self.bump();
        loop {
            match self.current() {
                AttrValueChars | EscapedQuote | EscapedBrace | PredefinedEntityRef | CharRef => {
                    self.bump()
                }
                BraceOpen => self.parse_enclosed_expr(),
                BraceClose => self.error_and_bump(
                    DiagnosticKind::UnexpectedToken,
                    Some("`}` (write `}}` for a literal brace)".to_string()),
                ),
                _ => break,
            }
        }
        if !self.eat(quote) {
            self.missing(DiagnosticKind::UnclosedStringLiteral, None);
        }
        m.done(self, DirAttributeValue);
    }

    /// Content up to the end tag or end of input.
    fn parse_dir_elem_content(&mut self, name: &str) {
        while !self.eof() {
            match self.current() {
                XmlContentChars | EscapedBrace | PredefinedEntityRef | CharRef | BadCharacter => {
                    self.bump()
                }
                BraceOpen => self.parse_enclosed_expr(),
                BraceClose => self.error_and_bump(
                    DiagnosticKind::UnexpectedToken,
                    Some(format!("`}}` in `<{name}>` content")),
                ),
                StartTagOpen => self.nested((), Self::parse_dir_elem_constructor),
                XmlCommentOpen | PiOpen => self.parse_direct_constructor(),
                CDataOpen => self.parse_delimited_markup(CDataContents, CDataClose, CDataSection),
                _ => break,
            }
        }
    }

    /// `</name>`; a different name is wrapped in an `Error` node.
    fn parse_end_tag(&mut self, name: &str) {
        self.bump();
        let end_name = self.tag_name_text();
        if end_name.is_empty() {
            self.missing(DiagnosticKind::ExpectedName, None);
        } else if end_name == name {
            self.parse_eqname();
        } else {
            let m = self.start();
            self.parse_eqname();
            m.error(self, DiagnosticKind::MismatchedEndTag, Some(name.to_string()));
        }
        self.expect(TagClose);
    }

    pub(super) fn at_computed_constructor(&self) -> bool {
        let named = || {
            self.nth_at(1, BraceOpen) || {
                let len = self.eqname_len(1);
                len > 0 && self.nth_at(1 + len, BraceOpen)
            }
        };
        match self.current() {
            KwDocument | KwText | KwComment => self.nth_at(1, BraceOpen),
            KwElement | KwAttribute | KwNamespace | KwProcessingInstruction => named(),
            _ => false,
        }
    }

    pub(super) fn parse_computed_constructor(&mut self) {
        let (kind, named) = match self.current() {
            KwDocument => (CompDocConstructor, false),
            KwText => (CompTextConstructor, false),
            KwComment => (CompCommentConstructor, false),
            KwElement => (CompElemConstructor, true),
            KwAttribute => (CompAttrConstructor, true),
            KwNamespace => (CompNamespaceConstructor, true),
            _ => (CompPiConstructor, true),
        };
        if kind == CompNamespaceConstructor && !self.feature(Features::XQUERY_30) {
            let introducer = 1 + self.eqname_len(1);
            self.unsupported_construct(
                Features::XQUERY_30,
                "computed namespace constructor",
                introducer,
            );
            return;
        }
        let m = self.start();
        self.bump();
        if named {
            if self.at(BraceOpen) {
                self.parse_enclosed_expr();
            } else {
                self.parse_eqname_or_missing();
            }
        }
        self.parse_enclosed_expr();
        m.done(self, kind);
    }
}
