//! Lexer for XPath and XQuery.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! Expression text is recognized by the Logos-derived `SyntaxKind` lexer, one token at a time,
//! because XQuery is not context-free at the lexical level: direct element constructors, string
//! constructors and string templates switch to scanners that know nothing about operators.
//! The active scanners form a stack of [`Mode`]s.
//!
//! ## Error handling
//!
//! Lexing is total. Every unrecognized character becomes its own `BadCharacter` token; an
//! unterminated comment, CDATA section or pragma runs to the end of input. Lexical diagnostics
//! are returned alongside the tokens.

use logos::Logos;
use rowan::{TextRange, TextSize};
use tracing::trace;

use super::cst::SyntaxKind;
use crate::delimit::{SpaceRequirement, space_requirement};
use crate::dialect::{DialectConfig, Features};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

/// Tokenizes source, dropping lexical diagnostics.
pub fn tokenize(source: &str, dialect: DialectConfig) -> Vec<Token> {
    lex(source, dialect).0
}

/// Tokenizes source into span-based tokens plus lexical diagnostics.
///
/// The token spans are contiguous and cover `source` exactly.
pub fn lex(source: &str, dialect: DialectConfig) -> (Vec<Token>, Diagnostics) {
    let mut lexer = Lexer::new(source, dialect);
    lexer.run();
    trace!(tokens = lexer.tokens.len(), "lexed");
    (lexer.tokens, lexer.diagnostics)
}

/// How an expression mode ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closer {
    /// Top level: runs to end of input.
    Eof,
    /// Enclosed expression in XML content, an attribute value or a string template.
    Brace,
    /// `` `{ ... }` `` inside a string constructor.
    Interpolation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Expr { braces: u32, closer: Closer },
    StartTag,
    AttrValue(u8),
    ElemContent,
    EndTag,
    StringConstructor,
    StringTemplate,
}

struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    xquery: bool,
    string_constructors: bool,
    string_templates: bool,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
    modes: Vec<Mode>,
    /// Last two significant token kinds, most recent first.
    recent: [Option<SyntaxKind>; 2],
}

fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str, dialect: DialectConfig) -> Self {
        Self {
            source,
            pos: 0,
            xquery: dialect.is_enabled(Features::XQUERY),
            string_constructors: dialect.is_enabled(Features::STRING_CONSTRUCTOR),
            string_templates: dialect.is_enabled(Features::STRING_TEMPLATE),
            tokens: Vec::new(),
            diagnostics: Diagnostics::new(),
            modes: vec![Mode::Expr {
                braces: 0,
                closer: Closer::Eof,
            }],
            recent: [None, None],
        }
    }

    fn run(&mut self) {
        while self.pos < self.source.len() {
            let before = (self.pos, self.modes.len());
            let mode = self.modes.last().copied().unwrap_or(Mode::Expr {
                braces: 0,
                closer: Closer::Eof,
            });
            match mode {
                Mode::Expr { .. } => self.lex_expr(),
                Mode::StartTag => self.lex_start_tag(),
                Mode::AttrValue(quote) => self.lex_attr_value(quote),
                Mode::ElemContent => self.lex_elem_content(),
                Mode::EndTag => self.lex_end_tag(),
                Mode::StringConstructor => self.lex_string_constructor(),
                Mode::StringTemplate => self.lex_string_template(),
            }
            // Tag modes may pop without consuming to let the enclosing mode re-lex.
            if (self.pos, self.modes.len()) == before {
                self.bad_character();
            }
        }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn at(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn nth_byte(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + n).copied()
    }

    fn push(&mut self, kind: SyntaxKind, len: usize) {
        let start = self.pos;
        self.pos += len;
        self.tokens.push(Token::new(kind, text_range(start, self.pos)));
        if !kind.is_trivia() {
            self.recent = [Some(kind), self.recent[0]];
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if let Some(top) = self.modes.last_mut() {
            *top = mode;
        }
    }

    fn pop_mode(&mut self) {
        if self.modes.len() > 1 {
            self.modes.pop();
        }
    }

    fn bad_character(&mut self) {
        let len = self.rest().chars().next().map_or(1, char::len_utf8);
        self.diagnostics
            .report(DiagnosticKind::BadCharacter, text_range(self.pos, self.pos + len))
            .emit();
        self.push(SyntaxKind::BadCharacter, len);
    }

    /// Runs the Logos recognizer on the remaining input, returning the first token.
    fn logos_token(&self) -> Option<(SyntaxKind, usize)> {
        let mut lexer = SyntaxKind::lexer(self.rest());
        match lexer.next() {
            Some(Ok(kind)) => Some((kind, lexer.span().len())),
            _ => None,
        }
    }

    // --- expression mode ---

    fn lex_expr(&mut self) {
        if self.at("(:") {
            return self.lex_comment();
        }
        if self.xquery && self.at("(#") {
            return self.lex_pragma();
        }
        match self.nth_byte(0) {
            Some(b'"') | Some(b'\'') => return self.lex_string_literal(),
            Some(b'<') if self.xquery && self.is_operand_position() => {
                if self.lex_markup() {
                    return;
                }
            }
            Some(b'`') => {
                if self.string_constructors && self.at("``[") {
                    self.push(SyntaxKind::StringConstructorOpen, 3);
                    self.modes.push(Mode::StringConstructor);
                    return;
                }
                if self.string_templates {
                    self.push(SyntaxKind::Backtick, 1);
                    self.modes.push(Mode::StringTemplate);
                    return;
                }
            }
            Some(b'{') => {
                if let Some(Mode::Expr { braces, closer }) = self.modes.last().copied() {
                    self.set_mode(Mode::Expr {
                        braces: braces + 1,
                        closer,
                    });
                }
                self.push(SyntaxKind::BraceOpen, 1);
                return;
            }
            Some(b'}') => return self.lex_brace_close(),
            _ => {}
        }

        let Some((kind, len)) = self.logos_token() else {
            return self.bad_character();
        };
        self.check_delimitation(kind);
        self.push(kind, len);
    }

    fn lex_brace_close(&mut self) {
        let Some(Mode::Expr { braces, closer }) = self.modes.last().copied() else {
            return self.push(SyntaxKind::BraceClose, 1);
        };
        if braces > 0 {
            self.set_mode(Mode::Expr {
                braces: braces - 1,
                closer,
            });
            return self.push(SyntaxKind::BraceClose, 1);
        }
        match closer {
            Closer::Brace => {
                self.modes.pop();
                self.push(SyntaxKind::BraceClose, 1);
            }
            Closer::Interpolation if self.at("}`") => {
                self.modes.pop();
                self.push(SyntaxKind::InterpolationClose, 2);
            }
            Closer::Interpolation | Closer::Eof => self.push(SyntaxKind::BraceClose, 1),
        }
    }

    /// Flags adjacent tokens that would re-lex as one.
    fn check_delimitation(&mut self, next: SyntaxKind) {
        let Some(prev) = self.tokens.last().copied() else {
            return;
        };
        if usize::from(prev.span.end()) != self.pos {
            return;
        }
        if space_requirement(prev.kind, next) == SpaceRequirement::Required {
            let detail = format!("{} and {}", prev.kind.describe(), next.describe());
            self.diagnostics
                .report(DiagnosticKind::MissingWhitespace, text_range(self.pos, self.pos))
                .message(detail)
                .emit();
        }
    }

    /// Whether a `<` here would start an operand rather than continue one.
    fn is_operand_position(&self) -> bool {
        use SyntaxKind::*;
        let [Some(prev), before] = self.recent else {
            return true;
        };
        let ends_operand = match prev {
            kind if kind.is_numeric_literal() => true,
            NCName | BracedUriLiteral | ParenClose | BracketClose | BraceClose | Dot | DotDot
            | Star | Question | DoubleQuote | SingleQuote | TagClose | EmptyTagClose
            | XmlCommentClose | PiClose | CDataClose | StringConstructorClose | Backtick => true,
            kind if kind.is_keyword() => matches!(
                before,
                Some(Dollar | Slash | SlashSlash | At | ColonColon | Colon)
            ),
            _ => false,
        };
        !ends_operand
    }

    /// Direct constructors starting with `<`. Returns false when `<` is an operator.
    fn lex_markup(&mut self) -> bool {
        if self.at("<!--") {
            self.lex_xml_comment();
            return true;
        }
        if self.at("<?") && self.rest()[2..].chars().next().is_some_and(is_name_start) {
            self.lex_processing_instruction();
            return true;
        }
        if self.rest()[1..].chars().next().is_some_and(is_name_start) {
            self.push(SyntaxKind::StartTagOpen, 1);
            self.modes.push(Mode::StartTag);
            return true;
        }
        false
    }

    fn lex_comment(&mut self) {
        let start = self.pos;
        let bytes = self.source.as_bytes();
        let mut depth = 0u32;
        let mut i = self.pos;
        while i < bytes.len() {
            if bytes[i..].starts_with(b"(:") {
                depth += 1;
                i += 2;
            } else if bytes[i..].starts_with(b":)") {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    self.push(SyntaxKind::Comment, i - start);
                    return;
                }
            } else {
                i += 1;
            }
        }
        self.diagnostics
            .report(
                DiagnosticKind::UnclosedComment,
                text_range(start, self.source.len()),
            )
            .emit();
        self.push(SyntaxKind::Comment, self.source.len() - start);
    }

    fn lex_string_literal(&mut self) {
        let quote = self.nth_byte(0).unwrap_or(b'"');
        self.push(quote_kind(quote), 1);
        loop {
            match self.nth_byte(0) {
                None => return,
                Some(b) if b == quote => {
                    if self.nth_byte(1) == Some(quote) {
                        self.push(SyntaxKind::EscapedQuote, 2);
                    } else {
                        self.push(quote_kind(quote), 1);
                        return;
                    }
                }
                Some(b'&') if self.xquery => self.lex_reference(),
                Some(_) => {
                    let stops: &[u8] = if self.xquery { &[quote, b'&'] } else { &[quote] };
                    let len = self.run_until(stops);
                    self.push(SyntaxKind::StringContents, len);
                }
            }
        }
    }

    fn lex_pragma(&mut self) {
        let start = self.pos;
        self.push(SyntaxKind::PragmaOpen, 2);
        self.lex_whitespace();
        while let Some((kind, len)) = self.logos_token() {
            if !(kind == SyntaxKind::NCName
                || kind.is_keyword()
                || kind == SyntaxKind::Colon
                || kind == SyntaxKind::BracedUriLiteral)
            {
                break;
            }
            self.push(kind, len);
        }
        match self.rest().find("#)") {
            Some(offset) => {
                if offset > 0 {
                    self.push(SyntaxKind::PragmaContents, offset);
                }
                self.push(SyntaxKind::PragmaClose, 2);
            }
            None => {
                self.diagnostics
                    .report(
                        DiagnosticKind::UnclosedPragma,
                        text_range(start, self.source.len()),
                    )
                    .emit();
                let len = self.source.len() - self.pos;
                if len > 0 {
                    self.push(SyntaxKind::PragmaContents, len);
                }
            }
        }
    }

    // --- XML ---

    fn lex_whitespace(&mut self) {
        let len = self
            .rest()
            .bytes()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            .count();
        if len > 0 {
            self.push(SyntaxKind::Whitespace, len);
        }
    }

    /// Scans a `<!--`/`<?`/`<![CDATA[` construct up to its terminator.
    fn lex_delimited(
        &mut self,
        contents: SyntaxKind,
        close: SyntaxKind,
        terminator: &str,
        unclosed: DiagnosticKind,
        start: usize,
    ) {
        match self.rest().find(terminator) {
            Some(offset) => {
                if offset > 0 {
                    self.push(contents, offset);
                }
                self.push(close, terminator.len());
            }
            None => {
                self.diagnostics
                    .report(unclosed, text_range(start, self.source.len()))
                    .emit();
                let len = self.source.len() - self.pos;
                if len > 0 {
                    self.push(contents, len);
                }
            }
        }
    }

    fn lex_xml_comment(&mut self) {
        let start = self.pos;
        self.push(SyntaxKind::XmlCommentOpen, 4);
        self.lex_delimited(
            SyntaxKind::XmlCommentContents,
            SyntaxKind::XmlCommentClose,
            "-->",
            DiagnosticKind::UnclosedXmlComment,
            start,
        );
    }

    fn lex_processing_instruction(&mut self) {
        let start = self.pos;
        self.push(SyntaxKind::PiOpen, 2);
        if let Some((kind, len)) = self.logos_token()
            && (kind == SyntaxKind::NCName || kind.is_keyword())
        {
            self.push(kind, len);
        }
        self.lex_delimited(
            SyntaxKind::PiContents,
            SyntaxKind::PiClose,
            "?>",
            DiagnosticKind::UnclosedProcessingInstruction,
            start,
        );
    }

    fn lex_cdata(&mut self) {
        let start = self.pos;
        self.push(SyntaxKind::CDataOpen, 9);
        self.lex_delimited(
            SyntaxKind::CDataContents,
            SyntaxKind::CDataClose,
            "]]>",
            DiagnosticKind::UnclosedCData,
            start,
        );
    }

    /// Name parts inside tags: NCName, keywords and `:`.
    fn lex_tag_name_part(&mut self) -> bool {
        match self.logos_token() {
            Some((kind, len))
                if kind == SyntaxKind::NCName || kind.is_keyword() || kind == SyntaxKind::Colon =>
            {
                self.push(kind, len);
                true
            }
            _ => false,
        }
    }

    fn lex_start_tag(&mut self) {
        match self.nth_byte(0) {
            Some(b' ' | b'\t' | b'\r' | b'\n') => self.lex_whitespace(),
            Some(b'/') if self.at("/>") => {
                self.push(SyntaxKind::EmptyTagClose, 2);
                self.pop_mode();
            }
            Some(b'>') => {
                self.push(SyntaxKind::TagClose, 1);
                self.set_mode(Mode::ElemContent);
            }
            Some(b'=') => self.push(SyntaxKind::Equals, 1),
            Some(quote @ (b'"' | b'\'')) => {
                self.push(quote_kind(quote), 1);
                self.modes.push(Mode::AttrValue(quote));
            }
            _ => {
                if !self.lex_tag_name_part() {
                    // Malformed tag: hand the rest back to the enclosing mode.
                    self.pop_mode();
                }
            }
        }
    }

    fn lex_end_tag(&mut self) {
        match self.nth_byte(0) {
            Some(b' ' | b'\t' | b'\r' | b'\n') => self.lex_whitespace(),
            Some(b'>') => {
                self.push(SyntaxKind::TagClose, 1);
                self.pop_mode();
            }
            _ => {
                if !self.lex_tag_name_part() {
                    self.pop_mode();
                }
            }
        }
    }

    fn lex_attr_value(&mut self, quote: u8) {
        match self.nth_byte(0) {
            Some(b) if b == quote => {
                if self.nth_byte(1) == Some(quote) {
                    self.push(SyntaxKind::EscapedQuote, 2);
                } else {
                    self.push(quote_kind(quote), 1);
                    self.pop_mode();
                }
            }
            Some(b'{' | b'}') => self.lex_template_brace(),
            Some(b'&') => self.lex_reference(),
            _ => {
                let len = self.run_until(&[quote, b'{', b'}', b'&']);
                self.push(SyntaxKind::AttrValueChars, len);
            }
        }
    }

    fn lex_elem_content(&mut self) {
        match self.nth_byte(0) {
            Some(b'<') => {
                if self.at("</") {
                    self.push(SyntaxKind::EndTagOpen, 2);
                    self.set_mode(Mode::EndTag);
                } else if self.at("<![CDATA[") {
                    self.lex_cdata();
                } else if !self.lex_markup() {
                    self.bad_character();
                }
            }
            Some(b'{' | b'}') => self.lex_template_brace(),
            Some(b'&') => self.lex_reference(),
            _ => {
                let len = self.run_until(&[b'<', b'{', b'}', b'&']);
                self.push(SyntaxKind::XmlContentChars, len);
            }
        }
    }

    /// `{{`, `}}`, or an enclosed expression opening brace.
    fn lex_template_brace(&mut self) {
        if self.at("{{") || self.at("}}") {
            return self.push(SyntaxKind::EscapedBrace, 2);
        }
        if self.at("{") {
            self.push(SyntaxKind::BraceOpen, 1);
            self.modes.push(Mode::Expr {
                braces: 0,
                closer: Closer::Brace,
            });
            return;
        }
        self.push(SyntaxKind::BraceClose, 1);
    }

    /// `&lt;`, `&#60;`, `&#x3C;`. Anything else starting with `&` is reported.
    fn lex_reference(&mut self) {
        let rest = self.rest();
        let end = rest[1..]
            .find(|c: char| c == ';' || c.is_whitespace() || matches!(c, '&' | '<' | '"' | '\''))
            .map(|i| i + 1)
            .filter(|&i| rest.as_bytes()[i] == b';');

        let Some(end) = end else {
            self.diagnostics
                .report(
                    DiagnosticKind::InvalidEntityReference,
                    text_range(self.pos, self.pos + 1),
                )
                .emit();
            let kind = match self.modes.last() {
                Some(Mode::AttrValue(_)) => SyntaxKind::AttrValueChars,
                Some(Mode::ElemContent) => SyntaxKind::XmlContentChars,
                _ => SyntaxKind::StringContents,
            };
            return self.push(kind, 1);
        };

        let body = &rest[1..end];
        let (kind, valid) = if let Some(number) = body.strip_prefix('#') {
            let value = match number.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => number.parse::<u32>().ok(),
            };
            (SyntaxKind::CharRef, value.is_some_and(is_xml_char))
        } else {
            (
                SyntaxKind::PredefinedEntityRef,
                matches!(body, "lt" | "gt" | "amp" | "quot" | "apos"),
            )
        };
        if !valid {
            self.diagnostics
                .report(
                    DiagnosticKind::InvalidEntityReference,
                    text_range(self.pos, self.pos + end + 1),
                )
                .message(format!("`{}`", &rest[..=end]))
                .emit();
        }
        self.push(kind, end + 1);
    }

    // --- string constructors and templates ---

    fn lex_string_constructor(&mut self) {
        if self.at("]``") {
            self.push(SyntaxKind::StringConstructorClose, 3);
            self.pop_mode();
        } else if self.at("`{") {
            self.push(SyntaxKind::InterpolationOpen, 2);
            self.modes.push(Mode::Expr {
                braces: 0,
                closer: Closer::Interpolation,
            });
        } else {
            let rest = self.rest();
            let len = [rest.find("]``"), rest.find("`{")]
                .into_iter()
                .flatten()
                .min()
                .unwrap_or(rest.len());
            self.push(SyntaxKind::StringConstructorChars, len);
        }
    }

    fn lex_string_template(&mut self) {
        match self.nth_byte(0) {
            Some(b'`') => {
                if self.nth_byte(1) == Some(b'`') {
                    self.push(SyntaxKind::EscapedBacktick, 2);
                } else {
                    self.push(SyntaxKind::Backtick, 1);
                    self.pop_mode();
                }
            }
            Some(b'{' | b'}') => self.lex_template_brace(),
            _ => {
                let len = self.run_until(&[b'`', b'{', b'}']);
                self.push(SyntaxKind::StringTemplateChars, len);
            }
        }
    }

    /// Byte length of the run before the first of `stops` (or end of input). At least 1.
    fn run_until(&self, stops: &[u8]) -> usize {
        let rest = self.rest().as_bytes();
        let len = rest
            .iter()
            .position(|b| stops.contains(b))
            .unwrap_or(rest.len());
        // Stops are ASCII, so the run ends on a char boundary.
        len.max(1)
    }
}

fn quote_kind(quote: u8) -> SyntaxKind {
    if quote == b'\'' {
        SyntaxKind::SingleQuote
    } else {
        SyntaxKind::DoubleQuote
    }
}

/// XML `NameStartChar` minus `:`.
pub(crate) fn is_name_start(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z' | '_'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}

fn is_xml_char(value: u32) -> bool {
    matches!(value, 0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF)
}
