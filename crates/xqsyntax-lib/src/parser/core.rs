//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::event::Event;
use super::lexer::{Token, token_text};
use super::marker::{Checkpoint, Marker};
use crate::ParseOptions;
use crate::dialect::{DialectConfig, Features};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

pub(super) const DEBUG_FUEL: u32 = 4096;

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Recursive-descent parser over the significant tokens of one source.
///
/// Trivia never reaches the grammar: the parser sees only significant tokens and
/// records events; the sink re-inserts trivia when the tree is built.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    /// Significant tokens only.
    tokens: Vec<Token>,
    pos: usize,
    features: Features,
    pub(super) events: Vec<Event>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    recursion_limit: u32,
    /// Set once the recursion limit is hit; later diagnostics are suppressed.
    pub(super) nesting_exceeded: bool,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(
        source: &'src str,
        tokens: &[Token],
        dialect: DialectConfig,
        options: ParseOptions,
    ) -> Self {
        let tokens = tokens
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .copied()
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
            features: dialect.features(),
            events: Vec::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            recursion_limit: options.recursion_limit,
            nesting_exceeded: false,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: Cell::new(DEBUG_FUEL),
        }
    }

    pub(super) fn finish(self) -> (Vec<Event>, Diagnostics) {
        (self.events, self.diagnostics)
    }

    #[inline]
    pub(super) fn feature(&self, feature: Features) -> bool {
        self.features.contains(feature)
    }

    pub(super) fn any_feature(&self, features: Features) -> bool {
        self.features.intersects(features)
    }

    pub(super) fn is_xquery(&self) -> bool {
        self.feature(Features::XQUERY)
    }

    // --- lookahead ---

    pub(super) fn token_pos(&self) -> usize {
        self.pos
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    /// Kind of the `n`th significant token ahead; `Error` past the end.
    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + n)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        !self.eof() && self.current() == kind
    }

    pub(super) fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.pos + n < self.tokens.len() && self.nth(n) == kind
    }

    pub(super) fn at_set(&self, set: TokenSet) -> bool {
        !self.eof() && set.contains(self.current())
    }

    pub(super) fn nth_at_set(&self, n: usize, set: TokenSet) -> bool {
        self.pos + n < self.tokens.len() && set.contains(self.nth(n))
    }

    /// Whether the `n`th token starts exactly where the previous one ends.
    pub(super) fn nth_adjacent(&self, n: usize) -> bool {
        if n == 0 || self.pos + n >= self.tokens.len() {
            return false;
        }
        let prev = self.tokens[self.pos + n - 1];
        let next = self.tokens[self.pos + n];
        prev.span.end() == next.span.start()
    }

    pub(super) fn nth_text(&self, n: usize) -> &'src str {
        self.tokens
            .get(self.pos + n)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.nth_text(0)
    }

    pub(super) fn at_text(&self, text: &str) -> bool {
        !self.eof() && self.current_text() == text
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    /// Range from token `start` to the last consumed token; empty at the current
    /// position when nothing was consumed.
    pub(super) fn range_since(&self, start: usize) -> TextRange {
        if self.pos > start {
            let first = self.tokens[start].span.start();
            let last = self.tokens[self.pos - 1].span.end();
            TextRange::new(first, last)
        } else {
            TextRange::empty(self.current_span().start())
        }
    }

    // --- markers ---

    pub(super) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            diagnostics: self.diagnostics.len(),
            last_diagnostic_pos: self.last_diagnostic_pos,
            delimiters: self.delimiter_stack.len(),
        }
    }

    pub(super) fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.diagnostics.truncate(checkpoint.diagnostics);
        self.last_diagnostic_pos = checkpoint.last_diagnostic_pos;
        self.delimiter_stack.truncate(checkpoint.delimiters);
        self.reset_debug_fuel();
    }

    pub(super) fn start(&mut self) -> Marker {
        self.start_at(self.pos)
    }

    pub(super) fn start_at(&mut self, start: usize) -> Marker {
        let event = self.events.len();
        self.events.push(Event::Tombstone);
        Marker::new(event, start, self.checkpoint())
    }

    // --- consuming ---

    pub(super) fn bump(&mut self) {
        let kind = self.current();
        self.bump_remap(kind);
    }

    /// Consumes the current token, recording it as `kind`.
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.events.push(Event::Token { kind });
        self.pos += 1;
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes `kind`, or records a zero-width `Error` node naming it.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.missing(DiagnosticKind::ExpectedToken, Some(kind.describe()));
        false
    }

    /// Zero-width `Error` node at the current position.
    pub(super) fn missing(&mut self, kind: DiagnosticKind, detail: Option<String>) {
        let m = self.start();
        m.error(self, kind, detail);
    }

    // --- diagnostics ---

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.nesting_exceeded || self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn report(&mut self, kind: DiagnosticKind, range: TextRange, detail: Option<String>) {
        if !self.should_report(range.start()) {
            return;
        }
        let builder = self.diagnostics.report(kind, range);
        match detail {
            Some(detail) => builder.message(detail).emit(),
            None => builder.emit(),
        }
    }

    /// Reports at the current token without consuming it.
    pub(super) fn error_here(&mut self, kind: DiagnosticKind, detail: Option<String>) {
        let range = self.current_span();
        self.report(kind, range, detail);
    }

    /// Wraps the current token in an `Error` node.
    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind, detail: Option<String>) {
        if self.eof() {
            self.missing(kind, detail);
            return;
        }
        let m = self.start();
        self.bump();
        m.error(self, kind, detail);
    }

    /// Reports the current token as unexpected and wraps it in an `Error` node.
    pub(super) fn unexpected(&mut self) {
        if let Some((feature, what)) = self.disabled_operator() {
            return self.unsupported(feature, what);
        }
        let detail = self.current().describe();
        self.error_and_bump(DiagnosticKind::UnexpectedToken, Some(detail));
    }

    pub(super) fn unsupported(&mut self, feature: Features, what: &str) {
        let detail = format!("{what} requires {}", feature.accepted_by());
        self.error_and_bump(DiagnosticKind::UnsupportedSyntax, Some(detail));
    }

    // --- recursion ---

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // --- delimiters ---

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Reports a missing closer, pointing back at the opener.
    pub(super) fn error_unclosed_delimiter(&mut self, open: OpenDelimiter, closer: SyntaxKind) {
        let current = self.current_span();
        let m = self.start();
        m.done(self, SyntaxKind::Error);
        if !self.should_report(current.start()) {
            return;
        }
        self.diagnostics
            .report(DiagnosticKind::UnclosedDelimiter, TextRange::empty(current.start()))
            .message(closer.describe())
            .related_to(format!("{} opened here", open.kind.describe()), open.span)
            .emit();
    }
}
