//! Error recovery helpers shared by the grammar.
//!
//! - Missing token or operand: zero-width `Error` node, parsing continues as if present
//! - Unexpected tokens: skipped into one `Error` node up to the production's recovery set,
//!   never past a closing delimiter that belongs to an enclosing construct
//! - Unclosed delimiters: reported at the point of discovery with the opener as related span
//! - Nesting limit: the rest of the input becomes one `Error` node

use tracing::debug;

use super::core::Parser;
use super::cst::SyntaxKind::{self, *};
use super::cst::TokenSet;
use super::cst::token_sets::CLOSERS;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    /// Skips to `recovery` (or an enclosing closer) and wraps the skipped tokens in an
    /// `Error` node. At a recovery point already, records a zero-width `Error` node.
    pub(super) fn error_recover(
        &mut self,
        kind: DiagnosticKind,
        detail: Option<String>,
        recovery: TokenSet,
    ) {
        if self.eof() || self.at_set(recovery) || self.at_set(CLOSERS) {
            self.missing(kind, detail);
            return;
        }
        let m = self.start();
        self.skip_balanced(recovery);
        m.error(self, kind, detail);
    }

    /// Consumes `kind`, first skipping stray tokens that sit before it.
    /// When an expression follows instead, `kind` is treated as missing.
    pub(super) fn expect_recovering(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        if self.at_expr_start() {
            self.expect(kind);
            return false;
        }
        self.error_recover(
            DiagnosticKind::ExpectedToken,
            Some(kind.describe()),
            TokenSet::single(kind),
        );
        self.eat(kind)
    }

    /// Reports the current token as unexpected and skips to `recovery`.
    pub(super) fn recover_unexpected(&mut self, recovery: TokenSet) {
        if let Some((feature, what)) = self.disabled_operator() {
            let detail = format!("{what} requires {}", feature.accepted_by());
            self.error_recover(DiagnosticKind::UnsupportedSyntax, Some(detail), recovery);
            return;
        }
        let detail = if self.eof() {
            "end of input".to_string()
        } else {
            self.current().describe()
        };
        self.error_recover(DiagnosticKind::UnexpectedToken, Some(detail), recovery);
    }

    /// Consumes tokens until a member of `recovery` or an unmatched closer at depth zero.
    pub(super) fn skip_balanced(&mut self, recovery: TokenSet) {
        let mut depth = 0u32;
        while !self.eof() {
            let kind = self.current();
            if depth == 0 && (recovery.contains(kind) || CLOSERS.contains(kind)) {
                break;
            }
            match kind {
                ParenOpen | BracketOpen | BraceOpen | InterpolationOpen => depth += 1,
                ParenClose | BracketClose | BraceClose | InterpolationClose => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Consumes the opener at the current token through its matching closer.
    pub(super) fn skip_group(&mut self) {
        let mut depth = 0u32;
        while !self.eof() {
            match self.current() {
                ParenOpen | BracketOpen | BraceOpen | InterpolationOpen => depth += 1,
                ParenClose | BracketClose | BraceClose | InterpolationClose => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.bump();
            if depth == 0 {
                break;
            }
        }
    }

    /// Consumes an opening delimiter and remembers where it was.
    pub(super) fn open_delimiter(&mut self, kind: SyntaxKind) {
        self.assert_current(kind);
        self.push_delimiter(kind);
        self.bump();
    }

    /// Consumes the matching closer, or reports the delimiter as unclosed.
    pub(super) fn close_delimiter(&mut self, closer: SyntaxKind) -> bool {
        let open = self.pop_delimiter();
        if self.eat(closer) {
            return true;
        }
        match open {
            Some(open) => self.error_unclosed_delimiter(open, closer),
            None => {
                self.expect(closer);
            }
        }
        false
    }

    /// Skips stray tokens before `closer`, then closes the group.
    pub(super) fn close_group(&mut self, closer: SyntaxKind) -> bool {
        if !self.eof() && !self.at(closer) && !self.at_set(CLOSERS) {
            self.recover_unexpected(TokenSet::single(closer));
        }
        self.close_delimiter(closer)
    }

    /// Parses `item (',' item)*` up to `closer`, skipping garbage between items.
    /// Does not consume the closer.
    pub(super) fn comma_list(&mut self, closer: SyntaxKind, mut item: impl FnMut(&mut Self)) {
        if self.at(closer) {
            return;
        }
        let recovery = TokenSet::new(&[Comma]).union(TokenSet::single(closer));
        loop {
            item(self);
            if self.eat(Comma) {
                continue;
            }
            if self.eof() || self.at(closer) || self.at_set(CLOSERS) {
                break;
            }
            self.recover_unexpected(recovery);
            if !self.eat(Comma) {
                break;
            }
        }
    }

    /// Runs `f` one nesting level deeper. Past the limit, the rest of the input
    /// becomes one `Error` node and `f` is not called.
    pub(super) fn nested<R>(&mut self, fallback: R, f: impl FnOnce(&mut Self) -> R) -> R {
        if !self.enter_recursion() {
            self.nesting_too_deep();
            return fallback;
        }
        let result = f(self);
        self.exit_recursion();
        result
    }

    fn nesting_too_deep(&mut self) {
        if self.nesting_exceeded {
            return;
        }
        debug!(depth = self.depth, "recursion limit reached");
        let m = self.start();
        while !self.eof() {
            self.bump();
        }
        m.error(self, DiagnosticKind::NestingTooDeep, None);
        self.nesting_exceeded = true;
    }
}
