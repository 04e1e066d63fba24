//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Every lookahead burns fuel and every bump refills it, so a loop that
    /// stops consuming trips this assertion instead of spinning forever.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "no token consumed after repeated lookahead"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }

    /// Callers only consume a token they have already checked for.
    #[inline]
    pub(super) fn assert_current(&self, kind: SyntaxKind) {
        debug_assert_eq!(self.current(), kind, "grammar consumed a token it did not check");
    }
}
