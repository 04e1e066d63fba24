//! Markers: handles to nodes under construction.
//!
//! Markers follow a strict stack discipline: an inner marker is completed
//! (`done`, `abandon`, `rollback` or `error`) before the outer one.

use rowan::TextSize;

use super::core::Parser;
use super::cst::SyntaxKind;
use super::event::Event;
use crate::diagnostics::DiagnosticKind;

/// Parser state restored by [`Marker::rollback`].
#[derive(Debug, Clone, Copy)]
pub(super) struct Checkpoint {
    pub(super) pos: usize,
    pub(super) diagnostics: usize,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiters: usize,
}

#[must_use = "markers must be completed"]
#[derive(Debug)]
pub(super) struct Marker {
    event: usize,
    /// Index of the first significant token covered by the node.
    start: usize,
    checkpoint: Checkpoint,
}

impl Marker {
    pub(super) fn new(event: usize, start: usize, checkpoint: Checkpoint) -> Self {
        Self {
            event,
            start,
            checkpoint,
        }
    }

    /// Completes the node as `kind`.
    pub(super) fn done(self, p: &mut Parser, kind: SyntaxKind) -> CompletedMarker {
        p.events[self.event] = Event::Start {
            kind,
            forward_parent: None,
        };
        p.events.push(Event::Finish);
        CompletedMarker {
            event: self.event,
            start: self.start,
        }
    }

    /// Drops the node; its children are attached to the parent.
    pub(super) fn abandon(self, p: &mut Parser) {
        if self.event == p.events.len() - 1 {
            p.events.pop();
        }
    }

    /// Undoes everything recorded since the marker: events, diagnostics and
    /// token position. The token vector itself is untouched.
    pub(super) fn rollback(self, p: &mut Parser) {
        p.events.truncate(self.event);
        p.restore(self.checkpoint);
    }

    /// Completes the node as an `Error` node and reports `kind` over its range.
    pub(super) fn error(
        self,
        p: &mut Parser,
        kind: DiagnosticKind,
        detail: Option<String>,
    ) -> CompletedMarker {
        let range = p.range_since(self.start);
        p.report(kind, range, detail);
        self.done(p, SyntaxKind::Error)
    }

    /// Whether any token was consumed since the marker was opened.
    pub(super) fn consumed(&self, p: &Parser) -> bool {
        p.token_pos() > self.start
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct CompletedMarker {
    event: usize,
    start: usize,
}

impl CompletedMarker {
    /// Opens a marker that becomes the parent of this node.
    pub(super) fn precede(self, p: &mut Parser) -> Marker {
        let m = p.start_at(self.start);
        if let Event::Start { forward_parent, .. } = &mut p.events[self.event] {
            *forward_parent = Some((m.event - self.event) as u32);
        }
        m
    }
}
