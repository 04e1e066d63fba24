//! Parser events and the sink that turns them into a green tree.
//!
//! The grammar never touches the tree builder directly. It appends events to a flat buffer,
//! which keeps `precede` (wrapping an already finished node) and `rollback` (discarding a
//! speculative parse) cheap: both are index manipulations on a `Vec`.

use rowan::{GreenNode, GreenNodeBuilder};

use super::cst::SyntaxKind;
use super::lexer::{Token, token_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Event {
    /// Opens a node. `forward_parent` is the distance to a node that
    /// must be opened before this one (set by `CompletedMarker::precede`).
    Start {
        kind: SyntaxKind,
        forward_parent: Option<u32>,
    },
    /// Consumes the next significant token, emitted as `kind`.
    Token { kind: SyntaxKind },
    Finish,
    /// Open marker, or a node that was abandoned.
    Tombstone,
}

/// Builds the tree, interleaving trivia from the raw token stream.
///
/// Trivia before a node start belongs to the parent; trivia left before the
/// root closes is appended to the root.
pub(super) fn build_tree(source: &str, tokens: &[Token], mut events: Vec<Event>) -> GreenNode {
    let mut sink = Sink {
        source,
        tokens,
        pos: 0,
        depth: 0,
        builder: GreenNodeBuilder::new(),
    };
    let mut parents = Vec::new();

    for i in 0..events.len() {
        match std::mem::replace(&mut events[i], Event::Tombstone) {
            Event::Start {
                kind,
                forward_parent,
            } => {
                parents.push(kind);
                let mut idx = i;
                let mut next = forward_parent;
                while let Some(distance) = next {
                    idx += distance as usize;
                    next = match std::mem::replace(&mut events[idx], Event::Tombstone) {
                        Event::Start {
                            kind,
                            forward_parent,
                        } => {
                            parents.push(kind);
                            forward_parent
                        }
                        _ => None,
                    };
                }
                for kind in parents.drain(..).rev() {
                    sink.start_node(kind);
                }
            }
            Event::Token { kind } => sink.token(kind),
            Event::Finish => sink.finish_node(),
            Event::Tombstone => {}
        }
    }

    sink.builder.finish()
}

struct Sink<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    builder: GreenNodeBuilder<'static>,
}

impl Sink<'_> {
    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder
                .token(token.kind.into(), token_text(self.source, token));
            self.pos += 1;
        }
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        if self.depth > 0 {
            self.eat_trivia();
        }
        self.builder.start_node(kind.into());
        self.depth += 1;
    }

    fn finish_node(&mut self) {
        if self.depth == 1 {
            self.eat_trivia();
        }
        self.builder.finish_node();
        self.depth -= 1;
    }

    fn token(&mut self, kind: SyntaxKind) {
        self.eat_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder
                .token(kind.into(), token_text(self.source, token));
            self.pos += 1;
        }
    }
}
