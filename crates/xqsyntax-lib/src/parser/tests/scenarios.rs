//! Small end-to-end cases: empty input, bad characters, missing operands, error lookup.

use rowan::{NodeOrToken, TextRange};

use crate::diagnostics::DiagnosticKind;
use crate::parser::tests::{xpath, xquery};
use crate::parser::{SyntaxKind, parse};

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn empty_input_is_an_empty_root() {
    for dialect in [xpath(), xquery()] {
        let parse = parse("", dialect);
        let root = parse.syntax();
        assert_eq!(root.kind(), SyntaxKind::Root);
        assert_eq!(root.text_range(), range(0, 0));
        assert_eq!(root.children_with_tokens().count(), 0);
        assert!(parse.is_valid());
    }
}

#[test]
fn bad_characters() {
    let input = "^\u{FFFE}\u{FFFF}";
    let parse = parse(input, xpath());
    let root = parse.syntax();

    let children: Vec<_> = root
        .children_with_tokens()
        .map(|child| (child.kind(), child.text_range()))
        .collect();
    assert_eq!(
        children,
        vec![
            (SyntaxKind::Error, range(0, 0)),
            (SyntaxKind::Error, range(0, 1)),
            (SyntaxKind::BadCharacter, range(1, 4)),
            (SyntaxKind::BadCharacter, range(4, 7)),
        ]
    );

    let wrapped = root
        .children()
        .nth(1)
        .and_then(|node| node.first_token())
        .map(|token| (token.kind(), token.text().to_string()));
    assert_eq!(wrapped, Some((SyntaxKind::BadCharacter, "^".to_string())));

    let missing = parse.error_at(range(0, 0)).map(|e| e.kind);
    assert_eq!(missing, Some(DiagnosticKind::ExpectedExpression));
    let lexical = parse.errors().iter().filter(|e| e.kind.is_lexical()).count();
    assert_eq!(lexical, 3);
}

#[test]
fn missing_right_operand_has_no_lexical_errors() {
    let parse = parse("1 or", xpath());
    let root = parse.syntax();
    let or_expr = root.first_child().expect("OrExpr");
    assert_eq!(or_expr.kind(), SyntaxKind::OrExpr);

    let last = or_expr.last_child_or_token().expect("operand");
    assert_eq!(last.kind(), SyntaxKind::Error);
    assert_eq!(last.text_range(), range(4, 4));
    assert!(matches!(last, NodeOrToken::Node(_)));

    assert!(parse.errors().iter().all(|e| !e.kind.is_lexical()));
    let error = parse.error_at(last.text_range()).expect("diagnostic");
    assert_eq!(error.kind, DiagnosticKind::ExpectedExpression);
    assert_eq!(error.code(), "XPST0003");
}

#[test]
fn every_error_node_has_a_diagnostic() {
    for input in ["1 or", "(1, 2", "foo::bar", "if (1) 2 else 3", "f(1 ; 2)", "1 = 2 = 3"] {
        let parse = parse(input, xpath());
        for node in parse.syntax().descendants() {
            if node.kind() == SyntaxKind::Error {
                assert!(
                    parse.error_at(node.text_range()).is_some(),
                    "no diagnostic for error node at {:?} in {input:?}",
                    node.text_range()
                );
            }
        }
    }
}

#[test]
fn into_parts_keeps_tree_and_errors() {
    let parse = parse("1 +", xpath());
    let expected = parse.errors().to_vec();
    let (root, errors) = parse.into_parts();
    assert_eq!(root.text().to_string(), "1 +");
    assert_eq!(errors, expected);
}

#[test]
fn parses_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("for $x in 1 to {i} return $x");
                parse(&input, xpath()).is_valid()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("parser thread"));
    }
}
