use crate::parser::parse;
use crate::parser::tests::{dump_invalid, xpath, xquery};

#[test]
fn missing_paren() {
    insta::assert_snapshot!(dump_invalid("(1, 2", xpath()), @r#"
    Root
      ParenthesizedExpr
        ParenOpen "("
        Expr
          IntegerLiteral "1"
          Comma ","
          IntegerLiteral "2"
        Error
    ---
    error[XPST0003] at 5..5: missing closing `)` (related: `(` opened here at 0..1)
    "#);
}

#[test]
fn missing_bracket_points_at_opener() {
    let parse = parse("a[1", xpath());
    let errors = parse.errors();
    assert_eq!(errors.len(), 1);
    let related = errors[0].related.as_ref().map(|r| (r.message.as_str(), r.range));
    assert_eq!(
        related,
        Some(("`[` opened here", rowan::TextRange::new(1.into(), 2.into())))
    );
}

#[test]
fn unclosed_string_literal() {
    insta::assert_snapshot!(dump_invalid(r#""abc"#, xpath()), @r#"
    Root
      StringLiteral
        DoubleQuote "\""
        StringContents "abc"
        Error
    ---
    error[XPST0003] at 4..4: unclosed string literal
    "#);
}

#[test]
fn unclosed_comment_is_lexical() {
    let parse = parse("1 (: open", xpath());
    let kinds: Vec<_> = parse.errors().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![crate::DiagnosticKind::UnclosedComment]);
    assert_eq!(parse.syntax().text().to_string(), "1 (: open");
}

#[test]
fn unclosed_enclosed_expression_in_element() {
    let input = "<a>{1</a>";
    let parse = parse(input, xquery());
    assert!(!parse.is_valid());
    assert_eq!(parse.syntax().text().to_string(), input);
}
