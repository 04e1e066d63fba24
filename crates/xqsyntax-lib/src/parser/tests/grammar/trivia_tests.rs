use crate::parser::parse;
use crate::parser::tests::{dump_with_trivia, xpath};

#[test]
fn trivia_between_tokens_stays_in_the_node() {
    let parse = parse("1 (: c :) + 2", xpath());
    insta::assert_snapshot!(dump_with_trivia(&parse), @r#"
    Root
      AdditiveExpr
        IntegerLiteral "1"
        Whitespace " "
        Comment "(: c :)"
        Whitespace " "
        Plus "+"
        Whitespace " "
        IntegerLiteral "2"
    "#);
}

#[test]
fn leading_and_trailing_trivia_attach_to_root() {
    let parse = parse(" 1 + 2 ", xpath());
    insta::assert_snapshot!(dump_with_trivia(&parse), @r#"
    Root
      Whitespace " "
      AdditiveExpr
        IntegerLiteral "1"
        Whitespace " "
        Plus "+"
        Whitespace " "
        IntegerLiteral "2"
      Whitespace " "
    "#);
}

#[test]
fn comment_only_input() {
    let parse = parse("(: nothing :)", xpath());
    assert!(parse.is_valid());
    insta::assert_snapshot!(dump_with_trivia(&parse), @r#"
    Root
      Comment "(: nothing :)"
    "#);
}

#[test]
fn spans() {
    let parse = parse("a/b", xpath());
    let dump = crate::parser::TreePrinter::new(&parse.syntax())
        .with_spans(true)
        .dump();
    insta::assert_snapshot!(dump, @r#"
    Root 0..3
      PathExpr 0..3
        Name 0..1
          NCName 0..1 "a"
        Slash 1..2 "/"
        Name 2..3
          NCName 2..3 "b"
    "#);
}
