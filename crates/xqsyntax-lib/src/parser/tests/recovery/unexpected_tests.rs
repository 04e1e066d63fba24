use indoc::indoc;

use crate::parser::parse;
use crate::parser::tests::{dump_invalid, errors, xpath, xquery};

#[test]
fn expression_after_end() {
    insta::assert_snapshot!(dump_invalid("1 2", xpath()), @r#"
    Root
      IntegerLiteral "1"
      Error
        IntegerLiteral "2"
    ---
    error[XPST0003] at 2..3: unexpected expression after end of input
    "#);
}

#[test]
fn stray_closer() {
    insta::assert_snapshot!(dump_invalid("1 )", xpath()), @r#"
    Root
      IntegerLiteral "1"
      Error
        ParenClose ")"
    ---
    error[XPST0003] at 2..3: unexpected `)`
    "#);
}

#[test]
fn only_the_first_trailing_item_is_reported() {
    let parse = parse("1 ) ] }", xpath());
    assert_eq!(parse.errors().len(), 1);
    assert_eq!(parse.syntax().text().to_string(), "1 ) ] }");
}

#[test]
fn declaration_after_body_declarations() {
    let input = indoc! {r#"
    declare variable $x := 1;
    declare namespace p = "u";
    $x
    "#};

    insta::assert_snapshot!(
        errors(input, xquery()),
        @"error[XPST0003] at 26..51: unexpected declaration after variable and function declarations"
    );
}

#[test]
fn garbage_inside_argument_list() {
    let input = "f(1 ; 2)";
    let parse = parse(input, xpath());
    assert_eq!(parse.syntax().text().to_string(), input);
    insta::assert_snapshot!(
        parse.diagnostics().printer().render(),
        @"error[XPST0003] at 4..7: unexpected `;`"
    );
}
