use crate::dialect::{DialectConfig, Version};
use crate::parser::parse;
use crate::parser::tests::{dump_invalid, errors, xpath};

#[test]
fn range_in_xpath_1() {
    insta::assert_snapshot!(dump_invalid("1 to 3", DialectConfig::xpath(Version::V1_0)), @r#"
    Root
      IntegerLiteral "1"
      Error
        KwTo "to"
      Error
        IntegerLiteral "3"
    ---
    error[XPST0003] at 2..4: range expression requires XPath 2.0
    "#);
}

#[test]
fn map_constructor_in_xpath_3_0() {
    insta::assert_snapshot!(dump_invalid("map { 1: 2 }", DialectConfig::xpath(Version::V3_0)), @r#"
    Root
      Error
        KwMap "map"
        BraceOpen "{"
        IntegerLiteral "1"
        Colon ":"
        IntegerLiteral "2"
        BraceClose "}"
    ---
    error[XPST0003] at 0..12: map constructor requires XPath 3.1
    "#);
}

#[test]
fn vendor_operator_without_vendor() {
    insta::assert_snapshot!(
        errors("a orElse b", xpath()),
        @"error[XPST0003] at 2..8: `orElse`/`andAlso` requires Saxon 9.9"
    );
}

#[test]
fn keyword_argument_before_4_0() {
    insta::assert_snapshot!(dump_invalid("f(a := 1)", xpath()), @r#"
    Root
      FunctionCall
        Name
          NCName "f"
        ArgumentList
          ParenOpen "("
          Error
            NCName "a"
            Assign ":="
          IntegerLiteral "1"
          ParenClose ")"
    ---
    error[XPST0003] at 2..6: keyword argument requires XPath 4.0
    "#);
}

#[test]
fn keyword_argument_in_4_0() {
    let parse = parse("f(a := 1)", DialectConfig::xpath(Version::V4_0));
    assert!(parse.is_valid());
    assert!(parse.debug_tree().contains("KeywordArgument"));
}

#[test]
fn xquery_only_syntax_in_xpath() {
    let parse = parse("<a/>", xpath());
    assert!(!parse.is_valid());
    assert_eq!(parse.syntax().text().to_string(), "<a/>");
}

#[test]
fn dialect_never_changes_text() {
    let input = "for $x in 1 to 3 return $x ?: 0";
    for dialect in [
        DialectConfig::xpath(Version::V1_0),
        DialectConfig::xpath(Version::V3_1),
        DialectConfig::xquery(Version::V1_0),
        DialectConfig::xquery(Version::V4_0),
    ] {
        let parse = parse(input, dialect);
        assert_eq!(parse.syntax().text().to_string(), input, "{dialect}");
    }
}

#[test]
fn lone_annotation_before_xquery_3_0() {
    insta::assert_snapshot!(dump_invalid("%", DialectConfig::xpath(Version::V1_0)), @r#"
    Root
      Error
        Percent "%"
    ---
    error[XPST0003] at 0..1: annotation requires XQuery 3.0
    "#);
}

#[test]
fn annotated_inline_function_before_3_0() {
    let parse = parse("%a function($x) { 1 }", DialectConfig::xpath(Version::V2_0));
    assert!(
        parse
            .syntax()
            .descendants()
            .all(|node| node.kind() != crate::SyntaxKind::InlineFunctionExpr)
    );
    assert_eq!(
        parse.errors()[0].to_string(),
        "error[XPST0003] at 0..2: annotation requires XQuery 3.0"
    );
}
