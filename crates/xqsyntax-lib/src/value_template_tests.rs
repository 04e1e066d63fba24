use rowan::TextRange;

use crate::dialect::{DialectConfig, Version};
use crate::value_template::{parse, scan};

fn spans(text: &str) -> Vec<(u32, u32)> {
    scan(text)
        .into_iter()
        .map(|r| (u32::from(r.start()), u32::from(r.end())))
        .collect()
}

#[test]
fn single_expression() {
    assert_eq!(spans("{1234}"), vec![(0, 6)]);
}

#[test]
fn nested_braces() {
    assert_eq!(spans("{array {1, 2, 3}}"), vec![(0, 17)]);
}

#[test]
fn unterminated_runs_to_end() {
    assert_eq!(spans("{1234"), vec![(0, 5)]);
}

#[test]
fn literal_text_and_escapes() {
    assert_eq!(spans("plain"), vec![]);
    assert_eq!(spans("{{not}} an expr"), vec![]);
    assert_eq!(spans("a{{b}}{1}c{2}"), vec![(6, 9), (10, 13)]);
}

#[test]
fn braces_in_strings_and_comments_do_not_count() {
    assert_eq!(spans(r#"{"}"}x"#), vec![(0, 5)]);
    assert_eq!(spans("{'a''}'}"), vec![(0, 8)]);
    assert_eq!(spans("{1 (: } (: } :) :)}"), vec![(0, 19)]);
}

#[test]
fn parses_each_expression() {
    let exprs = parse("id-{$n + 1}-{", DialectConfig::xpath(Version::V3_1));
    assert_eq!(exprs.len(), 2);

    let first = &exprs[0];
    assert!(first.is_closed());
    assert_eq!(first.range, TextRange::new(3.into(), 11.into()));
    assert_eq!(first.expr_range, TextRange::new(4.into(), 10.into()));
    assert!(first.parse.is_valid());
    insta::assert_snapshot!(first.parse.debug_tree(), @r#"
    Root
      AdditiveExpr
        VarRef
          Dollar "$"
          Name
            NCName "n"
        Plus "+"
        IntegerLiteral "1"
    "#);

    let second = &exprs[1];
    assert!(!second.is_closed());
    assert!(second.expr_range.is_empty());
    assert!(second.parse.is_valid());
}

#[test]
fn unclosed_nested_segment_is_not_closed() {
    let exprs = parse("{a{}", DialectConfig::xpath(Version::V3_1));
    assert_eq!(exprs.len(), 1);
    assert!(!exprs[0].is_closed());
    assert_eq!(exprs[0].expr_range, TextRange::new(1.into(), 4.into()));
}
