use crate::parser::tests::{dump_invalid, dump_valid, xquery};

#[test]
fn direct_element_with_attribute_and_enclosed_expr() {
    insta::assert_snapshot!(dump_valid(r#"<a x="1">t{2}</a>"#, xquery()), @r#"
    Root
      MainModule
        QueryBody
          DirElemConstructor
            StartTagOpen "<"
            Name
              NCName "a"
            DirAttributeList
              DirAttribute
                Name
                  NCName "x"
                Equals "="
                DirAttributeValue
                  DoubleQuote "\""
                  AttrValueChars "1"
                  DoubleQuote "\""
            TagClose ">"
            XmlContentChars "t"
            EnclosedExpr
              BraceOpen "{"
              IntegerLiteral "2"
              BraceClose "}"
            EndTagOpen "</"
            Name
              NCName "a"
            TagClose ">"
    "#);
}

#[test]
fn mismatched_end_tag() {
    insta::assert_snapshot!(dump_invalid("<a></b>", xquery()), @r#"
    Root
      MainModule
        QueryBody
          DirElemConstructor
            StartTagOpen "<"
            Name
              NCName "a"
            TagClose ">"
            EndTagOpen "</"
            Error
              Name
                NCName "b"
            TagClose ">"
    ---
    error[XPST0003] at 5..6: end tag does not match start tag `<a>`
    "#);
}

#[test]
fn unclosed_element() {
    insta::assert_snapshot!(dump_invalid("<a>x", xquery()), @r#"
    Root
      MainModule
        QueryBody
          DirElemConstructor
            StartTagOpen "<"
            Name
              NCName "a"
            TagClose ">"
            XmlContentChars "x"
            Error
    ---
    error[XPST0003] at 4..4: missing end tag for `<a>`
    "#);
}

#[test]
fn computed_element() {
    insta::assert_snapshot!(dump_valid(r#"element e { "v" }"#, xquery()), @r#"
    Root
      MainModule
        QueryBody
          CompElemConstructor
            KwElement "element"
            Name
              NCName "e"
            EnclosedExpr
              BraceOpen "{"
              StringLiteral
                DoubleQuote "\""
                StringContents "v"
                DoubleQuote "\""
              BraceClose "}"
    "#);
}

#[test]
fn nested_elements_round_trip() {
    let input = r#"<ul>{ for $i in 1 to 2 return <li n="{$i}">{ $i }</li> }</ul>"#;
    let parse = crate::parser::parse(input, xquery());
    assert!(parse.is_valid(), "{}", parse.diagnostics().printer().render());
    assert_eq!(parse.syntax().text().to_string(), input);
    assert_eq!(parse.debug_tree().matches("DirElemConstructor").count(), 2);
}
